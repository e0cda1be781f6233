use crate::endpoints::{
    ProgramRef,
    auth::{Login, Logout, Register, RequestOtp, VerifyOtp},
    bookings::{CancelBooking, CreateBooking, GetBooking, ListMyBookings},
    destinations::{ListCities, ListCountries},
    facility::{ListFacilityBookings, ListFacilityPrograms},
    programs::{GetProgram, ListPrograms},
    users::{GetProfile, ListUsers, UpdateProfile},
};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct AuthRepository;

impl AuthRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn login(&self, email: impl Into<String>, password: impl Into<String>) -> Login {
        Login::new(email, password)
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Register {
        Register::new(name, email, password)
    }

    pub fn request_otp(&self, email: impl Into<String>) -> RequestOtp {
        RequestOtp::new(email)
    }

    pub fn verify_otp(&self, email: impl Into<String>, code: impl Into<String>) -> VerifyOtp {
        VerifyOtp::new(email, code)
    }

    pub fn logout(&self) -> Logout {
        Logout::new()
    }
}

pub struct ProgramRepository;

impl ProgramRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListPrograms {
        ListPrograms::new()
    }

    pub fn get(&self, program: impl Into<ProgramRef>) -> GetProgram {
        GetProgram::new(program)
    }
}

pub struct DestinationRepository;

impl DestinationRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn countries(&self) -> ListCountries {
        ListCountries::new()
    }

    pub fn cities(&self) -> ListCities {
        ListCities::new()
    }
}

pub struct BookingRepository;

impl BookingRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn create(&self, program_id: Uuid, start_date: NaiveDate) -> CreateBooking {
        CreateBooking::new(program_id, start_date)
    }

    pub fn mine(&self) -> ListMyBookings {
        ListMyBookings::new()
    }

    pub fn get(&self, id: Uuid) -> GetBooking {
        GetBooking::new(id)
    }

    pub fn cancel(&self, id: Uuid) -> CancelBooking {
        CancelBooking::new(id)
    }
}

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn profile(&self) -> GetProfile {
        GetProfile::new()
    }

    pub fn update_profile(&self) -> UpdateProfile {
        UpdateProfile::new()
    }

    pub fn list(&self) -> ListUsers {
        ListUsers::new()
    }
}

pub struct FacilityRepository;

impl FacilityRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn programs(&self) -> ListFacilityPrograms {
        ListFacilityPrograms::new()
    }

    pub fn bookings(&self) -> ListFacilityBookings {
        ListFacilityBookings::new()
    }
}
