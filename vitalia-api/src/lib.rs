mod client;
pub mod endpoints;
mod error;
mod macros;
pub mod repositories;
mod request;

pub use crate::client::Client;
pub use crate::error::{ApiError, ErrorKind};
pub use crate::request::{EmptyResponse, Endpoint, Method, RequestData};
use repositories::*;

pub struct Request;

impl Request {
    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn programs() -> ProgramRepository {
        ProgramRepository::new()
    }

    pub fn destinations() -> DestinationRepository {
        DestinationRepository::new()
    }

    pub fn bookings() -> BookingRepository {
        BookingRepository::new()
    }

    pub fn users() -> UserRepository {
        UserRepository::new()
    }

    pub fn facility() -> FacilityRepository {
        FacilityRepository::new()
    }
}
