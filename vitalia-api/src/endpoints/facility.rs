use super::bookings::{Booking, BookingStatus};
use super::programs::Program;
use crate::macros::setter;
use crate::request::{Endpoint, RequestData};
use serde::Serialize;
use std::borrow::Cow;

// Requests

/// Programs owned by the authenticated facility account.
#[derive(Default, Debug, Clone, Serialize)]
pub struct ListFacilityPrograms;

impl ListFacilityPrograms {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for ListFacilityPrograms {
    type Data = Self;
    type Response = Vec<Program>;

    fn path(&self) -> Cow<'_, str> {
        "/facility/programs".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

/// Bookings made against the authenticated facility's programs.
#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFacilityBookings {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<BookingStatus>,
}

impl ListFacilityBookings {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt status: BookingStatus);
}

impl Endpoint for ListFacilityBookings {
    type Data = Self;
    type Response = Vec<Booking>;

    fn path(&self) -> Cow<'_, str> {
        "/facility/bookings".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}
