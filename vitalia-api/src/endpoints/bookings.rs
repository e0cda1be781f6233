use super::Amount;
use crate::macros::setter;
use crate::request::{Endpoint, Method, RequestData};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub program: BookingProgram,
    pub status: BookingStatus,
    pub start_date: NaiveDate,
    pub guests: u32,
    pub total_price: Amount,
    pub currency: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// The slice of a program a booking carries around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingProgram {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub hero_image: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

// Requests

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    program_id: Uuid,
    start_date: NaiveDate,
    guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl CreateBooking {
    pub fn new(program_id: Uuid, start_date: NaiveDate) -> Self {
        Self {
            program_id,
            start_date,
            guests: 1,
            notes: None,
        }
    }

    setter!(guests: u32);
    setter!(opt notes: String);
}

impl Endpoint for CreateBooking {
    type Data = Self;
    type Response = Booking;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/bookings".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListMyBookings;

impl ListMyBookings {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for ListMyBookings {
    type Data = Self;
    type Response = Vec<Booking>;

    fn path(&self) -> Cow<'_, str> {
        "/bookings/me".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetBooking {
    id: Uuid,
}

impl GetBooking {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl Endpoint for GetBooking {
    type Data = Self;
    type Response = Booking;

    fn path(&self) -> Cow<'_, str> {
        format!("/bookings/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelBooking {
    id: Uuid,
}

impl CancelBooking {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl Endpoint for CancelBooking {
    type Data = Self;
    type Response = Booking;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        format!("/bookings/{}/cancel", self.id).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}
