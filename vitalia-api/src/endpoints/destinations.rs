use crate::macros::setter;
use crate::request::{Endpoint, RequestData};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    pub id: Uuid,
    pub name: String,
    /// ISO 3166-1 alpha-2, lowercased by the backend
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub program_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country: CountrySummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub cities: Vec<CitySummary>,
    #[serde(default)]
    pub program_count: u32,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListCountries;

impl ListCountries {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for ListCountries {
    type Data = Self;
    type Response = Vec<Country>;

    fn path(&self) -> Cow<'_, str> {
        "/countries".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCities {
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl ListCities {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt country: String);
}

impl Endpoint for ListCities {
    type Data = Self;
    type Response = Vec<City>;

    fn path(&self) -> Cow<'_, str> {
        "/cities".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}
