use super::destinations::City;
use super::{Amount, ProgramRef};
use crate::macros::setter;
use crate::request::{Endpoint, RequestData};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: ProgramCategory,
    pub duration_days: u32,
    /// Price per guest in minor units of `currency`
    pub price: Amount,
    pub currency: String,
    pub rating: Option<f32>,
    pub hero_image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub facility: FacilitySummary,
    pub city: City,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramCategory {
    Longevity,
    Detox,
    MedicalSpa,
    Fitness,
    MentalWellness,
    Nutrition,
    Recovery,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPrograms {
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<ProgramCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
}

impl ListPrograms {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt country: String);
    setter!(opt city: String);
    setter!(opt category: ProgramCategory);
    setter!(opt search: String);
    setter!(opt featured: bool);
    setter!(opt page: u32);
    setter!(opt per_page: u32);
}

impl Endpoint for ListPrograms {
    type Data = Self;
    type Response = ProgramsPage;

    fn path(&self) -> Cow<'_, str> {
        "/programs".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProgram {
    program: ProgramRef,
}

impl GetProgram {
    pub fn new(program: impl Into<ProgramRef>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Endpoint for GetProgram {
    type Data = Self;
    type Response = Program;

    fn path(&self) -> Cow<'_, str> {
        format!("/programs/{}", self.program).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

// Responses

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramsPage {
    pub programs: Vec<Program>,
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub per_page: Option<u32>,
}

fn first_page() -> u32 {
    1
}
