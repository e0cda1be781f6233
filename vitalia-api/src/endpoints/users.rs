use crate::macros::setter;
use crate::request::{Endpoint, Method, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Facility,
    Admin,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetProfile;

impl GetProfile {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for GetProfile {
    type Data = Self;
    type Response = User;

    fn path(&self) -> Cow<'_, str> {
        "/users/me".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

impl UpdateProfile {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt name: String);
    setter!(opt avatar_url: String);
}

impl Endpoint for UpdateProfile {
    type Data = Self;
    type Response = User;
    const METHOD: Method = Method::PUT;

    fn path(&self) -> Cow<'_, str> {
        "/users/me".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

/// Admin-only listing of platform users.
#[derive(Default, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
}

impl ListUsers {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt role: Role);
    setter!(opt page: u32);
    setter!(opt per_page: u32);
}

impl Endpoint for ListUsers {
    type Data = Self;
    type Response = UsersPage;

    fn path(&self) -> Cow<'_, str> {
        "/admin/users".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}
