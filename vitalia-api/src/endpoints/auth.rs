use super::users::User;
use crate::request::{EmptyResponse, Endpoint, Method, RequestData};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

/// Tokens handed out on login, registration and OTP verification. The refresh
/// token is absent for flows that do not establish a long-lived session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Wire shape of the refresh exchange. Issued by the client itself when a
/// request fails authorization, never through [`crate::Client::send`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// Requests

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    email: String,
    password: String,
}

impl Login {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Endpoint for Login {
    type Data = Self;
    type Response = AuthSession;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/auth/login".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    name: String,
    email: String,
    password: String,
}

impl Register {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Endpoint for Register {
    type Data = Self;
    type Response = AuthSession;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/auth/register".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtp {
    email: String,
}

impl RequestOtp {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Endpoint for RequestOtp {
    type Data = Self;
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/auth/otp/request".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtp {
    email: String,
    code: String,
}

impl VerifyOtp {
    pub fn new(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
        }
    }
}

impl Endpoint for VerifyOtp {
    type Data = Self;
    type Response = AuthSession;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/auth/otp/verify".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct Logout;

impl Logout {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for Logout {
    type Data = Self;
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn path(&self) -> Cow<'_, str> {
        "/auth/logout".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}
