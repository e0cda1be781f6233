use std::borrow::Cow;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use reqwest::Method;

/// How an endpoint's payload travels: not at all, as query parameters, or as a
/// JSON body.
pub enum RequestData<T> {
    Empty,
    Query(T),
    Json(T),
}

/// A single typed call against the Vitalia backend.
///
/// Implementations describe the wire shape only; authentication, the response
/// envelope and error normalization are the client's concern, so callers never
/// see any of them.
pub trait Endpoint {
    type Data: Serialize;
    type Response: DeserializeOwned;

    const METHOD: Method = Method::GET;

    fn path(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<&Self::Data>;
}

/// Response type for endpoints whose body carries nothing of interest
/// (logout, OTP request). Accepts any body, including none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResponse;

impl<'de> serde::Deserialize<'de> for EmptyResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(EmptyResponse)
    }
}
