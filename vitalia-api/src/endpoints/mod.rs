pub mod auth;
pub mod bookings;
pub mod destinations;
pub mod facility;
pub mod programs;
pub mod users;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// A money amount in minor units (cents). The backend never sends floats for
/// prices.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::ops::Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Program detail pages are addressable by id or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramRef {
    Id(Uuid),
    Slug(String),
}

impl Display for ProgramRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => id.fmt(f),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

impl From<Uuid> for ProgramRef {
    fn from(id: Uuid) -> Self {
        ProgramRef::Id(id)
    }
}

impl From<&str> for ProgramRef {
    fn from(s: &str) -> Self {
        match Uuid::parse_str(s) {
            Ok(id) => ProgramRef::Id(id),
            Err(_) => ProgramRef::Slug(s.to_string()),
        }
    }
}

impl From<String> for ProgramRef {
    fn from(s: String) -> Self {
        ProgramRef::from(s.as_str())
    }
}

impl Serialize for ProgramRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ProgramRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ProgramRef::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_ref_parses_uuid_or_slug() {
        let id = "8f3c2a1e-4b5d-4c6e-9f0a-1b2c3d4e5f60";
        assert!(matches!(ProgramRef::from(id), ProgramRef::Id(_)));
        assert_eq!(
            ProgramRef::from("alpine-longevity-retreat"),
            ProgramRef::Slug("alpine-longevity-retreat".to_string())
        );
    }

    #[test]
    fn amount_converts_to_major_units() {
        assert_eq!(Amount::new(349900).as_major_f64(), 3499.0);
        assert_eq!(Amount::new(50).as_major_f64(), 0.5);
    }
}
