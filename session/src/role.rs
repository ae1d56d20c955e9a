//! Closed set of user roles.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A user role. The wire and storage form is `ROLE_<NAME>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "ROLE_HOMEOWNER")]
    Homeowner,
    #[serde(rename = "ROLE_TECHNICIAN")]
    Technician,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// Returned by [`Role::from_str`] for strings outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Homeowner, Role::Technician, Role::Admin];

    /// Storage/wire representation, e.g. `"ROLE_ADMIN"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Homeowner => "ROLE_HOMEOWNER",
            Self::Technician => "ROLE_TECHNICIAN",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Human-facing label used in headers and selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Homeowner => "Homeowner",
            Self::Technician => "Technician",
            Self::Admin => "Administrator",
        }
    }

    /// Parse a role leniently, returning `None` for anything unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts `ROLE_ADMIN`, `ADMIN`, and any casing of either.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let upper = raw.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "HOMEOWNER" => Ok(Self::Homeowner),
            "TECHNICIAN" => Ok(Self::Technician),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(UnknownRole(raw.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
