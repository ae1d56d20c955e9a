//! REST DTOs for the Warranty Tracker backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields default so
//! older or trimmed responses still decode; enums carry an `Unknown` arm so a
//! new server-side status never breaks a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Ids arrive as numbers from some endpoints and strings from others.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid id: {other}"))),
    }
}

/// A registered appliance and its warranty window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub purchase_date: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub warranty_expiry_date: String,
    #[serde(default)]
    pub owner_username: Option<String>,
}

/// Body for creating or replacing an appliance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceInput {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub warranty_expiry_date: String,
}

impl From<&Appliance> for ApplianceInput {
    fn from(a: &Appliance) -> Self {
        Self {
            name: a.name.clone(),
            brand: a.brand.clone(),
            model: a.model.clone(),
            serial_number: a.serial_number.clone(),
            purchase_date: a.purchase_date.clone(),
            warranty_expiry_date: a.warranty_expiry_date.clone(),
        }
    }
}

/// Lifecycle of a service request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Assigned => "Assigned",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS modifier for status badges.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--pending",
            Self::Assigned => "badge badge--assigned",
            Self::InProgress => "badge badge--progress",
            Self::Completed => "badge badge--done",
            Self::Cancelled | Self::Unknown => "badge badge--muted",
        }
    }

    /// Whether an admin may still (re)assign a technician.
    #[must_use]
    pub fn is_assignable(self) -> bool {
        matches!(self, Self::Pending | Self::Assigned)
    }

    /// Whether the assigned technician may start work.
    #[must_use]
    pub fn can_start(self) -> bool {
        self == Self::Assigned
    }

    /// Whether the assigned technician may file a completion form.
    #[must_use]
    pub fn can_complete(self) -> bool {
        matches!(self, Self::Assigned | Self::InProgress)
    }
}

/// Completion form filed by a technician.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub notes: String,
    pub labor_hours: f64,
    pub parts_cost: f64,
    /// `YYYY-MM-DD`
    pub completed_on: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub appliance_id: String,
    #[serde(default)]
    pub appliance_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub homeowner_username: Option<String>,
    #[serde(default)]
    pub technician_username: Option<String>,
    #[serde(default)]
    pub completion: Option<Completion>,
}

/// Body for opening a service request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    pub appliance_id: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

/// A warranty inside the notification window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryNotice {
    #[serde(deserialize_with = "deserialize_id")]
    pub appliance_id: String,
    pub appliance_name: String,
    #[serde(default)]
    pub owner_username: Option<String>,
    pub warranty_expiry_date: String,
    #[serde(default)]
    pub days_remaining: Option<i64>,
}

/// Result of an admin "send notifications" run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReport {
    #[serde(default)]
    pub sent: u32,
}

/// Successful login payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Signup body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: session::Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Technician assignment body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(serialize_with = "serialize_id")]
    pub technician_id: String,
}

/// Numeric-looking ids go back out as numbers so numeric backends accept them.
fn serialize_id<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match id.parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(id),
    }
}
