//! Volunteer model and input payloads.

use serde::{Deserialize, Serialize};

/// Boolean time-slot flags for one availability period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPeriod {
    #[serde(default)]
    pub mo_fr_morning: bool,
    #[serde(default)]
    pub mo_fr_afternoon: bool,
    #[serde(default)]
    pub saturday_morning: bool,
    #[serde(default)]
    pub saturday_afternoon: bool,
}

/// Fixed structure of four period categories, each with four time slots.
///
/// Absent input defaults every flag to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub one_time: AvailabilityPeriod,
    #[serde(default)]
    pub recurring_weekly: AvailabilityPeriod,
    #[serde(default)]
    pub recurring_monthly: AvailabilityPeriod,
    #[serde(default)]
    pub project_based: AvailabilityPeriod,
}

/// A volunteer record.
///
/// `email` is unique across all volunteers under trimmed, lowercased
/// comparison; the stored value keeps its original casing. `groups` holds
/// group ids and never contains duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Payload for creating or updating a volunteer.
///
/// Optional fields default to empty strings / all-false availability during
/// sanitization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerInput {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub groups: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
}
