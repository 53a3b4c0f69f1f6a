//! Persisted aggregate and batch-import result types.

use serde::{Deserialize, Serialize};

use super::{Group, Volunteer};

/// The single persisted aggregate containing all volunteers and groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterData {
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Result of a bulk CSV import: counters plus one message per skipped row,
/// in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}
