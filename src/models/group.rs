//! Group model.

use serde::{Deserialize, Serialize};

/// A named volunteer group.
///
/// `name` is unique among groups under trimmed, lowercased comparison; the
/// stored value keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
}
