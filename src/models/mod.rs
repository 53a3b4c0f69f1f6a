//! Data models for the volunteer roster.
//!
//! Field names serialize as camelCase to stay compatible with the persisted
//! blob layout and the CSV column conventions.

mod group;
mod roster_data;
mod volunteer;

pub use group::*;
pub use roster_data::*;
pub use volunteer::*;

use chrono::Utc;
use uuid::Uuid;

/// Generate a fresh entity id of the form `<prefix>-<millis>-<random>`.
///
/// The prefix namespaces entity kinds so volunteer and group ids never
/// collide; the random suffix comes from a v4 UUID so ids are unique without
/// retry logic.
pub fn new_entity_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &suffix[..8])
}
