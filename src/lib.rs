//! Volunteer Roster Manager
//!
//! A local-first volunteer roster: volunteers and named groups persisted in a
//! single JSON blob, with CRUD over both, full-text filtering,
//! multi-selection, CSV export, and a fail-soft CSV import reconciliation
//! pipeline.
//!
//! The entry points are [`db::BlobStore`] (open the persisted blob) and
//! [`roster::Roster`] (all management operations over it):
//!
//! ```no_run
//! use volunteer_roster::db::BlobStore;
//! use volunteer_roster::roster::Roster;
//!
//! # fn main() -> Result<(), volunteer_roster::errors::AppError> {
//! let store = BlobStore::open("./data/roster.json")?;
//! let mut roster = Roster::new(store);
//!
//! roster.create_group("Drivers")?;
//! let summary = roster.import_csv("firstname,lastname,email\nJane,Doe,jane@example.com\n")?;
//! assert_eq!(summary.imported, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod csv;
pub mod db;
pub mod errors;
pub mod models;
pub mod roster;
pub mod validation;

pub use db::BlobStore;
pub use errors::AppError;
pub use models::{Group, ImportSummary, Volunteer, VolunteerInput};
pub use roster::Roster;
