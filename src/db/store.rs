//! File-backed JSON blob store.
//!
//! The whole roster lives in one JSON document. Every mutation replaces a
//! full collection and persists the next snapshot; readers always see either
//! the previous or the next blob, never a partial write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::models::{Group, RosterData, Volunteer};
use crate::validation::validate_roster_data;

/// Store for the persisted `RosterData` blob.
///
/// Opening validates the blob once; a file that fails to parse or validate
/// is silently replaced with the empty default. That is a recovery policy
/// for corrupted storage, not a reported failure.
#[derive(Debug)]
pub struct BlobStore {
    path: PathBuf,
    data: RosterData,
}

impl BlobStore {
    /// Open the store at `path`, loading and validating the blob.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let data = match load_blob(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(
                    "Resetting roster storage at {:?} to empty default: {}",
                    path,
                    err
                );
                RosterData::default()
            }
        };

        Ok(Self { path, data })
    }

    /// Current volunteer collection.
    pub fn volunteers(&self) -> &[Volunteer] {
        &self.data.volunteers
    }

    /// Current group collection.
    pub fn groups(&self) -> &[Group] {
        &self.data.groups
    }

    /// Replace the volunteer collection and persist the blob.
    pub fn set_volunteers(&mut self, volunteers: Vec<Volunteer>) -> Result<(), AppError> {
        self.data.volunteers = volunteers;
        self.persist()
    }

    /// Replace the group collection and persist the blob.
    pub fn set_groups(&mut self, groups: Vec<Group>) -> Result<(), AppError> {
        self.data.groups = groups;
        self.persist()
    }

    /// Write the current blob via a temp file rename so a crash mid-write
    /// leaves the previous snapshot intact.
    fn persist(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

/// Read and validate the blob file; any failure is reported to the caller,
/// which decides the recovery policy.
fn load_blob(path: &Path) -> Result<RosterData, AppError> {
    if !path.exists() {
        return Ok(RosterData::default());
    }

    let text = fs::read_to_string(path)?;
    let data: RosterData = serde_json::from_str(&text)?;
    validate_roster_data(&data)?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;
    use tempfile::TempDir;

    fn volunteer(id: &str, email: &str) -> Volunteer {
        Volunteer {
            id: id.to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: email.to_string(),
            phone: String::new(),
            street: String::new(),
            postal_code: String::new(),
            city: String::new(),
            interests: String::new(),
            availability: Availability::default(),
            groups: vec![],
            notes: String::new(),
        }
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = BlobStore::open(dir.path().join("roster.json")).unwrap();
        assert!(store.volunteers().is_empty());
        assert!(store.groups().is_empty());
    }

    #[test]
    fn mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");

        let mut store = BlobStore::open(&path).unwrap();
        store
            .set_volunteers(vec![volunteer("volunteer-1", "jane@example.com")])
            .unwrap();
        store
            .set_groups(vec![Group {
                id: "group-1".to_string(),
                name: "Drivers".to_string(),
            }])
            .unwrap();

        let reopened = BlobStore::open(&path).unwrap();
        assert_eq!(reopened.volunteers().len(), 1);
        assert_eq!(reopened.groups()[0].name, "Drivers");
    }

    #[test]
    fn corrupted_file_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "{not json").unwrap();

        let store = BlobStore::open(&path).unwrap();
        assert!(store.volunteers().is_empty());
    }

    #[test]
    fn schema_mismatch_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        // Volunteer with an invalid email fails record validation.
        fs::write(
            &path,
            r#"{"volunteers":[{"id":"v1","firstname":"A","lastname":"B","email":"broken"}],"groups":[]}"#,
        )
        .unwrap();

        let store = BlobStore::open(&path).unwrap();
        assert!(store.volunteers().is_empty());
    }
}
