//! Group management operations.

use super::Roster;
use crate::errors::AppError;
use crate::models::{new_entity_id, Group};
use crate::validation::normalize_group_name;

impl Roster {
    /// Create a group from a trimmed, case-insensitively unique name.
    pub fn create_group(&mut self, name: &str) -> Result<Group, AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Group name is required".to_string()));
        }

        let normalized = normalize_group_name(trimmed);
        if self
            .store
            .groups()
            .iter()
            .any(|group| normalize_group_name(&group.name) == normalized)
        {
            return Err(AppError::Conflict(
                "A group with this name already exists".to_string(),
            ));
        }

        let group = Group {
            id: new_entity_id("group"),
            name: trimmed.to_string(),
        };

        let mut next = self.store.groups().to_vec();
        next.push(group.clone());
        self.store.set_groups(next)?;

        tracing::info!("Created group {} ({})", group.name, group.id);
        Ok(group)
    }

    /// Rename a group, keeping its id; the duplicate check excludes the
    /// group being renamed.
    pub fn rename_group(&mut self, id: &str, name: &str) -> Result<Group, AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Group name is required".to_string()));
        }

        let normalized = normalize_group_name(trimmed);
        if self
            .store
            .groups()
            .iter()
            .any(|group| group.id != id && normalize_group_name(&group.name) == normalized)
        {
            return Err(AppError::Conflict(
                "A group with this name already exists".to_string(),
            ));
        }

        if !self.store.groups().iter().any(|group| group.id == id) {
            return Err(AppError::NotFound(format!("Group {} not found", id)));
        }

        let next: Vec<Group> = self
            .store
            .groups()
            .iter()
            .map(|group| {
                if group.id == id {
                    Group {
                        id: group.id.clone(),
                        name: trimmed.to_string(),
                    }
                } else {
                    group.clone()
                }
            })
            .collect();
        self.store.set_groups(next)?;

        Ok(Group {
            id: id.to_string(),
            name: trimmed.to_string(),
        })
    }

    /// Delete a group and strip its id from every volunteer. Idempotent:
    /// deleting an unknown id is a no-op.
    pub fn delete_group(&mut self, id: &str) -> Result<(), AppError> {
        let next_groups: Vec<Group> = self
            .store
            .groups()
            .iter()
            .filter(|group| group.id != id)
            .cloned()
            .collect();
        self.store.set_groups(next_groups)?;

        let next_volunteers = self
            .store
            .volunteers()
            .iter()
            .map(|volunteer| {
                let mut volunteer = volunteer.clone();
                volunteer.groups.retain(|group_id| group_id != id);
                volunteer
            })
            .collect();
        self.store.set_volunteers(next_volunteers)?;

        Ok(())
    }

    /// Resolve group ids to names, silently dropping ids with no match.
    pub fn group_name_list(&self, group_ids: &[String]) -> Vec<String> {
        group_ids
            .iter()
            .filter_map(|group_id| {
                self.store
                    .groups()
                    .iter()
                    .find(|group| &group.id == group_id)
                    .map(|group| group.name.clone())
            })
            .collect()
    }
}
