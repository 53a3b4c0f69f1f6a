//! Volunteer management operations.

use super::Roster;
use crate::errors::AppError;
use crate::models::{new_entity_id, Volunteer, VolunteerInput};
use crate::validation::{is_valid_email, normalize_email};

/// Build a volunteer from raw input: trim every string field, default the
/// absent optional fields, drop empty group tokens, and deduplicate the
/// group list preserving first-seen order. Pure normalization, never fails.
fn sanitize_input(input: &VolunteerInput, id: String) -> Volunteer {
    let mut groups: Vec<String> = Vec::new();
    for group_id in input.groups.clone().unwrap_or_default() {
        if !group_id.is_empty() && !groups.contains(&group_id) {
            groups.push(group_id);
        }
    }

    let opt = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_string();

    Volunteer {
        id,
        firstname: input.firstname.trim().to_string(),
        lastname: input.lastname.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: opt(&input.phone),
        street: opt(&input.street),
        postal_code: opt(&input.postal_code),
        city: opt(&input.city),
        interests: opt(&input.interests),
        availability: input.availability.unwrap_or_default(),
        groups,
        notes: opt(&input.notes),
    }
}

impl Roster {
    /// Create a volunteer with a fresh id after the validation chain:
    /// required names, email format, global email uniqueness.
    pub fn create_volunteer(&mut self, input: &VolunteerInput) -> Result<Volunteer, AppError> {
        let volunteer = sanitize_input(input, new_entity_id("volunteer"));
        self.check_volunteer(&volunteer, None)?;

        let mut next = self.store.volunteers().to_vec();
        next.push(volunteer.clone());
        self.store.set_volunteers(next)?;

        tracing::info!(
            "Created volunteer {} {} ({})",
            volunteer.firstname,
            volunteer.lastname,
            volunteer.id
        );
        Ok(volunteer)
    }

    /// Replace a volunteer's fields, preserving its id; the uniqueness check
    /// excludes the volunteer being updated.
    pub fn update_volunteer(
        &mut self,
        id: &str,
        input: &VolunteerInput,
    ) -> Result<Volunteer, AppError> {
        let volunteer = sanitize_input(input, id.to_string());
        self.check_volunteer(&volunteer, Some(id))?;

        if !self.store.volunteers().iter().any(|v| v.id == id) {
            return Err(AppError::NotFound(format!("Volunteer {} not found", id)));
        }

        let next = self
            .store
            .volunteers()
            .iter()
            .map(|existing| {
                if existing.id == id {
                    volunteer.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.store.set_volunteers(next)?;

        Ok(volunteer)
    }

    /// Delete a volunteer and drop its id from the selection set.
    /// Idempotent: deleting an unknown id is a no-op.
    pub fn delete_volunteer(&mut self, id: &str) -> Result<(), AppError> {
        let next = self
            .store
            .volunteers()
            .iter()
            .filter(|volunteer| volunteer.id != id)
            .cloned()
            .collect();
        self.store.set_volunteers(next)?;
        self.selected_ids.retain(|selected| selected != id);

        Ok(())
    }

    /// Volunteers matching the current search query, in collection order.
    ///
    /// An empty trimmed query matches everything; otherwise the lowercased
    /// query must appear in the space-joined textual fields. Recomputed on
    /// every call instead of cached.
    pub fn filtered_volunteers(&self) -> Vec<&Volunteer> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return self.store.volunteers().iter().collect();
        }

        self.store
            .volunteers()
            .iter()
            .filter(|volunteer| {
                let haystack = [
                    volunteer.firstname.as_str(),
                    volunteer.lastname.as_str(),
                    volunteer.email.as_str(),
                    volunteer.street.as_str(),
                    volunteer.postal_code.as_str(),
                    volunteer.city.as_str(),
                    volunteer.interests.as_str(),
                    volunteer.notes.as_str(),
                ]
                .join(" ")
                .to_lowercase();
                haystack.contains(&query)
            })
            .collect()
    }

    fn is_email_unique(&self, email: &str, except_id: Option<&str>) -> bool {
        let normalized = normalize_email(email);
        !self.store.volunteers().iter().any(|volunteer| {
            if except_id == Some(volunteer.id.as_str()) {
                return false;
            }
            normalize_email(&volunteer.email) == normalized
        })
    }

    fn check_volunteer(
        &self,
        volunteer: &Volunteer,
        except_id: Option<&str>,
    ) -> Result<(), AppError> {
        if volunteer.firstname.is_empty() || volunteer.lastname.is_empty() {
            return Err(AppError::Validation(
                "First name and last name are required".to_string(),
            ));
        }
        if !is_valid_email(&volunteer.email) {
            return Err(AppError::Validation(
                "Email address is invalid".to_string(),
            ));
        }
        if !self.is_email_unique(&volunteer.email, except_id) {
            return Err(AppError::Conflict(
                "This email address is already in use".to_string(),
            ));
        }
        Ok(())
    }
}
