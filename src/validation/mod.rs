//! Normalization helpers and per-record validators.
//!
//! Normalized forms are used for equality comparisons only; stored values
//! keep their original casing. Each validator is a pure validate-or-reject
//! function so call sites never special-case per-field logic inline.

use crate::errors::AppError;
use crate::models::{Group, RosterData, Volunteer};

/// Trimmed, lowercased email form used for uniqueness comparisons.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trimmed, lowercased group-name form used for uniqueness comparisons.
pub fn normalize_group_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check the basic shape of an email address: a single `@` separating a
/// non-empty local part from a dotted domain, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot and no empty labels.
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

/// Validate a full volunteer record.
pub fn validate_volunteer(volunteer: &Volunteer) -> Result<(), AppError> {
    if volunteer.id.trim().is_empty() {
        return Err(AppError::Validation("Volunteer id is required".to_string()));
    }
    if volunteer.firstname.trim().is_empty() || volunteer.lastname.trim().is_empty() {
        return Err(AppError::Validation(
            "First name and last name are required".to_string(),
        ));
    }
    if !is_valid_email(&volunteer.email) {
        return Err(AppError::Validation(
            "Email address is invalid".to_string(),
        ));
    }
    Ok(())
}

/// Validate a group record.
pub fn validate_group(group: &Group) -> Result<(), AppError> {
    if group.id.trim().is_empty() {
        return Err(AppError::Validation("Group id is required".to_string()));
    }
    if group.name.trim().is_empty() {
        return Err(AppError::Validation("Group name is required".to_string()));
    }
    Ok(())
}

/// Validate the persisted aggregate record by record.
///
/// Used as the schema gate when opening a store; any failure triggers the
/// reset-to-empty recovery policy rather than an error to the caller.
pub fn validate_roster_data(data: &RosterData) -> Result<(), AppError> {
    for volunteer in &data.volunteers {
        validate_volunteer(volunteer)?;
    }
    for group in &data.groups {
        validate_group(group)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Group, Volunteer};

    fn volunteer() -> Volunteer {
        Volunteer {
            id: "volunteer-1".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "jane@example.com".to_string(),
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
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
        assert_eq!(normalize_group_name(" Drivers "), "drivers");
    }

    #[test]
    fn email_format_acceptance() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email(" jane.doe+tag@sub.example.org "));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@exam ple.com"));
        assert!(!is_valid_email("jane@example..com"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn volunteer_validator_rejects_missing_fields() {
        assert!(validate_volunteer(&volunteer()).is_ok());

        let mut missing_name = volunteer();
        missing_name.lastname = "  ".to_string();
        assert!(validate_volunteer(&missing_name).is_err());

        let mut bad_email = volunteer();
        bad_email.email = "not-an-email".to_string();
        assert!(validate_volunteer(&bad_email).is_err());
    }

    #[test]
    fn roster_data_validator_checks_every_record() {
        let data = RosterData {
            volunteers: vec![volunteer()],
            groups: vec![Group {
                id: "group-1".to_string(),
                name: String::new(),
            }],
        };
        assert!(validate_roster_data(&data).is_err());
    }
}
