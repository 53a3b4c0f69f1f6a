//! CSV export and the import reconciliation pipeline.

use std::collections::{HashMap, HashSet};

use super::Roster;
use crate::csv::{self, CsvRecord};
use crate::errors::AppError;
use crate::models::{
    new_entity_id, Availability, AvailabilityPeriod, Group, ImportSummary, Volunteer,
};
use crate::validation::{
    is_valid_email, normalize_email, normalize_group_name, validate_volunteer,
};

/// Exported/imported column set. Unknown columns in imported files are
/// ignored; all columns are optional per row.
pub const CSV_COLUMNS: [&str; 26] = [
    "firstname",
    "lastname",
    "email",
    "phone",
    "street",
    "postalCode",
    "city",
    "interests",
    "availabilityOneTimeMoFrMorning",
    "availabilityOneTimeMoFrAfternoon",
    "availabilityOneTimeSaturdayMorning",
    "availabilityOneTimeSaturdayAfternoon",
    "availabilityRecurringWeeklyMoFrMorning",
    "availabilityRecurringWeeklyMoFrAfternoon",
    "availabilityRecurringWeeklySaturdayMorning",
    "availabilityRecurringWeeklySaturdayAfternoon",
    "availabilityRecurringMonthlyMoFrMorning",
    "availabilityRecurringMonthlyMoFrAfternoon",
    "availabilityRecurringMonthlySaturdayMorning",
    "availabilityRecurringMonthlySaturdayAfternoon",
    "availabilityProjectBasedMoFrMorning",
    "availabilityProjectBasedMoFrAfternoon",
    "availabilityProjectBasedSaturdayMorning",
    "availabilityProjectBasedSaturdayAfternoon",
    "groups",
    "notes",
];

fn csv_bool(value: bool) -> String {
    if value {
        "x".to_string()
    } else {
        String::new()
    }
}

/// Loosely-formatted truthy tokens; anything else is false.
fn parse_csv_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "ja" | "x"
    )
}

fn push_period(row: &mut Vec<String>, period: &AvailabilityPeriod) {
    row.push(csv_bool(period.mo_fr_morning));
    row.push(csv_bool(period.mo_fr_afternoon));
    row.push(csv_bool(period.saturday_morning));
    row.push(csv_bool(period.saturday_afternoon));
}

fn period_from_record(record: &CsvRecord, period: &str) -> AvailabilityPeriod {
    let slot = |name: &str| parse_csv_bool(record.get(&format!("availability{}{}", period, name)));
    AvailabilityPeriod {
        mo_fr_morning: slot("MoFrMorning"),
        mo_fr_afternoon: slot("MoFrAfternoon"),
        saturday_morning: slot("SaturdayMorning"),
        saturday_afternoon: slot("SaturdayAfternoon"),
    }
}

fn availability_from_record(record: &CsvRecord) -> Availability {
    Availability {
        one_time: period_from_record(record, "OneTime"),
        recurring_weekly: period_from_record(record, "RecurringWeekly"),
        recurring_monthly: period_from_record(record, "RecurringMonthly"),
        project_based: period_from_record(record, "ProjectBased"),
    }
}

impl Roster {
    /// Render all volunteers as CSV text with a header row.
    ///
    /// Availability flags render as `"x"`/empty; group ids render as
    /// comma-joined group names, dropping ids with no matching group.
    pub fn export_csv(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .store
            .volunteers()
            .iter()
            .map(|volunteer| {
                let mut row = vec![
                    volunteer.firstname.clone(),
                    volunteer.lastname.clone(),
                    volunteer.email.clone(),
                    volunteer.phone.clone(),
                    volunteer.street.clone(),
                    volunteer.postal_code.clone(),
                    volunteer.city.clone(),
                    volunteer.interests.clone(),
                ];
                push_period(&mut row, &volunteer.availability.one_time);
                push_period(&mut row, &volunteer.availability.recurring_weekly);
                push_period(&mut row, &volunteer.availability.recurring_monthly);
                push_period(&mut row, &volunteer.availability.project_based);
                row.push(self.group_name_list(&volunteer.groups).join(","));
                row.push(volunteer.notes.clone());
                row
            })
            .collect();

        csv::encode(&CSV_COLUMNS, &rows)
    }

    /// Reconcile an external CSV file into the roster.
    ///
    /// Rows are processed in file order and numbered from 2 (the header is
    /// row 1). Each row is validated independently; a failing row is skipped
    /// with one recorded error and never aborts the batch. Group-name tokens
    /// resolve through a running normalized-name map seeded from the existing
    /// groups, synthesizing new groups on first sight so repeated spellings
    /// reuse the same id. The running used-email set seeds from all existing
    /// volunteers and grows with every accepted row, so intra-file duplicates
    /// are rejected in first-seen order. Nothing is written to storage until
    /// the whole file has been scanned; the accumulated groups and volunteers
    /// then commit as two bulk replacements.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary, AppError> {
        let doc = csv::parse(text);

        let mut imported = 0usize;
        let mut skipped = 0usize;
        let mut errors: Vec<String> = Vec::new();

        let mut next_groups = self.store.groups().to_vec();
        let mut next_volunteers = self.store.volunteers().to_vec();

        let mut group_id_by_name: HashMap<String, String> = next_groups
            .iter()
            .map(|group| (normalize_group_name(&group.name), group.id.clone()))
            .collect();
        let mut used_emails: HashSet<String> = next_volunteers
            .iter()
            .map(|volunteer| normalize_email(&volunteer.email))
            .collect();

        for (index, record) in doc.records.iter().enumerate() {
            let row = index + 2;

            if record.field_count() > doc.headers.len() {
                skipped += 1;
                errors.push(format!("Row {}: invalid structure", row));
                continue;
            }

            let firstname = record.get("firstname").trim();
            let lastname = record.get("lastname").trim();
            let email = record.get("email").trim();

            if firstname.is_empty() || lastname.is_empty() || email.is_empty() {
                skipped += 1;
                errors.push(format!("Row {}: required fields missing", row));
                continue;
            }

            if !is_valid_email(email) {
                skipped += 1;
                errors.push(format!("Row {}: invalid email", row));
                continue;
            }

            let normalized_email = normalize_email(email);
            if used_emails.contains(&normalized_email) {
                skipped += 1;
                errors.push(format!("Row {}: duplicate email", row));
                continue;
            }

            let mut group_ids: Vec<String> = Vec::new();
            for token in record.get("groups").split(',') {
                let name = token.trim();
                if name.is_empty() {
                    continue;
                }

                let normalized = normalize_group_name(name);
                let group_id = match group_id_by_name.get(&normalized) {
                    Some(existing) => existing.clone(),
                    None => {
                        let group = Group {
                            id: new_entity_id("group"),
                            name: name.to_string(),
                        };
                        group_id_by_name.insert(normalized, group.id.clone());
                        let id = group.id.clone();
                        next_groups.push(group);
                        id
                    }
                };
                if !group_ids.contains(&group_id) {
                    group_ids.push(group_id);
                }
            }

            let volunteer = Volunteer {
                id: new_entity_id("volunteer"),
                firstname: firstname.to_string(),
                lastname: lastname.to_string(),
                email: email.to_string(),
                phone: record.get("phone").trim().to_string(),
                street: record.get("street").trim().to_string(),
                postal_code: record.get("postalCode").trim().to_string(),
                city: record.get("city").trim().to_string(),
                interests: record.get("interests").trim().to_string(),
                availability: availability_from_record(record),
                groups: group_ids,
                notes: record.get("notes").trim().to_string(),
            };

            // Final full-record gate; subsumes the checks above but protects
            // against the record schema drifting from the row checks.
            if validate_volunteer(&volunteer).is_err() {
                skipped += 1;
                errors.push(format!("Row {}: invalid record", row));
                continue;
            }

            next_volunteers.push(volunteer);
            used_emails.insert(normalized_email);
            imported += 1;
        }

        self.store.set_groups(next_groups)?;
        self.store.set_volunteers(next_volunteers)?;

        tracing::info!(
            "CSV import finished: {} imported, {} skipped",
            imported,
            skipped
        );

        Ok(ImportSummary {
            imported,
            skipped,
            errors,
        })
    }
}
