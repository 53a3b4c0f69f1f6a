//! Selection-set operations over volunteer ids.

use std::collections::HashSet;

use super::Roster;
use crate::validation::normalize_email;

impl Roster {
    /// Flip membership of a volunteer id in the selection set.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.selected_ids.iter().any(|selected| selected == id) {
            self.selected_ids.retain(|selected| selected != id);
        } else {
            self.selected_ids.push(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    /// Replace the selection with exactly the ids currently matching the
    /// search query.
    pub fn select_all_filtered(&mut self) {
        self.selected_ids = self
            .filtered_volunteers()
            .iter()
            .map(|volunteer| volunteer.id.clone())
            .collect();
    }

    /// Replace the selection with the ids of volunteers belonging to at
    /// least one of the given groups.
    pub fn select_by_groups(&mut self, group_ids: &[String]) {
        let wanted: HashSet<&String> = group_ids.iter().collect();
        self.selected_ids = self
            .store
            .volunteers()
            .iter()
            .filter(|volunteer| volunteer.groups.iter().any(|group| wanted.contains(group)))
            .map(|volunteer| volunteer.id.clone())
            .collect();
    }

    /// Distinct, non-empty emails of the selected volunteers joined by
    /// `", "`, in collection order. Duplicates compare by normalized form;
    /// the first-seen original casing wins.
    pub fn selected_emails_joined(&self) -> String {
        let selected: HashSet<&String> = self.selected_ids.iter().collect();
        let mut seen = HashSet::new();
        let mut emails = Vec::new();

        for volunteer in self.store.volunteers() {
            if !selected.contains(&volunteer.id) {
                continue;
            }
            let email = volunteer.email.trim();
            if email.is_empty() {
                continue;
            }
            let normalized = normalize_email(email);
            if seen.insert(normalized) {
                emails.push(email.to_string());
            }
        }

        emails.join(", ")
    }
}
