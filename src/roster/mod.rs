//! Roster service: all management operations over the persisted collections.
//!
//! Every mutation is a synchronous read-collection, compute-next-array,
//! write-collection pass through the [`BlobStore`], so operations never
//! interleave and the store is the only shared state. The service also owns
//! the transient UI-facing state: the search query and the selection set.

mod csv_io;
mod groups;
mod selection;
mod volunteers;

use crate::db::BlobStore;
use crate::models::{Group, Volunteer};

/// Volunteer roster backed by an explicit store instance.
#[derive(Debug)]
pub struct Roster {
    store: BlobStore,
    selected_ids: Vec<String>,
    search_query: String,
}

impl Roster {
    pub fn new(store: BlobStore) -> Self {
        Self {
            store,
            selected_ids: Vec::new(),
            search_query: String::new(),
        }
    }

    /// All volunteers, in collection order.
    pub fn volunteers(&self) -> &[Volunteer] {
        self.store.volunteers()
    }

    /// All groups, in collection order.
    pub fn groups(&self) -> &[Group] {
        self.store.groups()
    }

    /// Currently selected volunteer ids.
    pub fn selected_ids(&self) -> &[String] {
        &self.selected_ids
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}
