//! Persistent storage for the roster blob.

mod store;

pub use store::BlobStore;
