//! Name catalog: a small registry of name records with search-popularity
//! tracking.
//!
//! The crate is organized around a storage port (`store::NameStore`) with
//! Postgres and SQLite adapters, a search workflow that bumps popularity
//! counters as a side effect of searching, and a thin axum API layer.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod stats;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use models::{NameRecord, NewName, OriginCount, RecordPage};
pub use search::{SearchOutcome, SearchWorkflow};
