//! Error types for the name catalog.
//!
//! One taxonomy for the whole crate, using thiserror. Validation and
//! duplicate errors are recovered at the API boundary into user-visible
//! messages; storage errors on reads degrade to empty results rather than
//! crashing the request.

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("A name matching '{name}' is already registered")]
    Duplicate { name: String },

    #[error("No record with id {id}")]
    NotFound { id: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
