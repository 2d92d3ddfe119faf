/// Error types for loading records, parsing caller input and rendering output
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The seed file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of user records
    #[error("Invalid user records: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records in the set share an id
    #[error("Duplicate user id: {0}")]
    DuplicateId(u64),

    #[error("Unknown sort column: {0} (expected name, email or role)")]
    InvalidSortColumn(String),

    #[error("Unknown sort direction: {0} (expected asc or desc)")]
    InvalidSortDirection(String),

    /// Askama failed to render a page
    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),
}
