use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::models::{Role, UserRecord};

/// Built-in record set used when no seed file is configured.
pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "John Doe", "john@example.com", Role::Admin),
        UserRecord::new(2, "Jane Smith", "jane@example.com", Role::User),
        UserRecord::new(3, "Alice Johnson", "alice@example.com", Role::User),
        UserRecord::new(4, "Bob Williams", "bob@example.com", Role::Admin),
        UserRecord::new(5, "Carol Brown", "carol@example.com", Role::User),
    ]
}

/// Load the record set from a JSON array at `path`, or the mock users when `path` is `None`.
pub fn load_users(path: Option<&Path>) -> Result<Vec<UserRecord>, AppError> {
    let users = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let users: Vec<UserRecord> = serde_json::from_str(&text)?;
            tracing::info!(path = %path.display(), count = users.len(), "Loaded users from seed file");
            users
        }
        None => {
            let users = mock_users();
            tracing::debug!(count = users.len(), "Using built-in mock users");
            users
        }
    };
    validate_unique_ids(&users)?;
    Ok(users)
}

/// Every id must appear once.
pub fn validate_unique_ids(users: &[UserRecord]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id) {
            return Err(AppError::DuplicateId(user.id));
        }
    }
    Ok(())
}
