pub mod query_service;
pub mod user_service;

// Re-export commonly used functions
pub use query_service::query;
pub use user_service::{load_users, mock_users, validate_unique_ids};
