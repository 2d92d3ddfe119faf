// URL handling utilities
pub mod query_string;

// Parsing utilities
pub mod parse_flag;

// Re-export all utilities for convenient access
pub use query_string::{build_query_string, parse_query_string};
pub use parse_flag::parse_flag;
