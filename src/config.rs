use std::env;
use std::path::{Path, PathBuf};

use crate::utils::parse_flag;

// Default configuration constants
pub const DEFAULT_APP_NAME: &str = "Jupiter";
pub const DEFAULT_CURRENT_USER: &str = "John Doe";
pub const DEFAULT_CURRENT_EMAIL: &str = "john@example.com";
pub const DEFAULT_DARK_MODE: bool = false;
pub const DEFAULT_WORKSPACES: &[&str] = &["Workspace 1", "Workspace 2", "Workspace 3"];

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Seed file with the record set. `None` means the built-in mock users.
pub fn get_users_file() -> Option<PathBuf> {
    let raw = env::var("JUPITER_USERS_FILE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

pub fn get_app_name() -> String {
    sanitize_app_name(&env::var("JUPITER_APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()))
}

pub fn get_current_user() -> String {
    let raw = env::var("JUPITER_CURRENT_USER").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENT_USER.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn get_current_email() -> String {
    let raw = env::var("JUPITER_CURRENT_EMAIL").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENT_EMAIL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Stand-in for the browser's `prefers-color-scheme: dark` query.
pub fn get_dark_mode() -> bool {
    let raw = env::var("JUPITER_DARK_MODE").ok();
    parse_flag(raw.as_ref(), DEFAULT_DARK_MODE)
}

pub fn sanitize_app_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_APP_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Snapshot of the environment-driven settings used by every command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub users_file: Option<PathBuf>,
    pub app_name: String,
    pub current_user: String,
    pub current_email: String,
    pub dark_mode: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            users_file: get_users_file(),
            app_name: get_app_name(),
            current_user: get_current_user(),
            current_email: get_current_email(),
            dark_mode: get_dark_mode(),
        }
    }
}
