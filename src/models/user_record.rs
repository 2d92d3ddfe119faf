use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a user holds in the directory.
///
/// Parsing is exact: only `"Admin"` and `"User"` map to the named variants,
/// every other value (including `"admin"`) is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    /// Text stored in the seed file and shown in the UI.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Other(s) => s,
        }
    }

    /// Badge colour used by the users table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::Admin => "badge badge-green",
            _ => "badge badge-blue",
        }
    }

    /// Roles offered by the role filter select, in display order.
    pub fn known() -> &'static [Role] {
        static KNOWN: [Role; 2] = [Role::Admin, Role::User];
        &KNOWN
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "Admin" => Role::Admin,
            "User" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Admin" => Role::Admin,
            "User" => Role::User,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the user directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserRecord {
    pub fn new(id: u64, name: &str, email: &str, role: Role) -> Self {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    /// True if any attribute, as lower-cased text, contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.id.to_string().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.as_str().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_sensitive() {
        assert_eq!(Role::from("Admin"), Role::Admin);
        assert_eq!(Role::from("User"), Role::User);
        assert_eq!(Role::from("admin"), Role::Other("admin".into()));
    }

    #[test]
    fn role_serializes_as_plain_text() {
        let rec = UserRecord::new(7, "Ann", "ann@example.com", Role::Other("Auditor".into()));
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"name":"Ann","email":"ann@example.com","role":"Auditor"}"#
        );
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn search_covers_every_attribute() {
        let rec = UserRecord::new(42, "John Doe", "john@example.com", Role::Admin);
        assert!(rec.matches_search(""));
        assert!(rec.matches_search("42"));
        assert!(rec.matches_search("doe"));
        assert!(rec.matches_search("example.com"));
        assert!(rec.matches_search("adm"));
        assert!(!rec.matches_search("jane"));
    }

    #[test]
    fn admin_badge_differs_from_other_roles() {
        assert_ne!(Role::Admin.badge_class(), Role::User.badge_class());
        assert_eq!(Role::User.badge_class(), Role::Other("Guest".into()).badge_class());
    }
}
