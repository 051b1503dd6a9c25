use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "user", alias = "ordinary", alias = "cliente")]
    Ordinary,
    #[serde(rename = "admin")]
    Admin,
}

/// Signed-in user as persisted in the session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(alias = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(default, alias = "rol")]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// A session record is only usable when id, email and name are all present.
    pub fn is_complete(&self) -> bool {
        !self.id.as_str().trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.name.trim().is_empty()
    }

    pub fn first_name(&self) -> &str {
        first_name(&self.name)
    }
}

/// First whitespace-separated token of a full name, "User" when blank.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("User")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_field_names() {
        let json = r#"{"id": 7, "nombre": "Ana María López", "email": "ana@example.com", "role": "admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id.as_str(), "7");
        assert_eq!(user.first_name(), "Ana");
        assert!(user.is_admin());
    }

    #[test]
    fn test_role_defaults_to_ordinary() {
        let json = r#"{"id": "u1", "name": "Bo", "email": "bo@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Ordinary);
    }

    #[test]
    fn test_first_name_fallback() {
        assert_eq!(first_name("   "), "User");
        assert_eq!(first_name("  Carla   Ruiz "), "Carla");
    }

    #[test]
    fn test_blank_email_is_incomplete() {
        let user = User {
            id: UserId::new("u1"),
            name: "Bo".to_string(),
            email: " ".to_string(),
            role: Role::Ordinary,
        };
        assert!(!user.is_complete());
    }
}
