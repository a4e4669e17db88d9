//! User - Managed User Records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authority granted to administrators
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Authority granted to every user
pub const ROLE_USER: &str = "ROLE_USER";

/// A user as listed and edited by the administration screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub lang_key: String,
    #[serde(default)]
    pub authorities: Vec<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_by: String,
    #[serde(default)]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl User {
    /// Create an activated user with the `ROLE_USER` authority
    pub fn new(id: u64, login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            first_name: None,
            last_name: None,
            email: email.into(),
            activated: true,
            lang_key: "en".to_string(),
            authorities: vec![ROLE_USER.to_string()],
            created_by: "system".to_string(),
            created_date: None,
            last_modified_by: "system".to_string(),
            last_modified_date: None,
        }
    }

    /// Copy of this user with a different activation flag
    pub fn with_activated(&self, activated: bool) -> Self {
        Self {
            activated,
            ..self.clone()
        }
    }
}

/// One page of users plus the total count reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_camel_case() {
        let json = r#"{
            "id": 3,
            "login": "jdoe",
            "email": "jdoe@example.com",
            "activated": false,
            "authorities": ["ROLE_USER"],
            "createdBy": "admin",
            "createdDate": "2024-03-01T10:00:00Z",
            "lastModifiedBy": "admin"
        }"#;
        let user: User = serde_json::from_str(json).expect("valid user json");
        assert_eq!(user.login, "jdoe");
        assert!(!user.activated);
        assert_eq!(user.created_by, "admin");
        assert!(user.created_date.is_some());
        assert!(user.last_modified_date.is_none());
    }

    #[test]
    fn test_with_activated_keeps_other_fields() {
        let user = User::new(1, "jdoe", "jdoe@example.com");
        let updated = user.with_activated(false);
        assert!(!updated.activated);
        assert_eq!(updated.login, user.login);
        assert_eq!(updated.authorities, user.authorities);
    }
}
