//! Account - The Signed-in Account

use serde::{Deserialize, Serialize};

/// Account of the signed-in user, as edited by the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub lang_key: String,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub authorities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Account {
    /// Create an activated account with the given login and email
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            email: email.into(),
            lang_key: "en".to_string(),
            activated: true,
            ..Default::default()
        }
    }

    /// Whether the account holds the given authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
