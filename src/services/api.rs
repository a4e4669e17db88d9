//! Remote API
//!
//! The operations the screens need from the administration backend. Screens
//! are generic over [`AdminApi`]; [`super::MemoryApi`] implements it
//! in-process.

use std::future::Future;

use serde::Deserialize;

use crate::domain::account::Account;
use crate::domain::user::{User, UserPage};
use crate::error::{Error, Result};

/// Administration backend
pub trait AdminApi: Send + Sync {
    /// The signed-in account
    fn get_account(&self) -> impl Future<Output = Result<Account>> + Send;

    /// Replace the signed-in account's editable fields
    fn update_account(&self, account: Account) -> impl Future<Output = Result<Account>> + Send;

    /// One page of users; `page` is 0-based
    fn list_users(&self, page: u32, size: u32) -> impl Future<Output = Result<UserPage>> + Send;

    /// Replace a user, matched by login
    fn update_user(&self, user: User) -> impl Future<Output = Result<User>> + Send;

    /// Delete a user by login
    fn delete_user(&self, login: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Error body returned by the backend
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Error {
    /// Build an API error from a response status and body.
    ///
    /// Bodies that are not a JSON error payload still produce an error, just
    /// without a description.
    pub fn from_payload(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<ErrorPayload>(body).unwrap_or_else(|e| {
            tracing::debug!(status, error = %e, "Unparseable error payload");
            ErrorPayload::default()
        });
        Error::Api {
            status,
            description: payload.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_extracted_from_payload() {
        let error = Error::from_payload(400, r#"{"title":"Bad Request","description":"Email already used"}"#);
        assert_eq!(error.description(), Some("Email already used"));
        assert!(matches!(error, Error::Api { status: 400, .. }));
    }

    #[test]
    fn test_payload_without_description() {
        let error = Error::from_payload(500, "<html>oops</html>");
        assert_eq!(error.description(), None);
        assert_eq!(Error::from_payload(500, "{}").description(), None);
    }
}
