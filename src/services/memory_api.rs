//! In-Memory Backend
//!
//! An [`AdminApi`] kept in process memory. Used by the binary's walkthrough
//! and by tests, which can script failures and inspect issued requests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;

use super::api::AdminApi;
use crate::domain::account::Account;
use crate::domain::user::{User, UserPage};
use crate::error::{Error, Result};

/// A request as seen by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetAccount,
    UpdateAccount { login: String },
    ListUsers { page: u32, size: u32 },
    UpdateUser { login: String },
    DeleteUser { login: String },
}

#[derive(Debug, Default)]
struct MemoryState {
    account: Account,
    users: Vec<User>,
    next_id: u64,
    next_failure: Option<(u16, String)>,
    calls: Vec<ApiCall>,
}

/// In-memory administration backend
#[derive(Debug, Clone, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<MemoryState>>,
    latency: Option<Duration>,
}

impl MemoryApi {
    /// Create a backend for the given signed-in account
    pub fn new(account: Account) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                account,
                next_id: 1,
                ..Default::default()
            })),
            latency: None,
        }
    }

    /// Delay every response
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a user, assigning the next id
    pub fn insert_user(&self, mut user: User) -> User {
        let mut state = self.lock();
        user.id = state.next_id;
        state.next_id += 1;
        if user.created_date.is_none() {
            user.created_date = Some(Utc::now());
        }
        state.users.push(user.clone());
        user
    }

    /// Add `count` generated users (`user1`, `user2`, ...)
    pub fn seed_users(&self, count: usize) {
        for n in 1..=count {
            self.insert_user(User::new(0, format!("user{n}"), format!("user{n}@example.com")));
        }
    }

    /// Make the next call fail with `status` and a JSON error body
    pub fn fail_next(&self, status: u16, body: impl Into<String>) {
        self.lock().next_failure = Some((status, body.into()));
    }

    /// Every request received so far
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Pages requested through `list_users`, in order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                ApiCall::ListUsers { page, .. } => Some(*page),
                _ => None,
            })
            .collect()
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn account(&self) -> Account {
        self.lock().account.clone()
    }

    /// Record the call and consume a scripted failure, after the simulated
    /// network delay
    async fn begin(&self, call: ApiCall) -> Result<()> {
        match self.latency {
            Some(latency) => tokio::time::sleep(latency).await,
            None => tokio::task::yield_now().await,
        }
        let mut state = self.lock();
        tracing::trace!(?call, "MemoryApi request");
        state.calls.push(call);
        match state.next_failure.take() {
            Some((status, body)) => Err(Error::from_payload(status, &body)),
            None => Ok(()),
        }
    }
}

fn not_found(login: &str) -> Error {
    Error::Api {
        status: 404,
        description: Some(format!("User \"{login}\" not found")),
    }
}

impl AdminApi for MemoryApi {
    async fn get_account(&self) -> Result<Account> {
        self.begin(ApiCall::GetAccount).await?;
        Ok(self.lock().account.clone())
    }

    async fn update_account(&self, account: Account) -> Result<Account> {
        self.begin(ApiCall::UpdateAccount {
            login: account.login.clone(),
        })
        .await?;
        let mut state = self.lock();
        if account.login != state.account.login {
            return Err(Error::Api {
                status: 400,
                description: Some("Login cannot be changed".to_string()),
            });
        }
        state.account = account;
        Ok(state.account.clone())
    }

    async fn list_users(&self, page: u32, size: u32) -> Result<UserPage> {
        self.begin(ApiCall::ListUsers { page, size }).await?;
        let state = self.lock();
        let start = (page as usize).saturating_mul(size as usize);
        let users = state.users.iter().skip(start).take(size as usize).cloned().collect();
        Ok(UserPage {
            users,
            total_items: state.users.len() as u64,
        })
    }

    async fn update_user(&self, user: User) -> Result<User> {
        self.begin(ApiCall::UpdateUser {
            login: user.login.clone(),
        })
        .await?;
        let mut state = self.lock();
        let modified_by = state.account.login.clone();
        let existing = state
            .users
            .iter_mut()
            .find(|u| u.login == user.login)
            .ok_or_else(|| not_found(&user.login))?;
        *existing = User {
            id: existing.id,
            created_by: existing.created_by.clone(),
            created_date: existing.created_date,
            last_modified_by: modified_by,
            last_modified_date: Some(Utc::now()),
            ..user
        };
        Ok(existing.clone())
    }

    async fn delete_user(&self, login: &str) -> Result<()> {
        self.begin(ApiCall::DeleteUser {
            login: login.to_string(),
        })
        .await?;
        let mut state = self.lock();
        let before = state.users.len();
        state.users.retain(|u| u.login != login);
        if state.users.len() == before {
            return Err(not_found(login));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MemoryApi {
        let api = MemoryApi::new(Account::new("admin", "admin@localhost"));
        api.seed_users(45);
        api
    }

    #[tokio::test]
    async fn test_list_users_pages() {
        let api = api();
        let first = api.list_users(0, 20).await.expect("list");
        assert_eq!(first.users.len(), 20);
        assert_eq!(first.total_items, 45);
        assert_eq!(first.users[0].login, "user1");

        let last = api.list_users(2, 20).await.expect("list");
        assert_eq!(last.users.len(), 5);
        assert!(api.list_users(3, 20).await.expect("list").users.is_empty());
        assert_eq!(api.requested_pages(), [0, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_user_keeps_identity() {
        let api = api();
        let user = api.users()[0].clone();
        let updated = api.update_user(user.with_activated(false)).await.expect("update");
        assert_eq!(updated.id, user.id);
        assert!(!updated.activated);
        assert_eq!(updated.last_modified_by, "admin");
        assert!(updated.last_modified_date.is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_user_fails() {
        let api = api();
        api.delete_user("user3").await.expect("delete");
        assert_eq!(api.users().len(), 44);
        let error = api.delete_user("user3").await.expect_err("already deleted");
        assert!(matches!(error, Error::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_scripted_failure_applies_once() {
        let api = api();
        api.fail_next(500, r#"{"description":"Server exploded"}"#);
        let error = api.get_account().await.expect_err("scripted failure");
        assert_eq!(error.description(), Some("Server exploded"));
        assert!(api.get_account().await.is_ok());
        assert_eq!(api.calls(), [ApiCall::GetAccount, ApiCall::GetAccount]);
    }
}
