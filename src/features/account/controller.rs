//! Profile Controller
//!
//! Loads the signed-in account into the profile form and submits changes.

use std::sync::Arc;

use super::page::{ProfilePage, account_values, apply_values, profile_form};
use crate::app::entities::AppEntities;
use crate::domain::account::Account;
use crate::error::{Error, Result};
use crate::form::{FieldError, Form};
use crate::i18n::t;
use crate::services::{AdminApi, MountToken, Mutation, QueryKey, QueryKind};
use crate::state::toast_state::ToastKind;

/// Result of pressing "Save"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(Vec<FieldError>),
    /// The account was updated
    Updated,
    /// The backend refused the update
    Failed,
    /// A previous update is still in flight
    Rejected,
}

/// Profile screen controller
pub struct ProfileController<A> {
    api: Arc<A>,
    entities: AppEntities,
    update: Mutation,
    mount: MountToken,
    account: Option<Arc<Account>>,
    form: Form,
}

impl<A: AdminApi> ProfileController<A> {
    pub fn new(api: Arc<A>, entities: AppEntities) -> Self {
        let form = profile_form(entities.locale());
        Self {
            api,
            entities,
            update: Mutation::new("update_account"),
            mount: MountToken::mounted(),
            account: None,
            form,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_deref()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn is_saving(&self) -> bool {
        self.update.is_loading()
    }

    /// Fetch the account and seed the form with it
    pub async fn load(&mut self) -> Result<()> {
        let api = Arc::clone(&self.api);
        let account = self
            .entities
            .cache
            .fetch(QueryKey::Account, move || async move { api.get_account().await })
            .await;
        let account = self.mount.guard(account)??;

        self.form = profile_form(self.entities.locale()).with_initial_values(account_values(&account));
        tracing::info!(login = %account.login, "Profile loaded");
        self.account = Some(account);
        Ok(())
    }

    /// Validate and send the form
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let Some(account) = self.account.clone() else {
            return Err(Error::Invalid {
                message: "Profile submitted before the account was loaded".to_string(),
            });
        };
        let values = match self.form.submit() {
            Ok(values) => values,
            Err(errors) => return Ok(SubmitOutcome::Invalid(errors)),
        };

        let result = self
            .update
            .mutate(self.api.update_account(apply_values(&account, &values)))
            .await;

        let locale = self.entities.locale();
        let outcome = match result {
            Ok(updated) => {
                tracing::info!(login = %updated.login, "Profile updated");
                self.entities
                    .notify(ToastKind::Success, t(locale, "toast-update-success"), None);
                self.entities.cache.invalidate(QueryKind::Account);
                if self.mount.is_mounted() {
                    self.account = Some(Arc::new(updated));
                }
                SubmitOutcome::Updated
            }
            Err(Error::MutationInFlight { .. }) => SubmitOutcome::Rejected,
            Err(e) => {
                tracing::warn!(error = %e, "Profile update failed");
                self.entities.notify(
                    ToastKind::Error,
                    t(locale, "toast-update-failed"),
                    e.description().map(str::to_string),
                );
                SubmitOutcome::Failed
            }
        };
        Ok(outcome)
    }

    /// View model of the screen, once the account is loaded
    pub fn page(&self) -> Option<ProfilePage> {
        let account = self.account()?;
        Some(ProfilePage::build(
            account,
            &self.form,
            self.is_saving(),
            self.entities.locale(),
        ))
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }
}
