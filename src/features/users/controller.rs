//! Users Controller
//!
//! Loads the current page of users, corrects empty pages, and runs the
//! activate, deactivate and delete mutations posted by row menus.

use std::sync::Arc;

use crossbeam_channel::Receiver;

use super::actions::{CommandQueue, UserActions, UserCommand};
use crate::app::entities::AppEntities;
use crate::components::composite::pagination::{Pagination, PaginationState};
use crate::domain::user::User;
use crate::error::{Error, Result};
use crate::i18n::{t, t_args};
use crate::services::{AdminApi, LoadingFlag, MountToken, Mutation, QueryKey, QueryKind};
use crate::state::list_state::ListResult;
use crate::state::toast_state::ToastKind;

/// Toast texts of one mutation, as translation keys
struct Feedback {
    success_title: &'static str,
    success_desc: &'static str,
    failure_title: &'static str,
    failure_desc: &'static str,
}

const ACTIVATE: Feedback = Feedback {
    success_title: "toast-activated-title",
    success_desc: "toast-activated-desc",
    failure_title: "toast-activation-failed-title",
    failure_desc: "toast-activation-failed-desc",
};

const DEACTIVATE: Feedback = Feedback {
    success_title: "toast-deactivated-title",
    success_desc: "toast-deactivated-desc",
    failure_title: "toast-deactivation-failed-title",
    failure_desc: "toast-deactivation-failed-desc",
};

const DELETE: Feedback = Feedback {
    success_title: "toast-deleted-title",
    success_desc: "toast-deleted-desc",
    failure_title: "toast-deletion-failed-title",
    failure_desc: "toast-deletion-failed-desc",
};

/// Users screen controller
pub struct UsersController<A> {
    api: Arc<A>,
    entities: AppEntities,
    pagination: PaginationState,
    update: Mutation,
    delete: Mutation,
    mount: MountToken,
    commands: CommandQueue,
    commands_rx: Receiver<UserCommand>,
    list: ListResult<User>,
}

impl<A: AdminApi> UsersController<A> {
    /// Create a new controller
    pub fn new(api: Arc<A>, entities: AppEntities) -> Self {
        let (commands, commands_rx) = CommandQueue::new();
        let pagination = PaginationState::new(entities.location.clone());
        Self {
            api,
            entities,
            pagination,
            update: Mutation::new("update_user"),
            delete: Mutation::new("delete_user"),
            mount: MountToken::mounted(),
            commands,
            commands_rx,
            list: ListResult::default(),
        }
    }

    pub fn entities(&self) -> &AppEntities {
        &self.entities
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn page_size(&self) -> u32 {
        self.entities.config.page_size
    }

    /// Users of the loaded page
    pub fn list(&self) -> &ListResult<User> {
        &self.list
    }

    /// Footer pagination for the loaded page
    pub fn footer(&self) -> Pagination {
        Pagination::new(self.page(), self.page_size(), self.list.total_items)
            .loading(self.list.is_loading_page)
    }

    pub fn update_flag(&self) -> LoadingFlag {
        self.update.loading_flag()
    }

    pub fn delete_flag(&self) -> LoadingFlag {
        self.delete.loading_flag()
    }

    /// Menu for one user's row
    pub fn actions_for(&self, user: &User) -> UserActions {
        UserActions::new(
            user,
            &self.entities.config.account_login,
            self.entities.locale(),
            self.commands.clone(),
            self.update_flag(),
            self.delete_flag(),
        )
    }

    /// Load the current page. An empty page other than the first steps back
    /// and loads again.
    pub async fn load(&mut self) -> Result<()> {
        let size = self.page_size();
        self.list.set_loading(true);

        let result = loop {
            let page = self.pagination.page();
            let index = page - 1;
            let api = Arc::clone(&self.api);
            let fetched = self
                .entities
                .cache
                .fetch(QueryKey::Users { page: index, size }, move || async move {
                    api.list_users(index, size).await
                })
                .await;

            match fetched {
                Ok(data) if data.users.is_empty() && page > 1 => {
                    tracing::debug!(page, "Empty page, stepping back");
                    self.pagination.set_page(page - 1);
                }
                other => break other,
            }
        };

        let data = self.mount.guard(result)?;
        self.list.set_loading(false);
        let data = data?;
        self.list = ListResult::new(data.users.clone(), data.total_items);
        tracing::info!(
            page = self.pagination.page(),
            users = self.list.len(),
            total = self.list.total_items,
            "Users loaded"
        );
        Ok(())
    }

    /// Navigate to a page and load it
    pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
        self.pagination.set_page(page);
        self.load().await
    }

    /// Activate a user. Returns whether the mutation succeeded.
    pub async fn activate(&self, user: &User) -> bool {
        let result = self.update.mutate(self.api.update_user(user.with_activated(true))).await;
        self.report(result, &user.login, &ACTIVATE)
    }

    /// Deactivate a user. Returns whether the mutation succeeded.
    pub async fn deactivate(&self, user: &User) -> bool {
        let result = self.update.mutate(self.api.update_user(user.with_activated(false))).await;
        self.report(result, &user.login, &DEACTIVATE)
    }

    /// Delete a user. Returns whether the mutation succeeded.
    pub async fn delete(&self, user: &User) -> bool {
        let result = self.delete.mutate(self.api.delete_user(&user.login)).await;
        self.report(result, &user.login, &DELETE)
    }

    /// Turn a mutation result into a toast, invalidating users on success
    fn report<T>(&self, result: Result<T>, login: &str, feedback: &Feedback) -> bool {
        let locale = self.entities.locale();
        match result {
            Ok(_) => {
                tracing::info!(login, "User mutation succeeded");
                self.entities.notify(
                    ToastKind::Success,
                    t(locale, feedback.success_title),
                    Some(t_args(locale, feedback.success_desc, &[("login", login)])),
                );
                self.entities.cache.invalidate(QueryKind::Users);
                true
            }
            Err(Error::MutationInFlight { name }) => {
                tracing::debug!(login, mutation = %name, "Mutation already in flight");
                false
            }
            Err(e) => {
                tracing::warn!(login, error = %e, "User mutation failed");
                self.entities.notify(
                    ToastKind::Error,
                    t(locale, feedback.failure_title),
                    Some(t_args(locale, feedback.failure_desc, &[("login", login)])),
                );
                false
            }
        }
    }

    async fn run(&self, command: UserCommand) -> bool {
        tracing::debug!(?command, "Running user command");
        match command {
            UserCommand::Activate(user) => self.activate(&user).await,
            UserCommand::Deactivate(user) => self.deactivate(&user).await,
            UserCommand::Delete(user) => self.delete(&user).await,
        }
    }

    /// Run every command posted by row menus, then reload if anything changed.
    /// Returns how many commands ran.
    pub async fn process_commands(&mut self) -> Result<usize> {
        let mut processed = 0;
        let mut changed = false;
        while let Ok(command) = self.commands_rx.try_recv() {
            changed |= self.run(command).await;
            self.commands.settle();
            processed += 1;
        }
        if changed {
            self.load().await?;
        }
        Ok(processed)
    }

    /// Leave the screen; results settling later are dropped
    pub fn unmount(&self) {
        self.mount.unmount();
    }
}
