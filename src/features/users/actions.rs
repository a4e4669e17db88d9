//! User Row Actions
//!
//! The per-row actions menu of the users screen. Selecting an action posts a
//! [`UserCommand`] that the controller runs asynchronously.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::app::navigation::Route;
use crate::components::composite::menu_action::{
    MenuAction, MenuActionDescriptor, MenuItem, use_menu_action,
};
use crate::domain::user::User;
use crate::i18n::{Locale, t};
use crate::services::LoadingFlag;

/// Key of the confirmable delete action
pub const DELETE_ACTION: &str = "delete";

/// Work requested from a row menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Activate(User),
    Deactivate(User),
    Delete(User),
}

/// Channel from row menus to the users controller.
///
/// A posted command counts as in flight until the controller settles it, so
/// menus sharing the queue stay closed in the meantime.
#[derive(Debug, Clone)]
pub struct CommandQueue {
    tx: Sender<UserCommand>,
    pending: LoadingFlag,
}

impl CommandQueue {
    pub fn new() -> (Self, Receiver<UserCommand>) {
        let (tx, rx) = unbounded();
        let queue = Self {
            tx,
            pending: LoadingFlag::new(),
        };
        (queue, rx)
    }

    /// Flag set while a posted command is waiting or running
    pub fn pending_flag(&self) -> LoadingFlag {
        self.pending.clone()
    }

    /// Post a command; refused while a previous one has not settled
    pub fn post(&self, command: UserCommand) -> bool {
        if !self.pending.try_start() {
            tracing::debug!(?command, "Command already pending, dropping");
            return false;
        }
        if self.tx.send(command).is_err() {
            tracing::warn!("Users screen is gone, dropping command");
            self.pending.finish();
            return false;
        }
        true
    }

    /// Mark posted commands as settled
    pub(crate) fn settle(&self) {
        self.pending.finish();
    }
}

/// Actions menu for one user
#[derive(Debug)]
pub struct UserActions {
    user: User,
    items: Vec<MenuItem>,
    menu: MenuAction,
    commands: CommandQueue,
}

impl UserActions {
    pub fn new(
        user: &User,
        account_login: &str,
        locale: Locale,
        commands: CommandQueue,
        update: LoadingFlag,
        delete: LoadingFlag,
    ) -> Self {
        let deletable = user.login != account_login;

        let mut items = vec![
            MenuItem::Link {
                label: t(locale, "menu-edit").into_owned(),
                href: Route::UserEdit {
                    login: user.login.clone(),
                }
                .path(),
            },
            MenuItem::Action {
                id: status_action_id(user).to_string(),
                label: t(
                    locale,
                    if user.activated { "menu-deactivate" } else { "menu-activate" },
                )
                .into_owned(),
            },
        ];

        let mut descriptors = Vec::new();
        if deletable {
            items.push(MenuItem::Divider);
            items.push(MenuItem::Confirmable {
                key: DELETE_ACTION.to_string(),
                label: t(locale, "menu-delete").into_owned(),
                confirmation_text: t(locale, "menu-are-you-sure").into_owned(),
                confirm_label: t(locale, "menu-confirm").into_owned(),
                cancel_label: t(locale, "menu-cancel").into_owned(),
            });
            let queue = commands.clone();
            let target = user.clone();
            descriptors.push(
                MenuActionDescriptor::new(DELETE_ACTION, move || {
                    queue.post(UserCommand::Delete(target.clone()));
                })
                .loading(delete),
            );
        }

        let mut menu = use_menu_action(descriptors);
        menu.track_loading(update);
        menu.track_loading(commands.pending_flag());

        Self {
            user: user.clone(),
            items,
            menu,
            commands,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn menu(&self) -> &MenuAction {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuAction {
        &mut self.menu
    }

    /// Whether the delete entry is offered
    pub fn is_deletable(&self) -> bool {
        self.menu.descriptor(DELETE_ACTION).is_some()
    }

    /// Select "Edit": closes the menu and returns the edit address
    pub fn select_edit(&mut self) -> Option<String> {
        let href = Route::UserEdit {
            login: self.user.login.clone(),
        }
        .path();
        let mut target = None;
        self.menu.select_item(|| target = Some(href));
        target
    }

    /// Select "Activate" or "Deactivate", whichever the user needs
    pub fn select_status_toggle(&mut self) {
        let command = if self.user.activated {
            UserCommand::Deactivate(self.user.clone())
        } else {
            UserCommand::Activate(self.user.clone())
        };
        let commands = &self.commands;
        self.menu.select_item(|| {
            commands.post(command);
        });
    }

    /// Select "Delete": shows the confirm prompt
    pub fn request_delete(&mut self) {
        self.menu.request_confirm(DELETE_ACTION);
    }

    /// Confirm button of the delete prompt
    pub fn confirm_delete(&mut self) {
        self.menu.call_back_confirm_button(DELETE_ACTION);
    }
}

fn status_action_id(user: &User) -> &'static str {
    if user.activated { "deactivate" } else { "activate" }
}
