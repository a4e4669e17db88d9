//! MenuAction Component
//!
//! An actions dropdown whose destructive items ask for confirmation before
//! running. States: `Closed`, `Open` and `ConfirmPending(key)`.
//!
//! ```text
//! Closed ──toggle──▶ Open ──toggle / dismiss──▶ Closed
//!                     │  ▲
//!      confirmable    │  │ cancel
//!                     ▼  │
//!              ConfirmPending(key) ──confirm──▶ Closed (action invoked)
//! ```

use hashlink::LinkedHashMap;

use crate::components::primitives::disclosure::Disclosure;
use crate::services::mutation::LoadingFlag;

/// One confirmable action registered with a menu
pub struct MenuActionDescriptor {
    pub key: String,
    /// Open while the confirm prompt for this action is shown
    pub disclosure: Disclosure,
    action: Box<dyn FnMut() + Send>,
    loading: Option<LoadingFlag>,
}

impl MenuActionDescriptor {
    pub fn new(key: impl Into<String>, action: impl FnMut() + Send + 'static) -> Self {
        Self {
            key: key.into(),
            disclosure: Disclosure::default(),
            action: Box::new(action),
            loading: None,
        }
    }

    /// Attach the loading flag of the mutation this action triggers
    pub fn loading(mut self, flag: LoadingFlag) -> Self {
        self.loading = Some(flag);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading.as_ref().is_some_and(LoadingFlag::is_loading)
    }
}

impl std::fmt::Debug for MenuActionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuActionDescriptor")
            .field("key", &self.key)
            .field("disclosure", &self.disclosure)
            .field("is_loading", &self.is_loading())
            .finish()
    }
}

/// State of an action menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    ConfirmPending(String),
}

/// An item of an action menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Navigates somewhere
    Link { label: String, href: String },
    /// Runs immediately when selected
    Action { id: String, label: String },
    /// Asks for confirmation first
    Confirmable {
        key: String,
        label: String,
        confirmation_text: String,
        confirm_label: String,
        cancel_label: String,
    },
    Divider,
}

/// What an item shows given the current menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemView<'a> {
    Item(&'a MenuItem),
    ConfirmPrompt {
        key: &'a str,
        confirmation_text: &'a str,
        confirm_label: &'a str,
        cancel_label: &'a str,
    },
}

/// Action menu state machine over a set of confirmable descriptors
#[derive(Debug, Default)]
pub struct MenuAction {
    state: MenuState,
    descriptors: LinkedHashMap<String, MenuActionDescriptor>,
    tracked: Vec<LoadingFlag>,
}

/// Build a menu over `descriptors`, keyed by their `key`
pub fn use_menu_action(descriptors: impl IntoIterator<Item = MenuActionDescriptor>) -> MenuAction {
    MenuAction::new(descriptors)
}

impl MenuAction {
    pub fn new(descriptors: impl IntoIterator<Item = MenuActionDescriptor>) -> Self {
        Self {
            state: MenuState::Closed,
            descriptors: descriptors
                .into_iter()
                .map(|descriptor| (descriptor.key.clone(), descriptor))
                .collect(),
            tracked: Vec::new(),
        }
    }

    /// Also count a loading flag not tied to a descriptor (e.g. plain items)
    pub fn track_loading(&mut self, flag: LoadingFlag) {
        self.tracked.push(flag);
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open_menu(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Any registered or tracked action still in flight
    pub fn is_actions_loading(&self) -> bool {
        self.descriptors.values().any(MenuActionDescriptor::is_loading)
            || self.tracked.iter().any(LoadingFlag::is_loading)
    }

    pub fn descriptor(&self, key: &str) -> Option<&MenuActionDescriptor> {
        self.descriptors.get(key)
    }

    fn transition(&mut self, next: MenuState) {
        tracing::debug!(from = ?self.state, to = ?next, "Menu transition");
        for descriptor in self.descriptors.values_mut() {
            match &next {
                MenuState::ConfirmPending(key) if *key == descriptor.key => descriptor.disclosure.on_open(),
                _ => descriptor.disclosure.on_close(),
            }
        }
        self.state = next;
    }

    /// Trigger pressed. Opening is refused while actions are loading.
    pub fn on_toggle_menu(&mut self) {
        if self.is_open_menu() {
            self.transition(MenuState::Closed);
        } else if self.is_actions_loading() {
            tracing::debug!("Menu trigger disabled while actions are loading");
        } else {
            self.transition(MenuState::Open);
        }
    }

    /// Outside click or escape
    pub fn on_close_menu(&mut self) {
        if self.is_open_menu() {
            self.transition(MenuState::Closed);
        }
    }

    /// Select a plain item: run its handler and close
    pub fn select_item(&mut self, handler: impl FnOnce()) {
        if !self.is_open_menu() {
            tracing::debug!("Ignoring item selection on closed menu");
            return;
        }
        self.transition(MenuState::Closed);
        handler();
    }

    /// Select a confirmable item: show its confirm prompt
    pub fn request_confirm(&mut self, key: &str) {
        if !self.descriptors.contains_key(key) {
            tracing::debug!(key, "Confirm requested for unregistered menu action");
            return;
        }
        if self.state != MenuState::Open {
            tracing::debug!(key, state = ?self.state, "Confirm requested outside open menu");
            return;
        }
        self.transition(MenuState::ConfirmPending(key.to_string()));
    }

    /// Cancel the confirm prompt; the menu stays open
    pub fn on_cancel_confirm(&mut self) {
        if matches!(self.state, MenuState::ConfirmPending(_)) {
            self.transition(MenuState::Open);
        }
    }

    /// Confirm button of the prompt for `key`.
    ///
    /// Runs the action once and closes the menu when `key` is the pending
    /// action. Unregistered keys and non-pending keys are no-ops.
    pub fn call_back_confirm_button(&mut self, key: &str) {
        if !self.descriptors.contains_key(key) {
            tracing::debug!(key, "Confirm pressed for unregistered menu action");
            return;
        }
        if !matches!(&self.state, MenuState::ConfirmPending(pending) if pending == key) {
            tracing::debug!(key, state = ?self.state, "Confirm pressed without pending prompt");
            return;
        }
        self.transition(MenuState::Closed);
        if let Some(descriptor) = self.descriptors.get_mut(key) {
            (descriptor.action)();
        }
    }

    /// How `item` renders in the current state
    pub fn item_view<'a>(&'a self, item: &'a MenuItem) -> MenuItemView<'a> {
        match (item, &self.state) {
            (
                MenuItem::Confirmable {
                    key,
                    confirmation_text,
                    confirm_label,
                    cancel_label,
                    ..
                },
                MenuState::ConfirmPending(pending),
            ) if key == pending => MenuItemView::ConfirmPrompt {
                key,
                confirmation_text,
                confirm_label,
                cancel_label,
            },
            _ => MenuItemView::Item(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::mutation::Mutation;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_menu() -> (MenuAction, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let menu = use_menu_action([MenuActionDescriptor::new("delete", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })]);
        (menu, calls)
    }

    #[test]
    fn test_toggle_and_dismiss() {
        let (mut menu, _) = counting_menu();
        assert_eq!(menu.state(), &MenuState::Closed);
        menu.on_toggle_menu();
        assert!(menu.is_open_menu());
        menu.on_toggle_menu();
        assert_eq!(menu.state(), &MenuState::Closed);
        menu.on_toggle_menu();
        menu.on_close_menu();
        assert_eq!(menu.state(), &MenuState::Closed);
    }

    #[test]
    fn test_confirm_runs_action_once_and_closes() {
        let (mut menu, calls) = counting_menu();
        menu.on_toggle_menu();
        menu.request_confirm("delete");
        assert_eq!(menu.state(), &MenuState::ConfirmPending("delete".to_string()));
        assert!(menu.is_open_menu());
        assert!(menu.descriptor("delete").expect("registered").disclosure.is_open());

        menu.call_back_confirm_button("delete");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(menu.state(), &MenuState::Closed);
        assert!(!menu.descriptor("delete").expect("registered").disclosure.is_open());

        // a second press after closing does nothing
        menu.call_back_confirm_button("delete");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregistered_key_is_noop() {
        let (mut menu, calls) = counting_menu();
        menu.on_toggle_menu();
        menu.request_confirm("delete");
        let before = menu.state().clone();

        menu.call_back_confirm_button("nonexistent");
        assert_eq!(menu.state(), &before);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        menu.on_cancel_confirm();
        menu.request_confirm("nonexistent");
        assert_eq!(menu.state(), &MenuState::Open);
    }

    #[test]
    fn test_cancel_returns_to_open_without_action() {
        let (mut menu, calls) = counting_menu();
        menu.on_toggle_menu();
        menu.request_confirm("delete");
        menu.on_cancel_confirm();
        assert_eq!(menu.state(), &MenuState::Open);
        assert!(!menu.descriptor("delete").expect("registered").disclosure.is_open());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_plain_item_runs_and_closes() {
        let (mut menu, _) = counting_menu();
        let mut ran = false;
        menu.select_item(|| ran = true);
        assert!(!ran, "closed menu ignores selection");

        menu.on_toggle_menu();
        menu.select_item(|| ran = true);
        assert!(ran);
        assert_eq!(menu.state(), &MenuState::Closed);
    }

    #[test]
    fn test_dismiss_while_confirm_pending_closes_prompt() {
        let (mut menu, calls) = counting_menu();
        menu.on_toggle_menu();
        menu.request_confirm("delete");
        menu.on_close_menu();
        assert_eq!(menu.state(), &MenuState::Closed);
        assert!(!menu.descriptor("delete").expect("registered").disclosure.is_open());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_loading_disables_reopening() {
        let delete = Mutation::new("delete");
        let update = Mutation::new("update");
        let mut menu =
            use_menu_action([MenuActionDescriptor::new("delete", || {}).loading(delete.loading_flag())]);
        menu.track_loading(update.loading_flag());
        assert!(!menu.is_actions_loading());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        runtime.block_on(async {
            let (tx, rx) = tokio::sync::oneshot::channel::<()>();
            let in_flight = update.mutate(async {
                rx.await.ok();
                Ok::<_, Error>(())
            });
            let check = async {
                tokio::task::yield_now().await;
                assert!(menu.is_actions_loading());
                menu.on_toggle_menu();
                assert_eq!(menu.state(), &MenuState::Closed);
                tx.send(()).ok();
            };
            let (result, ()) = tokio::join!(in_flight, check);
            result.expect("mutation settles");
        });

        assert!(!menu.is_actions_loading());
        menu.on_toggle_menu();
        assert!(menu.is_open_menu());
    }

    #[test]
    fn test_item_view_swaps_in_confirm_prompt() {
        let (mut menu, _) = counting_menu();
        let delete = MenuItem::Confirmable {
            key: "delete".to_string(),
            label: "Delete".to_string(),
            confirmation_text: "Are you sure?".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        };
        let edit = MenuItem::Link {
            label: "Edit".to_string(),
            href: "/admin/users/jdoe".to_string(),
        };

        menu.on_toggle_menu();
        assert_eq!(menu.item_view(&delete), MenuItemView::Item(&delete));

        menu.request_confirm("delete");
        assert!(matches!(
            menu.item_view(&delete),
            MenuItemView::ConfirmPrompt { confirmation_text: "Are you sure?", .. }
        ));
        assert_eq!(menu.item_view(&edit), MenuItemView::Item(&edit));
    }
}
