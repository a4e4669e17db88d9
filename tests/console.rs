//! End-to-end flows of the users and profile screens against `MemoryApi`.

use std::sync::Arc;
use std::time::Duration;

use admin_console::app::entities::AppEntities;
use admin_console::components::composite::data_list::Breakpoint;
use admin_console::components::composite::menu_action::MenuState;
use admin_console::domain::account::Account;
use admin_console::domain::config::AppConfig;
use admin_console::features::account::{ProfileController, SubmitOutcome};
use admin_console::features::users::{CreateButton, UsersController, UsersPage};
use admin_console::services::{ApiCall, MemoryApi, QueryKey};
use admin_console::state::toast_state::ToastKind;

fn backend(users: usize) -> Arc<MemoryApi> {
    let api = Arc::new(MemoryApi::new(Account {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        ..Account::new("admin", "admin@example.com")
    }));
    api.seed_users(users);
    api
}

#[tokio::test]
async fn users_last_page_delete_steps_back() {
    let api = backend(21);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/?page=2");
    let mut users = UsersController::new(api.clone(), entities.clone());

    users.load().await.expect("load");
    assert_eq!(users.list().len(), 1);
    let last = users.list().items[0].clone();
    assert_eq!(last.login, "user21");

    let mut actions = users.actions_for(&last);
    actions.menu_mut().on_toggle_menu();
    actions.request_delete();
    assert_eq!(
        actions.menu().state(),
        &MenuState::ConfirmPending("delete".to_string())
    );
    actions.confirm_delete();
    assert_eq!(actions.menu().state(), &MenuState::Closed);

    assert_eq!(users.process_commands().await.expect("commands"), 1);
    assert_eq!(api.requested_pages(), vec![1, 1, 0]);
    assert_eq!(users.page(), 1);
    assert_eq!(entities.location.href(), "/admin/users/?page=1");
    assert_eq!(users.list().len(), 20);

    let toast = entities.toasts().last().cloned().expect("toast");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Account Deleted");
    assert_eq!(toast.description.as_deref(), Some("Account deleted with success"));
}

#[tokio::test]
async fn users_invalidation_forces_refetch() {
    let api = backend(5);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/");
    let mut users = UsersController::new(api.clone(), entities);

    users.load().await.expect("load");
    users.load().await.expect("cached load");
    assert_eq!(api.requested_pages(), vec![0]);

    let user = users.list().items[2].clone();
    let mut actions = users.actions_for(&user);
    actions.menu_mut().on_toggle_menu();
    actions.select_status_toggle();
    users.process_commands().await.expect("commands");

    assert_eq!(api.requested_pages(), vec![0, 0]);
    assert!(!users.list().items[2].activated);
}

#[tokio::test]
async fn users_page_renders_per_breakpoint() {
    let api = backend(41);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/?page=3");
    let mut users = UsersController::new(api, entities);
    users.load().await.expect("load");

    let page = UsersPage::build(&users, Breakpoint::Base).expect("page");
    assert!(matches!(page.create_button, CreateButton::Icon { .. }));

    let small = page.layout(Breakpoint::Base);
    assert!(small.header.is_none());
    assert_eq!(small.rows[0].visible_cells().count(), 3);
    assert_eq!(small.footer.as_ref().map(|f| f.span), Some(3));

    let large = page.layout(Breakpoint::Lg);
    assert!(large.header.is_some());
    assert_eq!(large.rows[0].visible_cells().count(), 7);
    assert!(page.render_text(Breakpoint::Lg).ends_with("Showing 41 to 41 of 41"));
}

#[tokio::test]
async fn menu_stays_closed_while_delete_is_in_flight() {
    let api = Arc::new(
        MemoryApi::new(Account::new("admin", "admin@example.com"))
            .with_latency(Duration::from_millis(20)),
    );
    api.seed_users(3);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/");
    let mut users = UsersController::new(api, entities);
    users.load().await.expect("load");

    let target = users.list().items[0].clone();
    let other = users.list().items[1].clone();
    let mut other_actions = users.actions_for(&other);

    let delete = users.delete(&target);
    let check = async {
        tokio::task::yield_now().await;
        other_actions.menu_mut().on_toggle_menu();
        assert!(!other_actions.menu().is_open_menu());
    };
    let (deleted, ()) = tokio::join!(delete, check);
    assert!(deleted);

    other_actions.menu_mut().on_toggle_menu();
    assert!(other_actions.menu().is_open_menu());
}

#[tokio::test]
async fn profile_invalid_email_is_blocked() {
    let api = backend(0);
    let entities = AppEntities::init(AppConfig::default(), "/account/profile");
    let mut profile = ProfileController::new(api.clone(), entities);
    profile.load().await.expect("load");

    profile.form_mut().set_value("email", "not-an-email");
    let outcome = profile.submit().await.expect("submit");
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid email address");
    assert!(!api.calls().iter().any(|c| matches!(c, ApiCall::UpdateAccount { .. })));

    let page = profile.page().expect("loaded");
    assert!(page.render_text().contains("  ! Invalid email address"));
}

#[tokio::test]
async fn profile_failure_and_success_toasts() {
    let api = backend(0);
    let entities = AppEntities::init(AppConfig::default(), "/account/profile");
    let mut profile = ProfileController::new(api.clone(), entities.clone());
    profile.load().await.expect("load");

    api.fail_next(400, r#"{"title":"Bad Request","description":"Email already in use"}"#);
    profile.form_mut().set_value("email", "ada@example.com");
    assert_eq!(profile.submit().await.expect("submit"), SubmitOutcome::Failed);
    let toast = entities.toasts().last().cloned().expect("toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Update failed");
    assert_eq!(toast.description.as_deref(), Some("Email already in use"));
    assert_eq!(api.account().email, "admin@example.com");

    assert_eq!(profile.submit().await.expect("submit"), SubmitOutcome::Updated);
    assert_eq!(api.account().email, "ada@example.com");
    assert_eq!(
        entities.toasts().last().map(|t| t.title.clone()).as_deref(),
        Some("Updated with success")
    );

    // the account query was invalidated, so reloading hits the backend again
    assert!(entities.cache.state::<Account>(&QueryKey::Account).is_stale);
    profile.load().await.expect("reload");
    let fetches = api
        .calls()
        .iter()
        .filter(|c| matches!(c, ApiCall::GetAccount))
        .count();
    assert_eq!(fetches, 2);
}

#[tokio::test]
async fn confirmed_delete_cannot_be_confirmed_twice() {
    let api = backend(3);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/");
    let mut users = UsersController::new(api.clone(), entities.clone());
    users.load().await.expect("load");

    let target = users.list().items[0].clone();
    let mut actions = users.actions_for(&target);
    actions.menu_mut().on_toggle_menu();
    actions.request_delete();
    actions.confirm_delete();
    assert!(actions.menu().is_actions_loading());

    // reopening is refused while the delete waits to run
    actions.menu_mut().on_toggle_menu();
    assert!(!actions.menu().is_open_menu());
    actions.request_delete();
    actions.confirm_delete();

    // menus of other rows share the guard
    let other = users.list().items[1].clone();
    let mut other_actions = users.actions_for(&other);
    other_actions.menu_mut().on_toggle_menu();
    assert!(!other_actions.menu().is_open_menu());

    assert_eq!(users.process_commands().await.expect("commands"), 1);
    let deletes = api
        .calls()
        .iter()
        .filter(|c| matches!(c, ApiCall::DeleteUser { .. }))
        .count();
    assert_eq!(deletes, 1);
    let titles: Vec<_> = entities.toasts().toasts().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, ["Account Deleted"]);

    actions.menu_mut().on_toggle_menu();
    assert!(actions.menu().is_open_menu());
}

#[tokio::test]
async fn actions_cell_resolves_to_row_menu() {
    let api = backend(2);
    let entities = AppEntities::init(AppConfig::default(), "/admin/users/");
    let mut users = UsersController::new(api.clone(), entities);
    users.load().await.expect("load");
    let mut page = UsersPage::build(&users, Breakpoint::Lg).expect("page");

    let layout = page.layout(Breakpoint::Lg);
    for (row, user) in layout.rows.iter().zip(&users.list().items) {
        let cell = row
            .visible_cells()
            .find(|cell| cell.col_name == "actions")
            .expect("actions cell visible on lg");
        let menu = page.cell_menu(cell).expect("row menu");
        assert_eq!(menu.user().login, user.login);
    }

    let second = users.list().items[1].id.to_string();
    let actions = page.actions_mut(&second).expect("row menu");
    actions.menu_mut().on_toggle_menu();
    actions.request_delete();
    actions.confirm_delete();
    users.process_commands().await.expect("commands");
    assert!(api.calls().contains(&ApiCall::DeleteUser {
        login: "user2".to_string(),
    }));
}
