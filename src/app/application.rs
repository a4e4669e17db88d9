//! Application - Headless Console Walkthrough
//!
//! Drives the users and profile screens against the in-memory backend on a
//! current-thread runtime, the way a front end would.

use std::sync::Arc;

use anyhow::Context;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::domain::account::Account;
use crate::domain::config::AppConfig;
use crate::domain::user::{ROLE_ADMIN, ROLE_USER, User};
use crate::features::account::{ProfileController, SubmitOutcome};
use crate::features::users::{UsersController, UsersPage};
use crate::services::MemoryApi;
use crate::state::toast_state::Toast;

/// Users generated besides the signed-in account
const SEEDED_USERS: usize = 40;

/// What the walkthrough saw
#[derive(Debug, Clone)]
pub struct Walkthrough {
    pub users_screen: String,
    pub final_page: u32,
    pub profile_outcome: SubmitOutcome,
    pub profile_screen: String,
    pub toasts: Vec<Toast>,
}

/// Backend holding the signed-in account plus generated users
fn seeded_api(config: &AppConfig) -> MemoryApi {
    let login = config.account_login.as_str();
    let email = format!("{login}@example.com");
    let api = MemoryApi::new(Account {
        authorities: vec![ROLE_ADMIN.to_string(), ROLE_USER.to_string()],
        ..Account::new(login, email.clone())
    });
    api.insert_user(User {
        authorities: vec![ROLE_ADMIN.to_string(), ROLE_USER.to_string()],
        ..User::new(0, login, email)
    });
    api.seed_users(SEEDED_USERS);
    api
}

/// Open the last users page, delete its only user, then update the profile
pub async fn walkthrough(config: AppConfig) -> anyhow::Result<Walkthrough> {
    let bp = config.breakpoint();
    let api = Arc::new(seeded_api(&config));
    let entities = AppEntities::init(config, &format!("{}?page=3", Route::Users.path()));

    let mut users = UsersController::new(api.clone(), entities.clone());
    users.load().await.context("Failed to load users")?;
    let mut page = UsersPage::build(&users, bp)?;
    let users_screen = page.render_text(bp);
    tracing::info!(breakpoint = bp.name(), "\n{users_screen}");

    let last_row = users.list().items.last().map(|user| user.id.to_string());
    if let Some(actions) = last_row.and_then(|row_id| page.actions_mut(&row_id)) {
        actions.menu_mut().on_toggle_menu();
        actions.request_delete();
        actions.confirm_delete();
    }
    users.process_commands().await.context("Failed to run user actions")?;
    let final_page = users.page();
    tracing::info!(page = final_page, users = users.list().len(), "Users screen after delete");
    users.unmount();

    entities.location.navigate(&Route::Profile.path());
    let mut profile = ProfileController::new(api, entities.clone());
    profile.load().await.context("Failed to load profile")?;
    profile.form_mut().set_value("firstName", "Site");
    profile.form_mut().set_value("lastName", "Administrator");
    let profile_outcome = profile.submit().await?;
    let profile_screen = profile
        .page()
        .map(|page| page.render_text())
        .unwrap_or_default();
    tracing::info!(outcome = ?profile_outcome, "\n{profile_screen}");

    let toasts = entities.toasts().toasts().iter().cloned().collect();
    Ok(Walkthrough {
        users_screen,
        final_page,
        profile_outcome,
        profile_screen,
        toasts,
    })
}

/// Run the walkthrough to completion
pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to create tokio runtime")?;
    let result = runtime.block_on(walkthrough(config))?;
    for toast in &result.toasts {
        tracing::info!(kind = toast.kind.label(), title = %toast.title, description = ?toast.description, "Toast shown");
    }
    Ok(())
}
