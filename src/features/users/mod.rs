//! Users Feature
//!
//! Paged user list with per-row activate, deactivate and delete actions.

pub mod actions;
pub mod controller;
pub mod page;

pub use actions::{UserActions, UserCommand};
pub use controller::UsersController;
pub use page::{CreateButton, UsersPage};
