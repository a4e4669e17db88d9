//! Console Constants
//!
//! Centralized defaults shared by the screens and components.

/// Default number of users per page on the users screen
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query-string parameter holding the current page
pub const PAGE_PARAM: &str = "page";

/// Maximum number of toasts kept on screen
pub const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Default viewport width in pixels (maps to the `lg` breakpoint)
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;

/// Login of the signed-in account when no configuration is present
pub const DEFAULT_ACCOUNT_LOGIN: &str = "admin";

/// Root path of the user administration screens
pub const USERS_PATH: &str = "/admin/users/";

/// Root path of the account screens
pub const ACCOUNT_PATH: &str = "/account/";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
