//! Utils - Formatting and Config File Helpers

pub mod config_store;
pub mod format;
