//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::components::composite::data_list::Breakpoint;
use crate::constants::{
    DEFAULT_ACCOUNT_LOGIN, DEFAULT_PAGE_SIZE, DEFAULT_TOAST_CAPACITY, DEFAULT_VIEWPORT_WIDTH,
};
use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Users per page on the users screen
    pub page_size: u32,
    /// Display locale
    pub locale: Locale,
    /// Maximum number of toasts kept at once
    pub toast_capacity: usize,
    /// Viewport width in pixels, used to pick the active breakpoint
    pub viewport_width: f32,
    /// Login of the signed-in account
    pub account_login: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            account_login: DEFAULT_ACCOUNT_LOGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// Reject values the screens cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config {
                message: "page_size must be greater than 0".to_string(),
            });
        }
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(Error::Config {
                message: format!("viewport_width must be a positive number, got {}", self.viewport_width),
            });
        }
        Ok(())
    }

    /// Breakpoint matching the configured viewport width
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("page_size = 50\nlocale = \"zh-CN\"").expect("valid toml");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.locale, Locale::ZhCN);
        assert_eq!(config.toast_capacity, DEFAULT_TOAST_CAPACITY);
        assert_eq!(config.account_login, DEFAULT_ACCOUNT_LOGIN);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = AppConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_default_viewport_is_large() {
        assert_eq!(AppConfig::default().breakpoint(), Breakpoint::Lg);
    }
}
