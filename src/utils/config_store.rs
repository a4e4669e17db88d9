//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "admin-console", "admin-console")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::Config {
            message: "Could not find a home directory for the config file".to_string(),
        })
}

/// Default config file location
pub fn default_config_path() -> Result<PathBuf> {
    Ok(app_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load and validate a TOML config file; a missing file gives the defaults
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save a config file, creating its directory if needed
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("admin-console-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(&temp_path("missing")).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let config = AppConfig {
            page_size: 10,
            locale: Locale::ZhCN,
            ..Default::default()
        };
        save_config(&path, &config).expect("save");
        assert_eq!(load_config(&path).expect("load"), config);
        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = temp_path("invalid");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("temp dir");
        }
        fs::write(&path, "page_size = 0").expect("write");
        assert!(matches!(load_config(&path), Err(Error::Config { .. })));

        fs::write(&path, "page_size = \"many\"").expect("write");
        assert!(matches!(load_config(&path), Err(Error::TomlDe { .. })));
        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }
}
