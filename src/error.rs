//! Error types for the admin console
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Field validation failures are not errors here: they are data carried by
//! [`crate::form::FieldError`] and shown next to their field.

use snafu::Snafu;

/// Main error type for the console core
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or state
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Invalid configuration value
    #[snafu(display("Config error: {message}"))]
    Config { message: String },

    /// IO error (config file access)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Remote operation failed
    #[snafu(display("API error ({status}): {}", description.as_deref().unwrap_or("no description")))]
    Api {
        status: u16,
        description: Option<String>,
    },

    /// A mutation was triggered while a previous call was still in flight
    #[snafu(display("Mutation already in flight: {name}"))]
    MutationInFlight { name: String },

    /// A result settled after its owning screen was unmounted
    #[snafu(display("Screen unmounted before result settled"))]
    Unmounted,
}

impl Error {
    /// Description carried by a remote error payload, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            Error::Api { description, .. } => description.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
