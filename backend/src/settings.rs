//! Runtime configuration loaded via OrthoConfig.
//!
//! Values come from `POKEDEX_*` environment variables, matching CLI flags, or
//! a configuration file, in OrthoConfig's usual precedence order.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::EmptyFavouritesPolicy;
use crate::example_data::ExampleDataSettings;

/// Address bound when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Session key location when none is configured.
pub const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Service configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POKEDEX")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. In-memory adapters are used when unset.
    pub database_url: Option<String>,
    /// Path to the 64-byte session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Emit the session cookie with the `Secure` attribute.
    #[ortho_config(default = true)]
    pub cookie_secure: bool,
    /// Generate a throwaway session key when the key file is missing.
    #[ortho_config(default = false)]
    pub allow_ephemeral_session_key: bool,
    /// Report an empty favourites list as `404` instead of an empty `200`.
    #[ortho_config(default = false)]
    pub empty_favourites_not_found: bool,
    /// Insert the bundled catalogue and demo accounts on startup.
    #[ortho_config(default = false)]
    pub seed_example_data: bool,
    /// Registry file to seed from instead of the bundled one.
    pub example_data_registry: Option<PathBuf>,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

impl AppSettings {
    /// Parsed listen address, defaulting to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] for unparsable values.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Session key location, defaulting to [`DEFAULT_SESSION_KEY_FILE`].
    #[must_use]
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Policy for listing a user with no favourites.
    #[must_use]
    pub fn empty_favourites_policy(&self) -> EmptyFavouritesPolicy {
        EmptyFavouritesPolicy::from_flag(self.empty_favourites_not_found)
    }

    /// Seeding settings derived from this configuration.
    #[must_use]
    pub fn example_data(&self) -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: self.seed_example_data,
            registry_path: self.example_data_registry.clone(),
        }
    }
}
