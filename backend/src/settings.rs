//! Service configuration loaded via OrthoConfig.
//!
//! Values layer as defaults < config file < `HELLO_KIT_*` environment
//! variables < command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::users::DEFAULT_USERS_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Rejected value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
    /// `users_base_url` is not a URL.
    #[error("invalid users base URL {value:?}: {source}")]
    UsersBaseUrl {
        /// Rejected value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },
}

/// Settings for the HTTP server and its outbound adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HELLO_KIT")]
pub struct AppSettings {
    /// Socket address the server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the remote user directory.
    pub users_base_url: Option<String>,
}

impl AppSettings {
    /// Configured bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured directory base URL, defaulting to the public placeholder
    /// service.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UsersBaseUrl`] when the value does not parse.
    pub fn users_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .users_base_url
            .as_deref()
            .unwrap_or(DEFAULT_USERS_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::UsersBaseUrl {
            value: value.to_owned(),
            source,
        })
    }
}
