//! Storefront configuration from environment variables.
//!
//! On the server, load configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`. The browser bundle has no process environment, so the
//! same variables are baked in at build time.

pub const BACKEND_URL_VAR: &str = "STOREFRONT_BACKEND_URL";
pub const SALES_CHANNEL_ID_VAR: &str = "STOREFRONT_SALES_CHANNEL_ID";
pub const AUTH_TIMEOUT_MS_VAR: &str = "STOREFRONT_AUTH_TIMEOUT_MS";

/// Backend used when `STOREFRONT_BACKEND_URL` is unset (local Medusa server)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

/// Upper bound for a single sign-in request
pub const DEFAULT_AUTH_TIMEOUT_MS: u32 = 30_000;

/// Configuration errors detected at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("STOREFRONT_SALES_CHANNEL_ID environment variable is not set")]
    MissingSalesChannel,

    #[error("STOREFRONT_BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
}

/// Storefront configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the commerce backend, without a trailing slash
    /// Example: https://api.shop.example.com
    pub backend_url: String,

    /// Sales channel that scopes catalog, pricing and the customer session
    pub sales_channel_id: Option<String>,

    /// Timeout applied to the authentication request
    pub auth_timeout_ms: u32,
}

impl Config {
    /// Load configuration from environment variables.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var(BACKEND_URL_VAR).ok().as_deref(),
            std::env::var(SALES_CHANNEL_ID_VAR).ok().as_deref(),
            std::env::var(AUTH_TIMEOUT_MS_VAR).ok().as_deref(),
        )
    }

    /// Load configuration captured when the client bundle was compiled.
    #[cfg(not(feature = "ssr"))]
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("STOREFRONT_BACKEND_URL"),
            option_env!("STOREFRONT_SALES_CHANNEL_ID"),
            option_env!("STOREFRONT_AUTH_TIMEOUT_MS"),
        )
    }

    /// Build a config from raw variable values.
    ///
    /// Blank values count as unset. An unparsable or zero timeout falls back
    /// to the default.
    pub fn from_parts(
        backend_url: Option<&str>,
        sales_channel_id: Option<&str>,
        auth_timeout_ms: Option<&str>,
    ) -> Self {
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        let auth_timeout_ms = match non_blank(auth_timeout_ms) {
            Some(raw) => raw.parse::<u32>().ok().filter(|ms| *ms > 0).unwrap_or_else(|| {
                leptos::logging::warn!(
                    "Ignoring invalid {}={:?}, using {}ms",
                    AUTH_TIMEOUT_MS_VAR,
                    raw,
                    DEFAULT_AUTH_TIMEOUT_MS
                );
                DEFAULT_AUTH_TIMEOUT_MS
            }),
            None => DEFAULT_AUTH_TIMEOUT_MS,
        };

        Self {
            backend_url: non_blank(backend_url)
                .unwrap_or(DEFAULT_BACKEND_URL)
                .trim_end_matches('/')
                .to_string(),
            sales_channel_id: non_blank(sales_channel_id).map(str::to_string),
            auth_timeout_ms,
        }
    }

    /// Check if a sales channel is configured
    pub fn has_sales_channel(&self) -> bool {
        self.sales_channel_id.is_some()
    }

    /// Sales channel id, or the configuration error describing its absence
    pub fn sales_channel_id(&self) -> Result<&str, ConfigError> {
        self.sales_channel_id
            .as_deref()
            .ok_or(ConfigError::MissingSalesChannel)
    }

    /// Check everything the storefront cannot start without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBackendUrl(self.backend_url.clone()));
        }
        self.sales_channel_id()?;
        Ok(())
    }
}
