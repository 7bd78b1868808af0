//! Centralized configuration management.
//!
//! Settings are fixed at build time: `build.rs` forwards them from `.env`
//! and they are read here with `option_env!`. Missing or empty values fall
//! back to the public deployment.

use std::sync::LazyLock;

use noventa::{ApiClient, Result};

pub const DEFAULT_API_URL: &str = "https://assignment-api.piton.com.tr";
pub const DEFAULT_CATALOG_URL: &str = "https://store-api-dev.piton.com.tr";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Auth API base URL (`NOVENTA_API_URL`)
    pub api_url: String,
    /// Books API base URL (`NOVENTA_CATALOG_URL`)
    pub catalog_url: String,
    /// Serve the built-in catalog without calling the books API
    /// (`NOVENTA_MOCK_CATALOG=1`)
    pub mock_catalog: bool,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("NOVENTA_API_URL"),
            option_env!("NOVENTA_CATALOG_URL"),
            option_env!("NOVENTA_MOCK_CATALOG"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        catalog_url: Option<&str>,
        mock_catalog: Option<&str>,
    ) -> Self {
        Self {
            api_url: non_empty_or(api_url, DEFAULT_API_URL),
            catalog_url: non_empty_or(catalog_url, DEFAULT_CATALOG_URL),
            mock_catalog: mock_catalog.is_some_and(is_enabled),
        }
    }

    pub fn auth_client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.api_url)
    }

    pub fn catalog_client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.catalog_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn is_enabled(flag: &str) -> bool {
    matches!(
        flag.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Global application configuration, resolved once.
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_build_env);
