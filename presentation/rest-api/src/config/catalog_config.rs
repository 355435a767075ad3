use std::env;

use anyhow::Context;

/// Access to the hosted game catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub url: String,
    pub api_key: String,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_URL: base URL of the hosted service (required)
    /// - CATALOG_API_KEY: public API key of the hosted service (required)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("CATALOG_URL")
            .filter(|v| !v.trim().is_empty())
            .context("CATALOG_URL must be set")?;
        let api_key = lookup("CATALOG_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("CATALOG_API_KEY must be set")?;

        Ok(Self { url, api_key })
    }
}
