use crate::catalog::CatalogFormat;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Format of the exported catalog
    pub format: CatalogFormat,
    /// Export destination; stdout when unset
    pub output: Option<PathBuf>,
    /// Catalog file to check for drift instead of exporting
    pub check: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        Ok(Config {
            format: non_empty("ERROR_SCHEMAS_FORMAT")
                .unwrap_or_else(|| "json".to_string())
                .parse()
                .context("ERROR_SCHEMAS_FORMAT must be json or yaml")?,
            output: non_empty("ERROR_SCHEMAS_OUTPUT").map(PathBuf::from),
            check: non_empty("ERROR_SCHEMAS_CHECK").map(PathBuf::from),
        })
    }
}
