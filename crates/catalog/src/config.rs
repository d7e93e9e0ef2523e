//! Catalog view configuration.

use serde::Deserialize;

use pethouse_core::{DomainError, DomainResult};

use crate::count::CountLabels;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;
pub const DEFAULT_EMPTY_MESSAGE: &str = "Нет товаров по заданным параметрам";

pub const ITEMS_PER_PAGE_VAR: &str = "PETHOUSE_ITEMS_PER_PAGE";
pub const EMPTY_MESSAGE_VAR: &str = "PETHOUSE_EMPTY_MESSAGE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub items_per_page: usize,
    /// Shown by the renderer when the filtered set is empty.
    pub empty_message: String,
    pub count_labels: CountLabels,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            count_labels: CountLabels::default(),
        }
    }
}

impl CatalogConfig {
    /// Read overrides from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ITEMS_PER_PAGE_VAR) {
            match parse_items_per_page(&raw) {
                Ok(n) => config.items_per_page = n,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{ITEMS_PER_PAGE_VAR} invalid; using default {DEFAULT_ITEMS_PER_PAGE}"
                ),
            }
        }

        if let Some(message) = lookup(EMPTY_MESSAGE_VAR).filter(|m| !m.trim().is_empty()) {
            config.empty_message = message;
        }

        config
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.items_per_page == 0 {
            return Err(DomainError::validation("items_per_page must be at least 1"));
        }
        Ok(())
    }
}

fn parse_items_per_page(raw: &str) -> DomainResult<usize> {
    let n = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| DomainError::validation(format!("items_per_page: {e}")))?;
    if n == 0 {
        return Err(DomainError::validation("items_per_page must be at least 1"));
    }
    Ok(n)
}
