//! Site configuration.
//!
//! The host page may carry an inline
//! `<script type="application/json" id="folio-config">` block overriding any
//! subset of these fields. Missing block, missing fields and unknown fields
//! all fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the inline config element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

pub const DEFAULT_DEGRADED_MESSAGE: &str = "profile data unavailable right now — rate limit or offline";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github_handle: String,
    pub api_base: String,
    pub theme_storage_key: String,
    pub repo_limit: usize,
    pub degraded_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_handle: "Isharkii".to_owned(),
            api_base: "https://api.github.com".to_owned(),
            theme_storage_key: "theme".to_owned(),
            repo_limit: 6,
            degraded_message: DEFAULT_DEGRADED_MESSAGE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object matching
    /// the field types.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Config from optional inline text; blank or invalid input yields defaults.
    #[must_use]
    pub fn from_inline(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// API base without a trailing slash.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
