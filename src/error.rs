//! Error types shared across components.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here ever reaches the user as an exception. Mount failures make a
//! component inert, profile failures collapse to one degraded message, and
//! clipboard failures become transient button text. The enums exist so those
//! outcomes are explicit values that can be logged and tested.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A component could not find one of the DOM anchors it needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("{component} not mounted: missing {anchor}")]
    Missing { component: &'static str, anchor: String },
}

impl MountError {
    #[must_use]
    pub fn missing(component: &'static str, anchor: impl Into<String>) -> Self {
        Self::Missing { component, anchor: anchor.into() }
    }
}

/// Failure of the remote profile flow. All variants render identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{resource} request failed: {status}")]
    Status { resource: &'static str, status: u16 },
    #[error("{resource} response malformed: {reason}")]
    Malformed { resource: &'static str, reason: String },
}

impl ProfileError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Status { .. } => "E_STATUS",
            Self::Malformed { .. } => "E_MALFORMED",
        }
    }
}

/// Failure of one clipboard strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard strategy unsupported in this context")]
    Unsupported,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// The inline site configuration block could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}
