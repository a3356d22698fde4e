//! Networking modules for the remote profile summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema of the public profile API and `github`
//! fetches it concurrently and renders the result into the page.

pub mod github;
pub mod types;
