//! Wire types for the public profile API.
//!
//! Only the fields the summary renders are modelled; everything else in the
//! responses is ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// `GET /users/{handle}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
}

impl GitHubUser {
    /// Display name, or the login when the name is missing or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.login)
    }

    /// Biography, or `@login` when the bio is missing or empty.
    #[must_use]
    pub fn tagline(&self) -> String {
        match self.bio.as_deref().filter(|b| !b.is_empty()) {
            Some(bio) => bio.to_owned(),
            None => format!("@{}", self.login),
        }
    }

    #[must_use]
    pub fn avatar_alt(&self) -> String {
        format!("{} avatar", self.login)
    }
}

/// One entry of `GET /users/{handle}/repos`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
}

/// Both responses, joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub user: GitHubUser,
    pub repos: Vec<GitHubRepo>,
}

/// Count text; a missing count renders empty.
#[must_use]
pub fn count_text(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}
