//! Remote profile summary.
//!
//! Two concurrent GETs against the public profile API (the user record and
//! the most recently updated repositories), joined before anything renders.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-2xx statuses and undecodable bodies from either
//! request all collapse to one degraded status message. Nothing partial is
//! rendered, nothing is retried, and the summary panel stays hidden.

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use std::future::Future;

use super::types::{GitHubRepo, GitHubUser, ProfileSnapshot, count_text};
use crate::config::SiteConfig;
use crate::dom::{ElementHandle, LinkItem, Page, require_id};
use crate::error::{MountError, ProfileError};

pub const ACCEPT: &str = "application/vnd.github+json";

pub const STATUS_ID: &str = "gh-status";
pub const SUMMARY_ID: &str = "gh-mini";
pub const AVATAR_ID: &str = "gh-avatar";
pub const NAME_ID: &str = "gh-name";
pub const META_ID: &str = "gh-meta";
pub const REPOS_ID: &str = "gh-repos";
pub const FOLLOWERS_ID: &str = "gh-followers";
pub const REPO_LIST_ID: &str = "gh-repo-list";

#[must_use]
pub fn user_endpoint(config: &SiteConfig) -> String {
    format!("{}/users/{}", config.api_root(), urlencoding::encode(&config.github_handle))
}

#[must_use]
pub fn repos_endpoint(config: &SiteConfig) -> String {
    format!(
        "{}/users/{}/repos?sort=updated&per_page={}",
        config.api_root(),
        urlencoding::encode(&config.github_handle),
        config.repo_limit
    )
}

/// Status and body of a completed GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Unauthenticated GET transport.
pub trait HttpGet {
    fn get(&self, url: &str, accept: &str) -> impl Future<Output = Result<HttpReply, ProfileError>>;
}

fn checked(reply: HttpReply, resource: &'static str) -> Result<String, ProfileError> {
    if !reply.ok() {
        return Err(ProfileError::Status { resource, status: reply.status });
    }
    Ok(reply.body)
}

/// # Errors
///
/// Returns [`ProfileError::Malformed`] if `body` is not a user record.
pub fn parse_user(body: &str) -> Result<GitHubUser, ProfileError> {
    serde_json::from_str(body).map_err(|e| ProfileError::Malformed { resource: "user", reason: e.to_string() })
}

/// A JSON body that is not an array reads as no repositories.
///
/// # Errors
///
/// Returns [`ProfileError::Malformed`] if `body` is not JSON or an array
/// entry lacks `name`/`html_url`.
pub fn parse_repos(body: &str, limit: usize) -> Result<Vec<GitHubRepo>, ProfileError> {
    let malformed = |e: serde_json::Error| ProfileError::Malformed { resource: "repos", reason: e.to_string() };
    let value: serde_json::Value = serde_json::from_str(body).map_err(malformed)?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    let mut repos: Vec<GitHubRepo> = serde_json::from_value(value).map_err(malformed)?;
    repos.truncate(limit);
    Ok(repos)
}

/// Issue both requests concurrently and join them, failing fast.
///
/// # Errors
///
/// Returns the first [`ProfileError`] from either request or its decoding.
pub async fn fetch_snapshot<H: HttpGet>(http: &H, config: &SiteConfig) -> Result<ProfileSnapshot, ProfileError> {
    let user_url = user_endpoint(config);
    let repos_url = repos_endpoint(config);
    let (user, repos) = futures::future::try_join(http.get(&user_url, ACCEPT), http.get(&repos_url, ACCEPT)).await?;

    let user_body = checked(user, "user")?;
    let repos_body = checked(repos, "repos")?;
    Ok(ProfileSnapshot {
        user: parse_user(&user_body)?,
        repos: parse_repos(&repos_body, config.repo_limit)?,
    })
}

/// The summary panel and its status line.
pub struct ProfileWidget<N> {
    status: N,
    summary: N,
    avatar: Option<N>,
    name: Option<N>,
    meta: Option<N>,
    repos: Option<N>,
    followers: Option<N>,
    repo_list: Option<N>,
}

impl<N: ElementHandle> ProfileWidget<N> {
    /// Only the status line and the summary panel are required.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if either required anchor is absent.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        Ok(Self {
            status: require_id(page, "profile", STATUS_ID)?,
            summary: require_id(page, "profile", SUMMARY_ID)?,
            avatar: page.by_id(AVATAR_ID),
            name: page.by_id(NAME_ID),
            meta: page.by_id(META_ID),
            repos: page.by_id(REPOS_ID),
            followers: page.by_id(FOLLOWERS_ID),
            repo_list: page.by_id(REPO_LIST_ID),
        })
    }

    pub fn render(&self, snapshot: &ProfileSnapshot) {
        let user = &snapshot.user;
        if let Some(avatar) = &self.avatar {
            avatar.set_attr("src", &user.avatar_url);
            avatar.set_attr("alt", &user.avatar_alt());
        }
        if let Some(name) = &self.name {
            name.set_text(user.display_name());
        }
        if let Some(meta) = &self.meta {
            meta.set_text(&user.tagline());
        }
        if let Some(repos) = &self.repos {
            repos.set_text(&count_text(user.public_repos));
        }
        if let Some(followers) = &self.followers {
            followers.set_text(&count_text(user.followers));
        }
        if let Some(list) = &self.repo_list {
            list.clear_children();
            for repo in &snapshot.repos {
                list.append_link_item(&LinkItem::external(&repo.html_url, &repo.name));
            }
        }

        self.status.set_hidden(true);
        self.summary.set_hidden(false);
    }

    pub fn degrade(&self, message: &str) {
        self.status.set_text(message);
        self.summary.set_hidden(true);
    }

    /// Fetch once and render the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`ProfileError`] that was rendered as the degraded state.
    pub async fn load<H: HttpGet>(&self, http: &H, config: &SiteConfig) -> Result<(), ProfileError> {
        match fetch_snapshot(http, config).await {
            Ok(snapshot) => {
                self.render(&snapshot);
                Ok(())
            }
            Err(e) => {
                log::warn!("[{}] profile summary unavailable: {e}", e.error_code());
                self.degrade(&config.degraded_message);
                Err(e)
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use web::{GlooHttp, wire};

#[cfg(feature = "hydrate")]
mod web {
    use wasm_bindgen_futures::spawn_local;

    use crate::config::SiteConfig;
    use crate::dom::web::WebPage;
    use crate::error::{MountError, ProfileError};

    use super::{HttpGet, HttpReply, ProfileWidget};

    /// `fetch` via `gloo-net`.
    pub struct GlooHttp;

    impl HttpGet for GlooHttp {
        async fn get(&self, url: &str, accept: &str) -> Result<HttpReply, ProfileError> {
            let resp = gloo_net::http::Request::get(url)
                .header("Accept", accept)
                .send()
                .await
                .map_err(|e| ProfileError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ProfileError::Network(e.to_string()))?;
            Ok(HttpReply { status, body })
        }
    }

    /// Start the single fetch for this page load.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the status line or summary panel is absent.
    pub fn wire(page: &WebPage, config: &SiteConfig) -> Result<(), MountError> {
        let widget = ProfileWidget::mount(page)?;
        let config = config.clone();
        spawn_local(async move {
            let _ = widget.load(&GlooHttp, &config).await;
        });
        Ok(())
    }
}
