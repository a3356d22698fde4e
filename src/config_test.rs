use super::*;

#[test]
fn defaults_match_portfolio_contract() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.repo_limit, 6);
    assert_eq!(config.api_root(), "https://api.github.com");
    assert_eq!(config.degraded_message, DEFAULT_DEGRADED_MESSAGE);
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    let config = SiteConfig::from_json(r#"{"github_handle":"octocat","repo_limit":3}"#).unwrap();
    assert_eq!(config.github_handle, "octocat");
    assert_eq!(config.repo_limit, 3);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{"colour":"teal"}"#).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn wrong_field_type_is_an_error() {
    assert!(SiteConfig::from_json(r#"{"repo_limit":"six"}"#).is_err());
}

#[test]
fn inline_absent_blank_or_invalid_falls_back_to_defaults() {
    assert_eq!(SiteConfig::from_inline(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_inline(Some("  \n")), SiteConfig::default());
    assert_eq!(SiteConfig::from_inline(Some("{not json")), SiteConfig::default());
}

#[test]
fn api_root_strips_trailing_slashes() {
    let config = SiteConfig { api_base: "https://ghe.example.com/api/v3//".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.api_root(), "https://ghe.example.com/api/v3");
}
