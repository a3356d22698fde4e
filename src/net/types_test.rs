use super::*;

fn user(json: &str) -> GitHubUser {
    serde_json::from_str(json).unwrap()
}

#[test]
fn user_parses_full_record_and_ignores_extra_fields() {
    let u = user(
        r#"{"login":"octo","name":"Octo Cat","bio":"ships","avatar_url":"https://a/1.png",
            "public_repos":12,"followers":3,"site_admin":false}"#,
    );
    assert_eq!(u.display_name(), "Octo Cat");
    assert_eq!(u.tagline(), "ships");
    assert_eq!(u.public_repos, Some(12));
    assert_eq!(u.avatar_alt(), "octo avatar");
}

#[test]
fn null_name_and_bio_fall_back_to_login() {
    let u = user(r#"{"login":"octo","name":null,"bio":null,"avatar_url":""}"#);
    assert_eq!(u.display_name(), "octo");
    assert_eq!(u.tagline(), "@octo");
}

#[test]
fn empty_name_and_bio_fall_back_to_login() {
    let u = user(r#"{"login":"octo","name":"","bio":""}"#);
    assert_eq!(u.display_name(), "octo");
    assert_eq!(u.tagline(), "@octo");
}

#[test]
fn user_without_login_is_rejected() {
    assert!(serde_json::from_str::<GitHubUser>(r#"{"name":"x"}"#).is_err());
}

#[test]
fn repo_needs_name_and_url() {
    let repo: GitHubRepo =
        serde_json::from_str(r#"{"name":"folio","html_url":"https://github.com/o/folio","stargazers_count":1}"#)
            .unwrap();
    assert_eq!(repo.name, "folio");
    assert!(serde_json::from_str::<GitHubRepo>(r#"{"name":"folio"}"#).is_err());
}

#[test]
fn count_text_renders_missing_as_empty() {
    assert_eq!(count_text(Some(42)), "42");
    assert_eq!(count_text(Some(0)), "0");
    assert_eq!(count_text(None), "");
}
