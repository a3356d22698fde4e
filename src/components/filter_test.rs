use super::*;
use crate::dom::fake::{FakeNode, FakePage};

struct Fixture {
    all: FakeNode,
    web: FakeNode,
    rust: FakeNode,
    cards: Vec<FakeNode>,
    filter: ProjectFilter<FakeNode>,
}

fn fixture() -> Fixture {
    let all = FakeNode::new().with_attr(FILTER_ATTR, "all");
    let web = FakeNode::new().with_attr(FILTER_ATTR, "web");
    let rust = FakeNode::new().with_attr(FILTER_ATTR, "rust");
    let cards = vec![
        FakeNode::new().with_attr(TAGS_ATTR, "web  rust"),
        FakeNode::new().with_attr(TAGS_ATTR, "rust cli"),
        FakeNode::new().with_attr(TAGS_ATTR, " webgl "),
        FakeNode::new(),
    ];
    let filter = ProjectFilter::new(vec![all.clone(), web.clone(), rust.clone()], cards.clone());
    Fixture { all, web, rust, cards, filter }
}

#[test]
fn tags_discard_empty_tokens() {
    assert_eq!(tags_of("  web\trust \n cli ").collect::<Vec<_>>(), vec!["web", "rust", "cli"]);
    assert_eq!(tags_of("   ").count(), 0);
}

#[test]
fn card_visibility_requires_exact_token() {
    assert!(card_visible("all", ""));
    assert!(card_visible("web", "rust web"));
    assert!(!card_visible("web", "webgl"));
}

#[test]
fn activating_tag_hides_cards_without_it() {
    let f = fixture();
    f.filter.apply("web");

    let hidden = f.cards.iter().map(ElementHandle::is_hidden).collect::<Vec<_>>();
    assert_eq!(hidden, vec![false, true, true, true]);
    assert_eq!(f.filter.visible_count(), 1);
}

#[test]
fn activating_all_shows_every_card() {
    let f = fixture();
    f.filter.apply("rust");
    f.filter.apply("all");
    assert!(f.cards.iter().all(|card| !card.is_hidden()));
}

#[test]
fn only_clicked_button_is_active() {
    let f = fixture();
    f.filter.on_button_click(&f.rust);
    assert!(f.rust.has_class(ACTIVE_CLASS));
    assert!(!f.web.has_class(ACTIVE_CLASS));
    assert!(!f.all.has_class(ACTIVE_CLASS));

    f.filter.on_button_click(&f.all);
    assert!(f.all.has_class(ACTIVE_CLASS));
    assert!(!f.rust.has_class(ACTIVE_CLASS));
}

#[test]
fn button_without_filter_value_means_all() {
    let bare = FakeNode::new();
    assert_eq!(ProjectFilter::filter_of(&bare), "all");
}

#[test]
fn mount_needs_buttons_and_cards() {
    let page = FakePage::new();
    page.register(BUTTON_SELECTOR, &FakeNode::new());
    assert!(ProjectFilter::mount(&page).is_err());

    page.register(CARD_SELECTOR, &FakeNode::new());
    assert!(ProjectFilter::mount(&page).is_ok());
}
