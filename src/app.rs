//! Bootstrap: wire every component once the page structure is ready.
//!
//! Components are independent, so [`Component::INIT_ORDER`] only fixes
//! readability. A component whose anchors are missing is skipped with a
//! debug log line; nothing here can fail the page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::error::MountError;

/// `document.readyState` while the parser is still running.
pub const LOADING_STATE: &str = "loading";

/// Every component the bootstrap wires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Theme,
    Nav,
    Reveal,
    Counters,
    Filter,
    Copy,
    Profile,
    ScrollSpy,
    FooterYear,
}

impl Component {
    /// The order `start_when_ready` wires components in.
    pub const INIT_ORDER: [Self; 9] = [
        Self::Theme,
        Self::Nav,
        Self::Reveal,
        Self::Counters,
        Self::Filter,
        Self::Copy,
        Self::Profile,
        Self::ScrollSpy,
        Self::FooterYear,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Nav => "nav",
            Self::Reveal => "reveal",
            Self::Counters => "counters",
            Self::Filter => "filter",
            Self::Copy => "copy",
            Self::Profile => "profile",
            Self::ScrollSpy => "scroll spy",
            Self::FooterYear => "footer year",
        }
    }
}

/// Whether wiring has to wait for `DOMContentLoaded`.
#[must_use]
pub fn must_defer(ready_state: &str) -> bool {
    ready_state == LOADING_STATE
}

/// Keep a mounted component's output, or log why it was skipped.
pub fn settle<T>(component: Component, outcome: Result<T, MountError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{} skipped: {e}", component.name());
            None
        }
    }
}

#[cfg(feature = "hydrate")]
pub use web::start_when_ready;

#[cfg(feature = "hydrate")]
mod web {
    use std::cell::RefCell;

    use crate::components::{clipboard, counter, filter, footer, nav, reveal, scroll_spy, theme};
    use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
    use crate::dom::web::WebPage;
    use crate::dom::{ElementHandle, Page};
    use crate::error::MountError;
    use crate::net::github;
    use crate::observe::Subscription;

    use super::{Component, must_defer, settle};

    thread_local! {
        /// Listeners and observers that live as long as the page.
        static LIVE: RefCell<Vec<Subscription>> = const { RefCell::new(Vec::new()) };
    }

    fn keep(subscriptions: Vec<Subscription>) {
        LIVE.with(|live| live.borrow_mut().extend(subscriptions));
    }

    fn load_config(page: &WebPage) -> SiteConfig {
        let inline = page.by_id(CONFIG_ELEMENT_ID).map(|el| el.text());
        SiteConfig::from_inline(inline.as_deref())
    }

    fn wire(component: Component, page: &WebPage, config: &SiteConfig) -> Result<Vec<Subscription>, MountError> {
        match component {
            Component::Theme => theme::wire(page, &config.theme_storage_key),
            Component::Nav => nav::wire(page),
            Component::Reveal => reveal::wire(page),
            Component::Counters => counter::wire(page),
            Component::Filter => filter::wire(page),
            Component::Copy => clipboard::wire(page),
            Component::Profile => github::wire(page, config).map(|()| Vec::new()),
            Component::ScrollSpy => scroll_spy::wire(page),
            Component::FooterYear => footer::stamp_year(page, footer::current_year()).map(|()| Vec::new()),
        }
    }

    fn boot(page: &WebPage) {
        let config = load_config(page);
        for component in Component::INIT_ORDER {
            if let Some(subscriptions) = settle(component, wire(component, page, &config)) {
                keep(subscriptions);
            }
        }
    }

    /// Boot now, or on `DOMContentLoaded` if the document is still parsing.
    pub fn start_when_ready() {
        let Some(page) = WebPage::current() else {
            return;
        };
        if !must_defer(&page.document().ready_state()) {
            boot(&page);
            return;
        }
        let target = page.document().clone();
        let listener = gloo_events::EventListener::once(&target, "DOMContentLoaded", move |_| boot(&page));
        keep(vec![Subscription::new(move || drop(listener))]);
    }
}
