//! Active-section highlighting for the navigation links.
//!
//! Each `.nav-links a` whose `href` fragment names an element on the page is
//! paired with that section. After every observation batch the most visible
//! intersecting section wins, and exactly its link carries `is-active` and
//! `aria-current="page"`. A batch in which nothing intersects leaves the
//! previous highlight in place.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use crate::dom::{ElementHandle, Page};
use crate::error::MountError;
use crate::observe::{IntersectionEntry, ObserverOptions};

pub const LINK_SELECTOR: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "is-active";
pub const CURRENT_ATTR: &str = "aria-current";
pub const THRESHOLDS: [f64; 3] = [0.05, 0.1, 0.2];
pub const ROOT_MARGIN: &str = "-25% 0px -65% 0px";

#[must_use]
pub fn observer_options() -> ObserverOptions {
    ObserverOptions::thresholds(&THRESHOLDS).with_root_margin(ROOT_MARGIN)
}

/// Non-empty fragment identifier of an `href`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.split_once('#').map(|(_, fragment)| fragment).filter(|f| !f.is_empty())
}

/// Highest-ratio intersecting entry; the earliest one wins ties.
pub fn most_visible<N>(entries: &[IntersectionEntry<N>]) -> Option<&IntersectionEntry<N>> {
    let mut best: Option<&IntersectionEntry<N>> = None;
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        if best.is_none_or(|b| entry.ratio > b.ratio) {
            best = Some(entry);
        }
    }
    best
}

struct Pair<N> {
    link: N,
    section: N,
}

pub struct ScrollSpy<N> {
    pairs: Vec<Pair<N>>,
}

impl<N: ElementHandle> ScrollSpy<N> {
    /// Pair each link with its section; links without one are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if no link resolves to a section.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        let pairs = page
            .query_all(LINK_SELECTOR)
            .into_iter()
            .filter_map(|link| {
                let href = link.attr("href")?;
                let section = page.by_id(fragment_of(&href)?)?;
                Some(Pair { link, section })
            })
            .collect::<Vec<_>>();
        if pairs.is_empty() {
            return Err(MountError::missing("scroll spy", "linked sections"));
        }
        Ok(Self { pairs })
    }

    pub fn sections(&self) -> Vec<N> {
        self.pairs.iter().map(|p| p.section.clone()).collect()
    }

    /// Mark the link of `section` active and clear every other link.
    pub fn activate(&self, section: &N) {
        for pair in &self.pairs {
            let active = pair.section == *section;
            pair.link.set_class(ACTIVE_CLASS, active);
            if active {
                pair.link.set_attr(CURRENT_ATTR, "page");
            } else {
                pair.link.remove_attr(CURRENT_ATTR);
            }
        }
    }

    /// Highlight the batch winner. Returns `false` when nothing intersects.
    pub fn on_batch(&self, entries: &[IntersectionEntry<N>]) -> bool {
        let Some(winner) = most_visible(entries) else {
            return false;
        };
        self.activate(&winner.target);
        true
    }

    pub fn active_links(&self) -> Vec<N> {
        self.pairs
            .iter()
            .filter(|p| p.link.attr(CURRENT_ATTR).is_some())
            .map(|p| p.link.clone())
            .collect()
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use crate::dom::web::WebPage;
    use crate::error::MountError;
    use crate::observe::{Subscription, observe};

    use super::{ScrollSpy, observer_options};

    /// # Errors
    ///
    /// Returns [`MountError`] if no link resolves to a section or the browser
    /// lacks intersection observers.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let spy = ScrollSpy::mount(page)?;
        let sections = spy.sections();
        let subscription = observe(&sections, &observer_options(), move |batch, _| {
            spy.on_batch(&batch);
        })
        .ok_or_else(|| MountError::missing("scroll spy", "IntersectionObserver"))?;
        Ok(vec![subscription])
    }
}
