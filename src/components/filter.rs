//! Project card filter.
//!
//! `.filter` buttons carry a `data-filter` tag (or `"all"`); `.project` cards
//! carry a whitespace-separated `data-tags` list. Activating a filter marks
//! its button `is-active` and hides every card that lacks the tag.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::dom::{ElementHandle, Page, require_all};
use crate::error::MountError;

pub const BUTTON_SELECTOR: &str = ".filter";
pub const CARD_SELECTOR: &str = ".project";
pub const FILTER_ATTR: &str = "data-filter";
pub const TAGS_ATTR: &str = "data-tags";
pub const ACTIVE_CLASS: &str = "is-active";
pub const ALL: &str = "all";

/// Non-empty whitespace-separated tokens of a `data-tags` value.
pub fn tags_of(raw: &str) -> impl Iterator<Item = &str> {
    raw.split_whitespace()
}

#[must_use]
pub fn card_visible(filter: &str, raw_tags: &str) -> bool {
    filter == ALL || tags_of(raw_tags).any(|tag| tag == filter)
}

pub struct ProjectFilter<N> {
    buttons: Vec<N>,
    cards: Vec<N>,
}

impl<N: ElementHandle> ProjectFilter<N> {
    pub fn new(buttons: Vec<N>, cards: Vec<N>) -> Self {
        Self { buttons, cards }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] unless the page has at least one button and one card.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        let buttons = require_all(page, "filter", BUTTON_SELECTOR)?;
        let cards = require_all(page, "filter", CARD_SELECTOR)?;
        Ok(Self::new(buttons, cards))
    }

    pub fn buttons(&self) -> &[N] {
        &self.buttons
    }

    /// Filter value a button applies; buttons without one mean `"all"`.
    pub fn filter_of(button: &N) -> String {
        button.attr(FILTER_ATTR).unwrap_or_else(|| ALL.to_owned())
    }

    pub fn apply(&self, filter: &str) {
        for button in &self.buttons {
            let active = button.attr(FILTER_ATTR).as_deref() == Some(filter);
            button.set_class(ACTIVE_CLASS, active);
        }
        for card in &self.cards {
            let tags = card.attr(TAGS_ATTR).unwrap_or_default();
            card.set_hidden(!card_visible(filter, &tags));
        }
    }

    pub fn on_button_click(&self, button: &N) {
        self.apply(&Self::filter_of(button));
    }

    /// Number of cards currently shown.
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_hidden()).count()
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use crate::dom::web::WebPage;
    use crate::error::MountError;
    use crate::observe::{Subscription, listen};

    use super::ProjectFilter;

    /// # Errors
    ///
    /// Returns [`MountError`] if buttons or cards are absent.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let filter = Rc::new(ProjectFilter::mount(page)?);
        let subscriptions = filter
            .buttons()
            .iter()
            .map(|button| {
                let filter = Rc::clone(&filter);
                let clicked = button.clone();
                listen(button, "click", move |_| filter.on_button_click(&clicked))
            })
            .collect();
        Ok(subscriptions)
    }
}
