//! Scroll-triggered reveal.
//!
//! Each `.reveal` element gains `is-visible` the first time it intersects the
//! viewport at ratio 0.18 and is unobserved in the same step. The class is
//! never removed, so scrolling back out and in again changes nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::{ElementHandle, Page, require_all};
use crate::error::MountError;
use crate::observe::{IntersectionEntry, Observer, ObserverOptions};

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.18;

#[must_use]
pub fn observer_options() -> ObserverOptions {
    ObserverOptions::threshold(REVEAL_THRESHOLD)
}

pub struct RevealAnimator<N> {
    targets: Vec<N>,
}

impl<N: ElementHandle> RevealAnimator<N> {
    pub fn new(targets: Vec<N>) -> Self {
        Self { targets }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if the page has no `.reveal` elements.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        Ok(Self::new(require_all(page, "reveal", REVEAL_SELECTOR)?))
    }

    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    pub fn start(&self, observer: &impl Observer<N>) {
        for target in &self.targets {
            observer.observe(target);
        }
    }

    /// Reveal every intersecting target and stop watching it.
    ///
    /// Returns how many elements transitioned in this batch.
    pub fn on_batch(&self, entries: &[IntersectionEntry<N>], observer: &impl Observer<N>) -> usize {
        let mut revealed = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            observer.unobserve(&entry.target);
            if entry.target.has_class(VISIBLE_CLASS) {
                continue;
            }
            entry.target.set_class(VISIBLE_CLASS, true);
            revealed += 1;
        }
        revealed
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use crate::dom::web::WebPage;
    use crate::error::MountError;
    use crate::observe::{Subscription, observe};

    use super::{RevealAnimator, observer_options};

    /// # Errors
    ///
    /// Returns [`MountError`] if there is nothing to reveal or the browser
    /// lacks intersection observers.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let reveal = RevealAnimator::mount(page)?;
        let targets = reveal.targets().to_vec();
        let subscription = observe(&targets, &observer_options(), move |batch, observer| {
            reveal.on_batch(&batch, observer);
        })
        .ok_or_else(|| MountError::missing("reveal", "IntersectionObserver"))?;
        Ok(vec![subscription])
    }
}
