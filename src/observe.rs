//! Viewport-intersection plumbing.
//!
//! DESIGN
//! ======
//! Components receive batches of [`IntersectionEntry`] plus the [`Observer`]
//! that produced them, so "fire once" components can unobserve a target the
//! moment it fires. Every live observer or listener is owned by a
//! [`Subscription`]; dropping or disposing it tears the registration down.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

/// One target's state within an observation batch.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<N> {
    pub target: N,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Threshold and root-margin configuration for one observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub thresholds: Vec<f64>,
    pub root_margin: Option<&'static str>,
}

impl ObserverOptions {
    #[must_use]
    pub fn threshold(threshold: f64) -> Self {
        Self { thresholds: vec![threshold], root_margin: None }
    }

    #[must_use]
    pub fn thresholds(thresholds: &[f64]) -> Self {
        Self { thresholds: thresholds.to_vec(), root_margin: None }
    }

    #[must_use]
    pub fn with_root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

/// Registration side of an intersection observer.
pub trait Observer<N> {
    fn observe(&self, target: &N);
    fn unobserve(&self, target: &N);
}

/// Owner of a live registration. Disposal runs exactly once.
#[must_use = "dropping a Subscription tears the registration down"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self { dispose: Some(Box::new(dispose)) }
    }

    /// Tear down now instead of on drop.
    pub fn dispose(mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("live", &self.dispose.is_some()).finish()
    }
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;

    use super::Observer;

    /// Observer that records registrations instead of watching anything.
    pub struct RecordingObserver<N> {
        pub observed: RefCell<Vec<N>>,
        pub unobserved: RefCell<Vec<N>>,
    }

    impl<N> Default for RecordingObserver<N> {
        fn default() -> Self {
            Self { observed: RefCell::new(Vec::new()), unobserved: RefCell::new(Vec::new()) }
        }
    }

    impl<N: Clone> Observer<N> for RecordingObserver<N> {
        fn observe(&self, target: &N) {
            self.observed.borrow_mut().push(target.clone());
        }

        fn unobserve(&self, target: &N) {
            self.unobserved.borrow_mut().push(target.clone());
        }
    }
}

#[cfg(feature = "hydrate")]
pub use web::{WebObserver, listen, observe};

#[cfg(feature = "hydrate")]
mod web {
    use js_sys::Array;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{
        Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::{IntersectionEntry, Observer, ObserverOptions, Subscription};

    /// Browser observer handed to batch callbacks.
    pub struct WebObserver(IntersectionObserver);

    impl Observer<HtmlElement> for WebObserver {
        fn observe(&self, target: &HtmlElement) {
            self.0.observe(target);
        }

        fn unobserve(&self, target: &HtmlElement) {
            self.0.unobserve(target);
        }
    }

    fn to_entry(value: JsValue) -> Option<IntersectionEntry<HtmlElement>> {
        let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
        let target = entry.target().dyn_into::<HtmlElement>().ok()?;
        Some(IntersectionEntry {
            target,
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        })
    }

    /// Observe `targets` and feed every batch to `on_batch`.
    ///
    /// Returns `None` when the browser refuses to construct the observer.
    pub fn observe<F>(targets: &[HtmlElement], options: &ObserverOptions, mut on_batch: F) -> Option<Subscription>
    where
        F: FnMut(Vec<IntersectionEntry<HtmlElement>>, &WebObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch = entries.iter().filter_map(to_entry).collect::<Vec<_>>();
                on_batch(batch, &WebObserver(observer));
            },
        );

        let init = IntersectionObserverInit::new();
        let thresholds = options
            .thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect::<Array>();
        init.set_threshold(&thresholds);
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for target in targets {
            observer.observe(target);
        }

        Some(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }

    /// Attach an event listener for as long as the subscription lives.
    pub fn listen<F>(target: &EventTarget, event: &'static str, callback: F) -> Subscription
    where
        F: FnMut(&Event) + 'static,
    {
        let listener = gloo_events::EventListener::new(target, event, callback);
        Subscription::new(move || drop(listener))
    }
}
