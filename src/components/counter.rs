//! Animated numeric counters.
//!
//! Each `.stat-value` inside a `[data-count]` container counts from 0 up to
//! its `data-count-to` value the first time it is 70% visible, easing out
//! over 900 ms and rendering with the precision written in the target
//! attribute. The last frame always renders the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::RefCell;

use crate::dom::{ElementHandle, Page, require_all};
use crate::error::MountError;
use crate::observe::{IntersectionEntry, Observer, ObserverOptions};

pub const COUNTER_SELECTOR: &str = "[data-count] .stat-value";
pub const TARGET_ATTR: &str = "data-count-to";
pub const SUFFIX_ATTR: &str = "data-count-suffix";
pub const COUNTER_THRESHOLD: f64 = 0.7;
pub const DURATION_MS: f64 = 900.0;

#[must_use]
pub fn observer_options() -> ObserverOptions {
    ObserverOptions::threshold(COUNTER_THRESHOLD)
}

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Fixed-point text for `value`. Negative zero renders as `0`.
///
/// Exact ties round away from zero, as `Number.prototype.toFixed` does;
/// `format!` alone would round them to even.
#[must_use]
pub fn to_fixed(value: f64, precision: usize) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:.*}", precision, round_ties_away(value, precision) + 0.0)
}

fn round_ties_away(value: f64, precision: usize) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if scaled.is_finite() && scaled.abs().fract().to_bits() == 0.5f64.to_bits() {
        return scaled.round() / scale;
    }
    value
}

/// What a counter animates towards.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub precision: usize,
    pub suffix: String,
}

impl CounterSpec {
    /// Precision is the digit count after the first `.` of the raw target.
    /// A missing target reads as `"0"`; a non-numeric one animates to 0.
    #[must_use]
    pub fn parse(raw_target: Option<&str>, suffix: Option<&str>) -> Self {
        let raw = raw_target.unwrap_or("0");
        let target = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        let precision = raw.split('.').nth(1).map_or(0, str::len);
        Self { target, precision, suffix: suffix.unwrap_or_default().to_owned() }
    }

    pub fn from_element(element: &impl ElementHandle) -> Self {
        Self::parse(element.attr(TARGET_ATTR).as_deref(), element.attr(SUFFIX_ATTR).as_deref())
    }

    #[must_use]
    pub fn render(&self, value: f64) -> String {
        format!("{}{}", to_fixed(value, self.precision), self.suffix)
    }

    /// Text at `elapsed_ms` into the animation, and whether it is the last frame.
    #[must_use]
    pub fn frame_text(&self, elapsed_ms: f64) -> (String, bool) {
        let t = (elapsed_ms / DURATION_MS).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.render(self.target), true);
        }
        (self.render(self.target * ease_out_cubic(t)), false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Done,
}

/// One element's animation in flight.
pub struct CounterRun<N> {
    element: N,
    spec: CounterSpec,
    started_at: f64,
}

impl<N: ElementHandle> CounterRun<N> {
    pub fn new(element: N, spec: CounterSpec, started_at: f64) -> Self {
        Self { element, spec, started_at }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Render the frame for timestamp `now`.
    pub fn frame(&self, now: f64) -> Frame {
        let (text, last) = self.spec.frame_text(now - self.started_at);
        self.element.set_text(&text);
        if last { Frame::Done } else { Frame::Continue }
    }

    /// Jump straight to the final text.
    pub fn finish(&self) {
        self.element.set_text(&self.spec.render(self.spec.target));
    }
}

pub struct CounterAnimator<N> {
    targets: Vec<N>,
    started: RefCell<Vec<N>>,
}

impl<N: ElementHandle> CounterAnimator<N> {
    pub fn new(targets: Vec<N>) -> Self {
        Self { targets, started: RefCell::new(Vec::new()) }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if the page has no counter elements.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        Ok(Self::new(require_all(page, "counters", COUNTER_SELECTOR)?))
    }

    pub fn targets(&self) -> &[N] {
        &self.targets
    }

    pub fn start(&self, observer: &impl Observer<N>) {
        for target in &self.targets {
            observer.observe(target);
        }
    }

    /// Retire every intersecting target and return the runs to drive.
    ///
    /// A target that has already started never yields a second run.
    pub fn on_batch(
        &self,
        entries: &[IntersectionEntry<N>],
        observer: &impl Observer<N>,
        now: f64,
    ) -> Vec<CounterRun<N>> {
        let mut runs = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            observer.unobserve(&entry.target);
            let mut started = self.started.borrow_mut();
            if started.contains(&entry.target) {
                continue;
            }
            started.push(entry.target.clone());
            let spec = CounterSpec::from_element(&entry.target);
            runs.push(CounterRun::new(entry.target.clone(), spec, now));
        }
        runs
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::HtmlElement;

    use crate::dom::web::WebPage;
    use crate::error::MountError;
    use crate::observe::{Subscription, observe};

    use super::{CounterAnimator, CounterRun, Frame, observer_options};

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }

    /// Drive `run` with one animation-frame callback per frame until done.
    fn animate(run: CounterRun<HtmlElement>) {
        let Some(window) = web_sys::window() else {
            run.finish();
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();
        *holder.borrow_mut() = Some(Closure::new(move |now: f64| {
            if run.frame(now) == Frame::Done {
                holder_for_cb.borrow_mut().take();
                return;
            }
            if let Some(cb) = holder_for_cb.borrow().as_ref() {
                let _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }));

        if let Some(cb) = holder.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if there are no counters or the browser lacks
    /// intersection observers.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let counters = CounterAnimator::mount(page)?;
        let targets = counters.targets().to_vec();
        let subscription = observe(&targets, &observer_options(), move |batch, observer| {
            for run in counters.on_batch(&batch, observer, now_ms()) {
                animate(run);
            }
        })
        .ok_or_else(|| MountError::missing("counters", "IntersectionObserver"))?;
        Ok(vec![subscription])
    }
}
