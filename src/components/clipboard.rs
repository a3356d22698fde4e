//! Copy-to-clipboard buttons and the one-shot phone reveal.
//!
//! Copying is a capability with two strategies tried in fixed order: the
//! asynchronous clipboard API, then a legacy off-screen selection plus the
//! `copy` command. Either one succeeding counts as success.
//!
//! ERROR HANDLING
//! ==============
//! Strategy failures never escape. The caller only learns a boolean, which
//! becomes "Copied" or "Copy failed" on the button for 900 ms.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::future::Future;

use crate::dom::{ElementHandle, Page, require_id};
use crate::error::{ClipboardError, MountError};

pub const COPY_SELECTOR: &str = "[data-copy]";
pub const COPY_ATTR: &str = "data-copy";
pub const COPIED_LABEL: &str = "Copied";
pub const FAILED_LABEL: &str = "Copy failed";
pub const FEEDBACK_MS: u32 = 900;

pub const PHONE_TRIGGER_ID: &str = "reveal-phone";
pub const PHONE_TARGET_ID: &str = "phone-obfuscated";
pub const PHONE_ATTR: &str = "data-phone";
pub const REVEALED_LABEL: &str = "Revealed";

/// One way of putting text on the system clipboard.
pub trait CopyStrategy {
    fn name(&self) -> &'static str;
    fn write(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Primary strategy with a single fallback.
pub struct Clipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: CopyStrategy, F: CopyStrategy> Clipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub async fn copy(&self, text: &str) -> bool {
        match self.primary.write(text).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{} failed ({e}); trying {}", self.primary.name(), self.fallback.name());
                self.fallback.write(text).await.is_ok()
            }
        }
    }
}

#[must_use]
pub fn feedback_label(ok: bool) -> &'static str {
    if ok { COPIED_LABEL } else { FAILED_LABEL }
}

/// A control whose `data-copy` attribute holds the text to copy.
///
/// The resting label is captured once at construction, so overlapping
/// presses always restore it rather than an earlier feedback text.
#[derive(Clone)]
pub struct CopyButton<N> {
    button: N,
    label: String,
}

impl<N: ElementHandle> CopyButton<N> {
    pub fn new(button: N) -> Self {
        let label = button.text();
        Self { button, label }
    }

    /// Every copy control on the page; none is fine.
    pub fn mount_all<Pg: Page<Node = N>>(page: &Pg) -> Vec<Self> {
        page.query_all(COPY_SELECTOR).into_iter().map(Self::new).collect()
    }

    pub fn element(&self) -> &N {
        &self.button
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> Option<String> {
        self.button.attr(COPY_ATTR).filter(|text| !text.is_empty())
    }

    /// Copy the payload and show feedback.
    ///
    /// Returns whether feedback is showing and needs a [`restore`](Self::restore)
    /// after [`FEEDBACK_MS`]; `false` when there was nothing to copy.
    pub async fn press<P: CopyStrategy, F: CopyStrategy>(&self, clipboard: &Clipboard<P, F>) -> bool {
        let Some(text) = self.payload() else {
            return false;
        };
        let ok = clipboard.copy(&text).await;
        self.button.set_text(feedback_label(ok));
        true
    }

    /// Put the resting label back.
    pub fn restore(&self) {
        self.button.set_text(&self.label);
    }
}

/// Trigger that reveals a hidden contact value once.
pub struct PhoneReveal<N> {
    trigger: N,
    target: N,
}

impl<N: ElementHandle> PhoneReveal<N> {
    pub fn new(trigger: N, target: N) -> Self {
        Self { trigger, target }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if the trigger or target is absent.
    pub fn mount<Pg: Page<Node = N>>(page: &Pg) -> Result<Self, MountError> {
        let trigger = require_id(page, "phone reveal", PHONE_TRIGGER_ID)?;
        let target = require_id(page, "phone reveal", PHONE_TARGET_ID)?;
        Ok(Self::new(trigger, target))
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    /// Show the value and disable the trigger. Returns whether anything changed.
    pub fn reveal(&self) -> bool {
        let Some(phone) = self.trigger.attr(PHONE_ATTR).filter(|p| !p.is_empty()) else {
            return false;
        };
        self.target.set_text(&phone);
        self.trigger.set_disabled(true);
        self.trigger.set_text(REVEALED_LABEL);
        true
    }
}

#[cfg(feature = "hydrate")]
pub use web::{NativeClipboard, SelectionCopy, wire};

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    use crate::dom::web::WebPage;
    use crate::error::{ClipboardError, MountError};
    use crate::observe::{Subscription, listen};

    use super::{Clipboard, CopyButton, CopyStrategy, FEEDBACK_MS, PhoneReveal};

    fn rejected(err: JsValue) -> ClipboardError {
        ClipboardError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    /// `navigator.clipboard.writeText`.
    pub struct NativeClipboard;

    impl CopyStrategy for NativeClipboard {
        fn name(&self) -> &'static str {
            "clipboard api"
        }

        async fn write(&self, text: &str) -> Result<(), ClipboardError> {
            let window = web_sys::window().ok_or(ClipboardError::Unsupported)?;
            let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")).map_err(rejected)?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(ClipboardError::Unsupported);
            }
            let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .map_err(rejected)?
                .dyn_into::<Function>()
                .map_err(|_| ClipboardError::Unsupported)?;
            let promise = write_text
                .call1(&clipboard, &JsValue::from_str(text))
                .map_err(rejected)?
                .dyn_into::<Promise>()
                .map_err(|_| ClipboardError::Unsupported)?;
            JsFuture::from(promise).await.map_err(rejected)?;
            Ok(())
        }
    }

    /// Off-screen read-only textarea, select, `document.execCommand("copy")`.
    pub struct SelectionCopy;

    impl CopyStrategy for SelectionCopy {
        fn name(&self) -> &'static str {
            "selection copy"
        }

        async fn write(&self, text: &str) -> Result<(), ClipboardError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ClipboardError::Unsupported)?;
            let body = document.body().ok_or(ClipboardError::Unsupported)?;
            let html_document = document
                .clone()
                .dyn_into::<HtmlDocument>()
                .map_err(|_| ClipboardError::Unsupported)?;

            let field = document
                .create_element("textarea")
                .map_err(rejected)?
                .dyn_into::<HtmlTextAreaElement>()
                .map_err(|_| ClipboardError::Unsupported)?;
            field.set_value(text);
            field.set_read_only(true);
            let style = field.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("left", "-9999px");

            body.append_child(&field).map_err(rejected)?;
            field.select();
            let copied = html_document.exec_command("copy");
            field.remove();

            match copied {
                Ok(true) => Ok(()),
                Ok(false) => Err(ClipboardError::Rejected("copy command refused".to_owned())),
                Err(e) => Err(rejected(e)),
            }
        }
    }

    /// Wire every copy control and, if present, the phone reveal.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] only when there is neither a copy control nor a
    /// phone reveal to wire.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let clipboard = Rc::new(Clipboard::new(NativeClipboard, SelectionCopy));
        let mut subscriptions = CopyButton::mount_all(page)
            .into_iter()
            .map(|button| {
                let clipboard = Rc::clone(&clipboard);
                let element = button.element().clone();
                listen(&element, "click", move |_| {
                    let button = button.clone();
                    let clipboard = Rc::clone(&clipboard);
                    spawn_local(async move {
                        if button.press(&clipboard).await {
                            TimeoutFuture::new(FEEDBACK_MS).await;
                            button.restore();
                        }
                    });
                })
            })
            .collect::<Vec<_>>();

        match PhoneReveal::mount(page) {
            Ok(reveal) => {
                let trigger = reveal.trigger().clone();
                subscriptions.push(listen(&trigger, "click", move |_| {
                    reveal.reveal();
                }));
            }
            Err(e) if subscriptions.is_empty() => return Err(e),
            Err(e) => log::debug!("{e}"),
        }
        Ok(subscriptions)
    }
}
