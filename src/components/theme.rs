//! Display-mode preference and toggle.
//!
//! Applies a `data-theme` attribute on the document root and persists the
//! choice through a [`PreferenceStore`]. An absent attribute and absent
//! stored value both mean "follow the operating system".
//!
//! TRADE-OFFS
//! ==========
//! The system preference is sampled at click time rather than tracked, so a
//! page that never toggles keeps following the OS live via CSS alone.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::dom::{ElementHandle, Page};
use crate::error::MountError;
use crate::store::PreferenceStore;

pub const THEME_ATTR: &str = "data-theme";
pub const TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    /// Only the literal strings `"light"` and `"dark"` are modes.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

pub struct ThemeController<N, S> {
    root: N,
    store: S,
    key: String,
}

impl<N: ElementHandle, S: PreferenceStore> ThemeController<N, S> {
    pub fn new(root: N, store: S, key: impl Into<String>) -> Self {
        Self { root, store, key: key.into() }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if the page has no root element.
    pub fn mount<P: Page<Node = N>>(page: &P, store: S, key: impl Into<String>) -> Result<Self, MountError> {
        let root = page.root().ok_or_else(|| MountError::missing("theme", "document root"))?;
        Ok(Self::new(root, store, key))
    }

    /// Apply and persist `raw` if it names a mode; otherwise clear both.
    pub fn set_mode(&self, raw: &str) -> Option<DisplayMode> {
        let mode = DisplayMode::parse(raw);
        self.apply(mode);
        mode
    }

    pub fn apply(&self, mode: Option<DisplayMode>) {
        match mode {
            Some(mode) => {
                self.root.set_attr(THEME_ATTR, mode.as_str());
                self.store.set(&self.key, mode.as_str());
            }
            None => {
                self.root.remove_attr(THEME_ATTR);
                self.store.remove(&self.key);
            }
        }
    }

    /// Re-apply a valid saved mode. Invalid saved values are left alone.
    pub fn initialize(&self) -> Option<DisplayMode> {
        let mode = self.store.get(&self.key).as_deref().and_then(DisplayMode::parse)?;
        self.apply(Some(mode));
        Some(mode)
    }

    /// Mode set on the root element, if any.
    pub fn explicit_mode(&self) -> Option<DisplayMode> {
        self.root.attr(THEME_ATTR).as_deref().and_then(DisplayMode::parse)
    }

    pub fn effective_mode(&self, system_prefers_dark: bool) -> DisplayMode {
        self.explicit_mode()
            .unwrap_or_else(|| DisplayMode::from_system(system_prefers_dark))
    }

    /// Flip the effective mode and persist the result.
    pub fn toggle(&self, system_prefers_dark: bool) -> DisplayMode {
        let next = self.effective_mode(system_prefers_dark).flipped();
        self.apply(Some(next));
        next
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use crate::dom::{Page, web::WebPage};
    use crate::error::MountError;
    use crate::observe::{Subscription, listen};
    use crate::store::LocalStore;

    use super::{DARK_SCHEME_QUERY, TOGGLE_SELECTOR, ThemeController};

    fn system_prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    /// Restore the saved mode and, when a toggle control exists, wire it.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the document has no root element.
    pub fn wire(page: &WebPage, storage_key: &str) -> Result<Vec<Subscription>, MountError> {
        let controller = Rc::new(ThemeController::mount(page, LocalStore, storage_key)?);
        controller.initialize();

        let Some(toggle) = page.query(TOGGLE_SELECTOR) else {
            return Ok(Vec::new());
        };
        let on_click = listen(&toggle, "click", move |_| {
            let mode = controller.toggle(system_prefers_dark());
            log::debug!("display mode -> {}", mode.as_str());
        });
        Ok(vec![on_click])
    }
}
