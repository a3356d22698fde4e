//! Collapsible navigation menu.
//!
//! Open state is the `is-open` class on the menu; the trigger mirrors it in
//! `aria-expanded`. The menu closes on link activation, on a click outside
//! both trigger and menu, and on Escape (which also returns focus to the
//! trigger).

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::{ElementHandle, Page, require};
use crate::error::MountError;

pub const TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const MENU_SELECTOR: &str = ".nav-links";
pub const OPEN_CLASS: &str = "is-open";
pub const EXPANDED_ATTR: &str = "aria-expanded";

pub struct NavController<N> {
    toggle: N,
    menu: N,
}

impl<N: ElementHandle> NavController<N> {
    pub fn new(toggle: N, menu: N) -> Self {
        Self { toggle, menu }
    }

    /// # Errors
    ///
    /// Returns [`MountError`] if either the trigger or the menu is absent.
    pub fn mount<P: Page<Node = N>>(page: &P) -> Result<Self, MountError> {
        let toggle = require(page, "nav", TOGGLE_SELECTOR)?;
        let menu = require(page, "nav", MENU_SELECTOR)?;
        Ok(Self::new(toggle, menu))
    }

    pub fn toggle_element(&self) -> &N {
        &self.toggle
    }

    pub fn menu_element(&self) -> &N {
        &self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(OPEN_CLASS)
    }

    pub fn set_open(&self, open: bool) {
        self.menu.set_class(OPEN_CLASS, open);
        self.toggle.set_attr(EXPANDED_ATTR, if open { "true" } else { "false" });
    }

    pub fn on_toggle_click(&self) {
        self.set_open(!self.is_open());
    }

    /// Click that landed inside the menu.
    pub fn on_menu_click(&self, target_is_link: bool) {
        if target_is_link {
            self.set_open(false);
        }
    }

    /// Any click on the document. Returns whether the menu was closed.
    pub fn on_document_click(&self, target: Option<&N>) -> bool {
        if !self.is_open() {
            return false;
        }
        if let Some(target) = target {
            if self.toggle.contains(target) || self.menu.contains(target) {
                return false;
            }
        }
        self.set_open(false);
        true
    }

    /// Any key press on the document. Returns whether the menu was closed.
    pub fn on_key(&self, key: &str) -> bool {
        if key != "Escape" || !self.is_open() {
            return false;
        }
        self.set_open(false);
        self.toggle.focus();
        true
    }
}

#[cfg(feature = "hydrate")]
pub use web::wire;

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{HtmlAnchorElement, KeyboardEvent};

    use crate::dom::web::{WebPage, nearest_html_element};
    use crate::error::MountError;
    use crate::observe::{Subscription, listen};

    use super::NavController;

    /// # Errors
    ///
    /// Returns [`MountError`] if the trigger or menu is absent.
    pub fn wire(page: &WebPage) -> Result<Vec<Subscription>, MountError> {
        let nav = Rc::new(NavController::mount(page)?);

        let on_toggle = {
            let nav = Rc::clone(&nav);
            let toggle = nav.toggle_element().clone();
            listen(&toggle, "click", move |_| nav.on_toggle_click())
        };

        let on_menu = {
            let nav = Rc::clone(&nav);
            let menu = nav.menu_element().clone();
            listen(&menu, "click", move |event| {
                let is_link = event
                    .target()
                    .is_some_and(|t| t.dyn_ref::<HtmlAnchorElement>().is_some());
                nav.on_menu_click(is_link);
            })
        };

        let on_document_click = {
            let nav = Rc::clone(&nav);
            listen(page.document(), "click", move |event| {
                let target = nearest_html_element(event.target());
                nav.on_document_click(target.as_ref());
            })
        };

        let on_key = listen(page.document(), "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                nav.on_key(&key);
            }
        });

        Ok(vec![on_toggle, on_menu, on_document_click, on_key])
    }
}
