//! Browser adapter: `web_sys::HtmlElement` as an [`ElementHandle`] and the
//! live document as a [`Page`].

use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement};

use super::{ElementHandle, LinkItem, Page};

impl ElementHandle for HtmlElement {
    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn remove_attr(&self, name: &str) {
        let _ = self.remove_attribute(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(class, on);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn is_hidden(&self) -> bool {
        self.hidden()
    }

    fn set_hidden(&self, hidden: bool) {
        HtmlElement::set_hidden(self, hidden);
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            let _ = self.set_attribute("disabled", "");
        } else {
            let _ = self.remove_attribute("disabled");
        }
    }

    fn focus(&self) {
        let _ = HtmlElement::focus(self);
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other;
        web_sys::Node::contains(self, Some(other))
    }

    fn clear_children(&self) {
        self.set_text_content(None);
    }

    fn append_link_item(&self, link: &LinkItem) {
        let Some(document) = self.owner_document() else {
            return;
        };
        let (Ok(li), Ok(a)) = (document.create_element("li"), document.create_element("a")) else {
            return;
        };
        let _ = a.set_attribute("href", &link.href);
        let _ = a.set_attribute("target", link.target);
        let _ = a.set_attribute("rel", link.rel);
        a.set_text_content(Some(&link.label));
        let _ = li.append_child(&a);
        let _ = self.append_child(&li);
    }
}

/// The live document.
#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page for the current window, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Node = HtmlElement;

    fn root(&self) -> Option<HtmlElement> {
        self.document.document_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }
}

/// Nearest `HtmlElement` at or above an event target.
///
/// Clicks on inline SVG report an `SVGElement` target; walking up lets
/// containment checks still see the enclosing button.
#[must_use]
pub fn nearest_html_element(target: Option<EventTarget>) -> Option<HtmlElement> {
    let mut element = target?.dyn_into::<web_sys::Element>().ok()?;
    loop {
        match element.dyn_into::<HtmlElement>() {
            Ok(html) => return Some(html),
            Err(other) => element = other.parent_element()?,
        }
    }
}
