//! Element and page ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never scan a global document. They are handed resolved element
//! handles by `mount` constructors that query a [`Page`], and they manipulate
//! those handles only through [`ElementHandle`]. The browser adapter lives in
//! `web` (hydrate builds); tests use the in-memory fake.

#[cfg(test)]
pub mod fake;
#[cfg(feature = "hydrate")]
pub mod web;


use crate::error::MountError;

/// A link rendered inside a list element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkItem {
    pub href: String,
    pub label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl LinkItem {
    /// Link that opens in a new browsing context without sending a referrer.
    #[must_use]
    pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into(), target: "_blank", rel: "noreferrer" }
    }
}

/// Operations components perform on a single element.
///
/// Equality is identity: two handles are equal iff they refer to the same
/// element.
pub trait ElementHandle: Clone + PartialEq {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn remove_attr(&self, name: &str);

    fn has_class(&self, class: &str) -> bool;
    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, class: &str, on: bool);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn is_hidden(&self) -> bool;
    fn set_hidden(&self, hidden: bool);
    fn set_disabled(&self, disabled: bool);
    fn focus(&self);

    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    fn clear_children(&self);
    fn append_link_item(&self, link: &LinkItem);
}

/// Read access to the host page's structure.
pub trait Page {
    type Node: ElementHandle;

    /// The document root element (`<html>`).
    fn root(&self) -> Option<Self::Node>;
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Resolve a required anchor or report which one is missing.
///
/// # Errors
///
/// Returns [`MountError::Missing`] when `selector` matches nothing.
pub fn require<P: Page>(page: &P, component: &'static str, selector: &str) -> Result<P::Node, MountError> {
    page.query(selector).ok_or_else(|| MountError::missing(component, selector))
}

/// Resolve a required id anchor or report which one is missing.
///
/// # Errors
///
/// Returns [`MountError::Missing`] when no element carries `id`.
pub fn require_id<P: Page>(page: &P, component: &'static str, id: &str) -> Result<P::Node, MountError> {
    page.by_id(id).ok_or_else(|| MountError::missing(component, format!("#{id}")))
}

/// Resolve a non-empty set of anchors or report which selector is empty.
///
/// # Errors
///
/// Returns [`MountError::Missing`] when `selector` matches nothing.
pub fn require_all<P: Page>(
    page: &P,
    component: &'static str,
    selector: &str,
) -> Result<Vec<P::Node>, MountError> {
    let nodes = page.query_all(selector);
    if nodes.is_empty() {
        return Err(MountError::missing(component, selector));
    }
    Ok(nodes)
}
