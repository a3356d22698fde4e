//! In-memory element and page used by component tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use super::{ElementHandle, LinkItem, Page};

#[derive(Debug, Default)]
struct FakeState {
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    hidden: bool,
    disabled: bool,
    focus_count: usize,
    class_adds: usize,
    children: Vec<FakeNode>,
    links: Vec<LinkItem>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeNode(Rc<RefCell<FakeState>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_owned();
        self
    }

    pub fn with_hidden(self, hidden: bool) -> Self {
        self.0.borrow_mut().hidden = hidden;
        self
    }

    pub fn add_child(&self, child: &FakeNode) {
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn focus_count(&self) -> usize {
        self.0.borrow().focus_count
    }

    /// Number of times any class was newly added.
    pub fn class_adds(&self) -> usize {
        self.0.borrow().class_adds
    }

    pub fn links(&self) -> Vec<LinkItem> {
        self.0.borrow().links.clone()
    }
}

impl ElementHandle for FakeNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attr(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            if state.classes.insert(class.to_owned()) {
                state.class_adds += 1;
            }
        } else {
            state.classes.remove(class);
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn is_hidden(&self) -> bool {
        self.0.borrow().hidden
    }

    fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().hidden = hidden;
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn focus(&self) {
        self.0.borrow_mut().focus_count += 1;
    }

    fn contains(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        self.0.borrow().children.iter().any(|child| child.contains(other))
    }

    fn clear_children(&self) {
        let mut state = self.0.borrow_mut();
        state.children.clear();
        state.links.clear();
    }

    fn append_link_item(&self, link: &LinkItem) {
        self.0.borrow_mut().links.push(link.clone());
    }
}

/// Page whose selectors resolve to explicitly registered nodes.
#[derive(Default)]
pub struct FakePage {
    root: FakeNode,
    selectors: RefCell<HashMap<String, Vec<FakeNode>>>,
    ids: RefCell<HashMap<String, FakeNode>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_node(&self) -> FakeNode {
        self.root.clone()
    }

    /// Make `node` match `selector`; nodes carrying an `id` become reachable by id.
    pub fn register(&self, selector: &str, node: &FakeNode) {
        if let Some(id) = node.attr("id") {
            self.ids.borrow_mut().insert(id, node.clone());
        }
        self.selectors
            .borrow_mut()
            .entry(selector.to_owned())
            .or_default()
            .push(node.clone());
    }
}

impl Page for FakePage {
    type Node = FakeNode;

    fn root(&self) -> Option<FakeNode> {
        Some(self.root.clone())
    }

    fn query(&self, selector: &str) -> Option<FakeNode> {
        if let Some(id) = selector.strip_prefix('#') {
            return self.by_id(id);
        }
        self.selectors.borrow().get(selector).and_then(|nodes| nodes.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.selectors.borrow().get(selector).cloned().unwrap_or_default()
    }

    fn by_id(&self, id: &str) -> Option<FakeNode> {
        self.ids.borrow().get(id).cloned()
    }
}
