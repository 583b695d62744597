//! In-memory document: a tiny element tree implementing [`Dom`].
//!
//! This is the host used on native targets and by the test-suite. It models
//! exactly what the controllers read and write: tag names, attributes, an
//! ordered class list, text content and the `checked` flag of inputs.
//! Nodes are addressed by [`NodeId`] and never removed.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::BTreeMap;

use crate::dom::Dom;

/// Index of an element inside one [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Element description used when building a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    checked: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), ..Self::default() }
    }

    /// `<input type="checkbox">`.
    pub fn checkbox() -> Self {
        Self::new("input").with_attr("type", "checkbox")
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Add one or more whitespace-separated classes.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_owned());
            }
        }
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Element tree rooted at a `<body>` node.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: vec![NodeData { element: Element::new("body"), parent: None, children: Vec::new() }] }
    }

    /// The `<body>` node every document starts with.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `element` as the last child of `parent` and return its id.
    ///
    /// An unknown `parent` leaves the new node detached.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = match self.nodes.get_mut(parent.0) {
            Some(data) => {
                data.children.push(id);
                Some(parent)
            }
            None => None,
        };
        self.nodes.push(NodeData { element, parent, children: Vec::new() });
        id
    }

    /// Class list of `node` in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.data(node).map(|data| data.element.classes.as_slice()).unwrap_or_default()
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.data(node).map_or("", |data| data.element.text.as_str())
    }

    /// Change an input's `checked` flag without dispatching anything, the way
    /// a user click updates the box before `change` fires.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(data) = self.nodes.get_mut(node.0) {
            data.element.checked = checked;
        }
    }

    /// Every node's class list, for before/after comparisons.
    pub fn class_snapshot(&self) -> Vec<Vec<String>> {
        self.nodes.iter().map(|data| data.element.classes.clone()).collect()
    }

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).map(|data| &mut data.element)
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        let Some(data) = self.data(node) else {
            return;
        };
        for child in &data.children {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let mut all = vec![self.root()];
        self.collect_descendants(self.root(), &mut all);
        all.into_iter().filter(|node| self.has_class(node, class)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut all = vec![self.root()];
        self.collect_descendants(self.root(), &mut all);
        all.into_iter()
            .find(|node| self.data(*node).is_some_and(|data| data.element.attributes.get("id").is_some_and(|v| v == id)))
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.data(*node).and_then(|data| data.parent)
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.data(*node).map(|data| data.children.clone()).unwrap_or_default()
    }

    fn descendants(&self, node: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(*node, &mut out);
        out
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.data(*node).map(|data| data.element.tag.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let element = &self.data(*node)?.element;
        if name == "class" {
            return Some(element.classes.join(" "));
        }
        element.attributes.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(element) = self.element_mut(*node) {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_owned());
            }
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        if let Some(element) = self.element_mut(*node) {
            element.classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            self.has_class(node, class)
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(element) = self.element_mut(*node) {
            text.clone_into(&mut element.text);
        }
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.data(*node).is_some_and(|data| data.element.tag == "input" && data.element.checked)
    }
}
