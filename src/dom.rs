//! Host abstraction over the handful of DOM operations the controllers need.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers are written against [`Dom`] rather than `web_sys` so the same
//! code runs in the browser (`web::WebDom`) and against the in-memory
//! [`crate::doc::Document`] used by native hosts and tests.

/// Minimal DOM surface: structural reads at bind time, class/text writes at
/// interaction time.
pub trait Dom {
    /// Cheap handle to one element.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// All elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    /// Element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Direct element children, in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// All element descendants of `node` (excluding `node`), in document order.
    fn descendants(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Current `checked` state of an input; `false` for anything else.
    fn is_checked(&self, node: &Self::Node) -> bool;
}

/// `true` when `node` is an `<input type="checkbox">`.
pub fn is_checkbox<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.tag_name(node) == "input"
        && dom
            .attribute(node, "type")
            .is_some_and(|kind| kind.eq_ignore_ascii_case("checkbox"))
}

/// `true` when `node` has a `role` attribute equal to `role`.
pub fn has_role<D: Dom>(dom: &D, node: &D::Node, role: &str) -> bool {
    dom.attribute(node, "role").is_some_and(|value| value == role)
}

/// `true` when `ancestor` is `node` or one of its ancestors.
pub fn is_inclusive_ancestor<D: Dom>(dom: &D, ancestor: &D::Node, node: &D::Node) -> bool {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if &candidate == ancestor {
            return true;
        }
        current = dom.parent(&candidate);
    }
    false
}

/// Nearest strict ancestor of `node` matching `pred`.
pub fn closest_ancestor<D: Dom>(dom: &D, node: &D::Node, pred: impl Fn(&D::Node) -> bool) -> Option<D::Node> {
    let mut current = dom.parent(node);
    while let Some(candidate) = current {
        if pred(&candidate) {
            return Some(candidate);
        }
        current = dom.parent(&candidate);
    }
    None
}

/// Remove every listed class, then add `class`. Mirrors the reset-then-set
/// sequence used for panel visibility.
pub fn replace_classes<D: Dom>(dom: &mut D, node: &D::Node, remove: &[&str], class: &str) {
    for old in remove {
        dom.remove_class(node, old);
    }
    dom.add_class(node, class);
}
