//! Click-activated dropdown menus.
//!
//! Every trigger button sitting directly inside a dropdown container toggles
//! the open class on its parent. Dropdowns are independent: opening one never
//! closes another.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::config::ClassNames;
use crate::dom::Dom;

#[derive(Clone, Debug)]
pub struct DropdownController<N> {
    triggers: Vec<N>,
    open_class: String,
}

impl<N: Clone + PartialEq + std::fmt::Debug> DropdownController<N> {
    /// Locate `.<container> > .<trigger>` elements. Finding none is valid.
    pub fn bind<D: Dom<Node = N>>(dom: &D, classes: &ClassNames) -> Self {
        let mut triggers = Vec::new();
        for container in dom.elements_with_class(&classes.dropdown_container) {
            for child in dom.children(&container) {
                if dom.has_class(&child, &classes.dropdown_trigger) && !triggers.contains(&child) {
                    triggers.push(child);
                }
            }
        }
        log::debug!("dropdown: bound {} trigger(s)", triggers.len());
        Self { triggers, open_class: classes.open.clone() }
    }

    pub fn triggers(&self) -> &[N] {
        &self.triggers
    }

    pub fn owns(&self, node: &N) -> bool {
        self.triggers.contains(node)
    }

    /// Toggle the open class on the trigger's parent. Returns the new open
    /// state, or `None` for a detached trigger.
    pub fn on_trigger_click<D: Dom<Node = N>>(&self, dom: &mut D, trigger: &N) -> Option<bool> {
        let parent = dom.parent(trigger)?;
        let open = dom.toggle_class(&parent, &self.open_class);
        log::debug!("dropdown: {parent:?} open={open}");
        Some(open)
    }
}
