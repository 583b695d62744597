//! Checkbox selection counter.
//!
//! Keeps a running count of checked boxes as reported through
//! [`SelectionCounter::on_checkbox_change`], writes it to the label and shows
//! the action area while the count is positive.
//!
//! TRADE-OFFS
//! ==========
//! The count is never reconciled with the document. A box changed without a
//! matching call makes the label drift, and unmatched unchecks can push the
//! count below zero. Negative counts are logged, never corrected, and keep the
//! action area hidden.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::config::{CheckboxBinding, InteractionConfig};
use crate::dom::{self, Dom};
use crate::error::BindError;

const CONTROLLER: &str = "selection";

/// Label text for `count` selected items.
pub fn selected_label(count: i32) -> String {
    format!("{count} Item(s) Selected")
}

#[derive(Clone, Debug)]
pub struct SelectionCounter<N> {
    count: i32,
    label: N,
    action_area: N,
    content_area: Option<N>,
    binding: CheckboxBinding,
    hidden_class: String,
    content_selected_class: Option<String>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> SelectionCounter<N> {
    /// Resolve the label and action area (required) and the content area
    /// (optional; it scopes delegated events when present).
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] when the label or the action area
    /// is absent.
    pub fn bind<D: Dom<Node = N>>(dom: &D, config: &InteractionConfig) -> Result<Self, BindError> {
        let ids = &config.ids;
        let label = dom
            .element_by_id(&ids.items_selected_label)
            .ok_or_else(|| BindError::missing(CONTROLLER, &ids.items_selected_label))?;
        let action_area = dom
            .element_by_id(&ids.action_area)
            .ok_or_else(|| BindError::missing(CONTROLLER, &ids.action_area))?;
        let content_area = dom.element_by_id(&ids.content_area);
        if content_area.is_none() {
            log::debug!("selection: no '{}', delegating from the document root", ids.content_area);
        }
        Ok(Self {
            count: 0,
            label,
            action_area,
            content_area,
            binding: config.checkbox_binding,
            hidden_class: config.classes.hidden.clone(),
            content_selected_class: config.content_area_selected_class.clone(),
        })
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn binding(&self) -> CheckboxBinding {
        self.binding
    }

    /// Element that receives the delegated `change` listener.
    pub fn delegate_target(&self) -> Option<&N> {
        self.content_area.as_ref()
    }

    /// Whether a bubbled `change` from `target` belongs to this counter:
    /// delegated binding, a checkbox, and inside the content area if one
    /// exists.
    pub fn accepts<D: Dom<Node = N>>(&self, dom: &D, target: &N) -> bool {
        if self.binding != CheckboxBinding::Delegated || !dom::is_checkbox(dom, target) {
            return false;
        }
        self.content_area
            .as_ref()
            .map_or(true, |area| dom::is_inclusive_ancestor(dom, area, target))
    }

    /// Record one change of `checkbox` and refresh the label and action area.
    ///
    /// The action area is shown exactly while the count is positive, so a
    /// check that only climbs back to zero (or stays below it) keeps it hidden.
    pub fn on_checkbox_change<D: Dom<Node = N>>(&mut self, dom: &mut D, checkbox: &N) {
        self.count = if dom.is_checked(checkbox) {
            self.count.saturating_add(1)
        } else {
            self.count.saturating_sub(1)
        };
        dom.set_text(&self.label, &selected_label(self.count));
        if self.count > 0 {
            self.reveal(dom);
        } else {
            self.conceal(dom);
            if self.count < 0 {
                log::warn!("selection: count went negative ({})", self.count);
            }
        }
        log::debug!("selection: {} selected", self.count);
    }

    fn reveal<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.remove_class(&self.action_area, &self.hidden_class);
        if let (Some(area), Some(class)) = (&self.content_area, &self.content_selected_class) {
            dom.add_class(area, class);
        }
    }

    fn conceal<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.add_class(&self.action_area, &self.hidden_class);
        if let (Some(area), Some(class)) = (&self.content_area, &self.content_selected_class) {
            dom.remove_class(area, class);
        }
    }
}
