//! Bootstrap and dispatch for the four controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Interactions`] is the host-independent core: it binds every controller
//! against a [`Dom`] once, then routes click and change events to whichever
//! controllers own the event's element. The browser layer (`web`) only wires
//! listeners to [`Interactions::click_targets`] and forwards events here.
//!
//! Controllers bind in a fixed order (dropdown, tabs, modal, selection).
//! Dropdown and tab binding cannot fail; a failure later in the order is
//! recorded, and under [`BindPolicy::Strict`] nothing after it binds.

#[cfg(test)]
#[path = "interactions_test.rs"]
mod interactions_test;

use crate::config::{BindPolicy, CheckboxBinding, InteractionConfig};
use crate::dom::Dom;
use crate::dropdown::DropdownController;
use crate::error::{BindError, InteractionError};
use crate::modal::ModalController;
use crate::selection::SelectionCounter;
use crate::tabs::TabController;

/// A host event addressed to one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<N> {
    /// `click` on the element the listener was attached to.
    Click(N),
    /// `change` whose target is the given element.
    Change(N),
}

#[derive(Debug)]
pub struct Interactions<N> {
    pub dropdown: DropdownController<N>,
    pub tabs: TabController<N>,
    pub modal: Option<ModalController<N>>,
    pub selection: Option<SelectionCounter<N>>,
    failures: Vec<BindError>,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Interactions<N> {
    /// Bind every controller in order, honouring `config.bind_policy`.
    pub fn bind<D: Dom<Node = N>>(dom: &D, config: &InteractionConfig) -> Self {
        let dropdown = DropdownController::bind(dom, &config.classes);
        let tabs = TabController::bind(dom, config);
        let mut failures = Vec::new();

        let modal = match ModalController::bind(dom, &config.ids, &config.classes) {
            Ok(modal) => Some(modal),
            Err(err) => {
                failures.push(err);
                None
            }
        };

        let selection = if config.bind_policy == BindPolicy::Strict && !failures.is_empty() {
            None
        } else {
            match SelectionCounter::bind(dom, config) {
                Ok(selection) => Some(selection),
                Err(err) => {
                    failures.push(err);
                    None
                }
            }
        };

        for err in &failures {
            match config.bind_policy {
                BindPolicy::Strict => log::error!("bind aborted: {err}"),
                BindPolicy::Lenient => log::error!("skipping controller: {err}"),
            }
        }

        Self { dropdown, tabs, modal, selection, failures }
    }

    /// Bind failures in the order they occurred.
    pub fn failures(&self) -> &[BindError] {
        &self.failures
    }

    /// Consume the first failure, if any.
    pub fn take_failure(&mut self) -> Option<BindError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(self.failures.remove(0))
        }
    }

    /// Elements that need a `click` listener, without duplicates.
    pub fn click_targets(&self) -> Vec<N> {
        let mut targets: Vec<N> = self.dropdown.triggers().to_vec();
        for group in self.tabs.groups() {
            targets.extend(group.tabs.iter().map(|entry| entry.tab.clone()));
        }
        if let Some(modal) = &self.modal {
            targets.extend(modal.triggers().into_iter().cloned());
        }
        let mut unique: Vec<N> = Vec::with_capacity(targets.len());
        for target in targets {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        unique
    }

    /// Element that should receive the delegated `change` listener: the
    /// content area, or `None` for the document root. Also `None` when the
    /// selection counter is unbound or manually wired; check
    /// [`Interactions::wants_delegated_change`] first.
    pub fn change_delegate(&self) -> Option<&N> {
        self.selection.as_ref().and_then(SelectionCounter::delegate_target)
    }

    pub fn wants_delegated_change(&self) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.binding() == CheckboxBinding::Delegated)
    }

    /// Route one event to every controller that owns its element.
    ///
    /// # Errors
    ///
    /// Returns the tab controller's error when a clicked tab's panel cannot be
    /// shown. Other controllers owning the same element still run.
    pub fn handle<D: Dom<Node = N>>(&mut self, dom: &mut D, event: &Event<N>) -> Result<(), InteractionError> {
        match event {
            Event::Click(node) => {
                if self.dropdown.owns(node) {
                    self.dropdown.on_trigger_click(dom, node);
                }
                let tab_result = self.tabs.on_tab_click(dom, node).map(|_| ());
                if let Some(modal) = &self.modal {
                    if let Some(action) = modal.action_for(node) {
                        modal.apply(dom, action);
                    }
                }
                tab_result
            }
            Event::Change(target) => {
                if let Some(selection) = self.selection.as_mut() {
                    if selection.accepts(&*dom, target) {
                        selection.on_checkbox_change(dom, target);
                    }
                }
                Ok(())
            }
        }
    }

    /// Manually wired checkbox handler; ignores the delegation filter.
    /// Returns the new count, or `None` when the counter is unbound or wired
    /// by delegation, where the bubbled `change` already counts the box.
    pub fn change_checkbox<D: Dom<Node = N>>(&mut self, dom: &mut D, checkbox: &N) -> Option<i32> {
        let selection = self.selection.as_mut()?;
        if selection.binding() != CheckboxBinding::Manual {
            log::warn!("change_checkbox ignored: checkbox binding is {:?}", selection.binding());
            return None;
        }
        selection.on_checkbox_change(dom, checkbox);
        Some(selection.count())
    }

    /// Current selection count, or `None` when the counter is unbound.
    pub fn selected_count(&self) -> Option<i32> {
        self.selection.as_ref().map(SelectionCounter::count)
    }
}
