//! Tabs with single-active-tab-per-group semantics.
//!
//! DESIGN
//! ======
//! Structure is resolved once at bind time into a registry of [`TabGroup`]s,
//! one per tab-list. A click only consults the registry:
//!
//! 1. clear the active class from every `li` wrapper of the group;
//! 2. set it on the clicked tab's wrapper;
//! 3. hide every panel in the group's container;
//! 4. show the panel named by the tab's `aria-controls`.
//!
//! Reset always precedes set. Groups never touch each other, so the default
//! and scoped variants are isolated by construction.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::config::InteractionConfig;
use crate::dom::{self, Dom};
use crate::error::InteractionError;

pub const ROLE_TAB: &str = "tab";
pub const ROLE_TABLIST: &str = "tablist";
pub const ROLE_TABPANEL: &str = "tabpanel";
pub const PANEL_REFERENCE_ATTR: &str = "aria-controls";

/// One tab and what it drives.
#[derive(Clone, Debug)]
pub struct TabEntry<N> {
    pub tab: N,
    /// Immediate parent that carries the active class.
    pub wrapper: Option<N>,
    /// Value of `aria-controls`, if any.
    pub panel_id: Option<String>,
    /// Panel resolved from `panel_id` at bind time.
    pub panel: Option<N>,
}

/// All tabs sharing one tab-list.
#[derive(Clone, Debug)]
pub struct TabGroup<N> {
    pub variant: String,
    pub tablist: N,
    /// Every `li` in the tab-list.
    pub wrappers: Vec<N>,
    /// Every tab panel in the tab-list's container.
    pub panels: Vec<N>,
    pub tabs: Vec<TabEntry<N>>,
}

#[derive(Clone, Debug)]
pub struct TabController<N> {
    groups: Vec<TabGroup<N>>,
    active_class: String,
    shown_class: String,
    hidden_class: String,
}

impl<N: Clone + PartialEq + std::fmt::Debug> TabController<N> {
    /// Build the registry for every configured variant.
    pub fn bind<D: Dom<Node = N>>(dom: &D, config: &InteractionConfig) -> Self {
        let mut groups: Vec<TabGroup<N>> = Vec::new();
        for variant in &config.tab_variants {
            let container_class = config.tabs_container_class(variant);
            for container in dom.elements_with_class(&container_class) {
                for tab in tabs_in_container(dom, &container) {
                    register_tab(dom, &mut groups, variant, tab);
                }
            }
        }
        for group in &groups {
            log::debug!(
                "tabs: bound {} tab(s), {} panel(s) in {} group",
                group.tabs.len(),
                group.panels.len(),
                group.variant
            );
        }
        Self {
            groups,
            active_class: config.classes.active.clone(),
            shown_class: config.classes.panel_shown.clone(),
            hidden_class: config.classes.panel_hidden.clone(),
        }
    }

    pub fn groups(&self) -> &[TabGroup<N>] {
        &self.groups
    }

    pub fn owns(&self, node: &N) -> bool {
        self.locate(node).is_some()
    }

    /// Activate `tab` within its group. Returns `Ok(false)` when `tab` is not
    /// a bound tab.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::MissingPanel`] or
    /// [`InteractionError::MissingPanelReference`] when the tab's panel cannot
    /// be shown; the wrapper and panel resets have been applied by then.
    pub fn on_tab_click<D: Dom<Node = N>>(&self, dom: &mut D, tab: &N) -> Result<bool, InteractionError> {
        let Some((group, entry)) = self.locate(tab) else {
            return Ok(false);
        };

        for wrapper in &group.wrappers {
            dom.remove_class(wrapper, &self.active_class);
        }
        if let Some(wrapper) = &entry.wrapper {
            dom.add_class(wrapper, &self.active_class);
        }

        let panel_classes = [self.shown_class.as_str(), self.hidden_class.as_str()];
        for panel in &group.panels {
            dom::replace_classes(dom, panel, &panel_classes, &self.hidden_class);
        }

        let Some(panel_id) = &entry.panel_id else {
            log::warn!("tabs: {tab:?} has no {PANEL_REFERENCE_ATTR}");
            return Err(InteractionError::MissingPanelReference);
        };
        let Some(panel) = &entry.panel else {
            log::warn!("tabs: panel '{panel_id}' not found");
            return Err(InteractionError::MissingPanel { panel_id: panel_id.clone() });
        };
        dom::replace_classes(dom, panel, &panel_classes, &self.shown_class);
        log::debug!("tabs: {} group now shows '{panel_id}'", group.variant);
        Ok(true)
    }

    fn locate(&self, node: &N) -> Option<(&TabGroup<N>, &TabEntry<N>)> {
        self.groups
            .iter()
            .find_map(|group| group.tabs.iter().find(|entry| &entry.tab == node).map(|entry| (group, entry)))
    }
}

/// `[role=tablist] [role=tab]` below `container`, in document order.
fn tabs_in_container<D: Dom>(dom: &D, container: &D::Node) -> Vec<D::Node> {
    let mut tabs: Vec<D::Node> = Vec::new();
    for tablist in dom.descendants(container) {
        if !dom::has_role(dom, &tablist, ROLE_TABLIST) {
            continue;
        }
        for tab in dom.descendants(&tablist) {
            if dom::has_role(dom, &tab, ROLE_TAB) && !tabs.contains(&tab) {
                tabs.push(tab);
            }
        }
    }
    tabs
}

fn register_tab<D: Dom>(dom: &D, groups: &mut Vec<TabGroup<D::Node>>, variant: &str, tab: D::Node) {
    let Some(tablist) = dom::closest_ancestor(dom, &tab, |node| dom::has_role(dom, node, ROLE_TABLIST)) else {
        return;
    };
    if groups.iter().any(|group| group.tabs.iter().any(|entry| entry.tab == tab)) {
        return;
    }

    let panel_id = dom.attribute(&tab, PANEL_REFERENCE_ATTR);
    let panel = panel_id.as_deref().and_then(|id| dom.element_by_id(id));
    if panel.is_none() {
        log::warn!("tabs: {tab:?} references missing panel {panel_id:?}");
    }
    let entry = TabEntry { wrapper: dom.parent(&tab), tab, panel_id, panel };

    if let Some(group) = groups.iter_mut().find(|group| group.tablist == tablist) {
        group.tabs.push(entry);
        return;
    }

    let wrappers = dom
        .descendants(&tablist)
        .into_iter()
        .filter(|node| dom.tag_name(node) == "li")
        .collect();
    let panels = dom
        .parent(&tablist)
        .map(|container| {
            dom.descendants(&container)
                .into_iter()
                .filter(|node| dom::has_role(dom, node, ROLE_TABPANEL))
                .collect()
        })
        .unwrap_or_default();
    groups.push(TabGroup { variant: variant.to_owned(), tablist, wrappers, panels, tabs: vec![entry] });
}
