use super::*;
use crate::doc::{Document, Element, NodeId};
use crate::page_fixture::{Page, TabsFixture};

const ACTIVE: &str = "slds-active";
const SHOW: &str = "slds-show";
const HIDE: &str = "slds-hide";

fn bind(page: &Page) -> TabController<NodeId> {
    TabController::bind(&page.doc, &InteractionConfig::default())
}

fn assert_selected(page: &Page, tabs: &TabsFixture, selected: usize) {
    for (i, wrapper) in tabs.wrappers.iter().enumerate() {
        assert_eq!(page.has(*wrapper, ACTIVE), i == selected, "wrapper {i}");
    }
    for (i, panel) in tabs.panels.iter().enumerate() {
        assert_eq!(page.has(*panel, SHOW), i == selected, "panel {i} shown");
        assert_eq!(page.has(*panel, HIDE), i != selected, "panel {i} hidden");
    }
}

// =============================================================
// Registry
// =============================================================

#[test]
fn registry_has_one_group_per_variant() {
    let page = Page::build();
    let controller = bind(&page);
    let groups = controller.groups();
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].variant, "default");
    assert_eq!(groups[0].tablist, page.default_tabs.tablist);
    assert_eq!(groups[0].wrappers, page.default_tabs.wrappers);
    assert_eq!(groups[0].panels, page.default_tabs.panels);
    assert_eq!(groups[0].tabs.len(), 3);

    assert_eq!(groups[1].variant, "scoped");
    assert_eq!(groups[1].tablist, page.scoped_tabs.tablist);
    assert_eq!(groups[1].tabs.len(), 2);
}

#[test]
fn registry_resolves_wrappers_and_panels() {
    let page = Page::build();
    let controller = bind(&page);
    let entry = &controller.groups()[0].tabs[1];
    assert_eq!(entry.tab, page.default_tabs.tabs[1]);
    assert_eq!(entry.wrapper, Some(page.default_tabs.wrappers[1]));
    assert_eq!(entry.panel_id.as_deref(), Some("tab-default-1"));
    assert_eq!(entry.panel, Some(page.default_tabs.panels[1]));
}

#[test]
fn unlisted_variant_is_not_bound() {
    let page = Page::build();
    let config = InteractionConfig { tab_variants: vec!["default".into()], ..InteractionConfig::default() };
    let controller = TabController::bind(&page.doc, &config);
    assert_eq!(controller.groups().len(), 1);
    assert!(!controller.owns(&page.scoped_tabs.tabs[0]));
}

#[test]
fn tab_outside_a_tablist_is_ignored() {
    let mut doc = Document::new();
    let container = doc.append(doc.root(), Element::new("div").with_class("slds-tabs_default"));
    let stray = doc.append(container, Element::new("a").with_attr("role", "tab"));
    let controller = TabController::bind(&doc, &InteractionConfig::default());
    assert!(controller.groups().is_empty());
    assert!(!controller.owns(&stray));
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_activates_tab_and_shows_its_panel() {
    let mut page = Page::build();
    let controller = bind(&page);
    let tab = page.default_tabs.tabs[2];
    assert_eq!(controller.on_tab_click(&mut page.doc, &tab), Ok(true));
    assert_selected(&page, &page.default_tabs, 2);
}

#[test]
fn last_click_wins() {
    let mut page = Page::build();
    let controller = bind(&page);
    let (first, second) = (page.default_tabs.tabs[1], page.default_tabs.tabs[0]);
    controller.on_tab_click(&mut page.doc, &first).unwrap();
    controller.on_tab_click(&mut page.doc, &second).unwrap();
    assert_selected(&page, &page.default_tabs, 0);
}

#[test]
fn repeated_click_is_stable() {
    let mut page = Page::build();
    let controller = bind(&page);
    let tab = page.default_tabs.tabs[1];
    controller.on_tab_click(&mut page.doc, &tab).unwrap();
    let once = page.doc.class_snapshot();
    controller.on_tab_click(&mut page.doc, &tab).unwrap();
    assert_eq!(page.doc.class_snapshot(), once);
}

#[test]
fn variants_are_isolated() {
    let mut page = Page::build();
    let controller = bind(&page);
    let scoped_before: Vec<Vec<String>> = page
        .scoped_tabs
        .wrappers
        .iter()
        .chain(&page.scoped_tabs.panels)
        .map(|node| page.doc.classes(*node).to_vec())
        .collect();

    for tab in page.default_tabs.tabs.clone() {
        controller.on_tab_click(&mut page.doc, &tab).unwrap();
    }

    let scoped_after: Vec<Vec<String>> = page
        .scoped_tabs
        .wrappers
        .iter()
        .chain(&page.scoped_tabs.panels)
        .map(|node| page.doc.classes(*node).to_vec())
        .collect();
    assert_eq!(scoped_before, scoped_after);
    assert!(page.has(page.scoped_tabs.container, "slds-tabs_scoped"));
}

#[test]
fn panel_reset_clears_stray_show_classes() {
    let mut page = Page::build();
    let controller = bind(&page);
    let panels = page.default_tabs.panels.clone();
    // Markup that declares two panels shown at once.
    page.doc.add_class(&panels[1], SHOW);
    page.doc.remove_class(&panels[1], HIDE);

    let tab = page.default_tabs.tabs[2];
    controller.on_tab_click(&mut page.doc, &tab).unwrap();
    assert_selected(&page, &page.default_tabs, 2);
}

#[test]
fn unknown_node_is_not_handled() {
    let mut page = Page::build();
    let controller = bind(&page);
    let before = page.doc.class_snapshot();
    let trigger = page.triggers[0];
    assert_eq!(controller.on_tab_click(&mut page.doc, &trigger), Ok(false));
    assert_eq!(page.doc.class_snapshot(), before);
}

// =============================================================
// Markup faults
// =============================================================

fn single_group(panel_ref: Option<&str>) -> (Document, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let container = doc.append(doc.root(), Element::new("div").with_class("slds-tabs_scoped"));
    let list = doc.append(container, Element::new("ul").with_attr("role", "tablist"));
    let wrapper = doc.append(list, Element::new("li").with_class(ACTIVE));
    let mut tab = Element::new("a").with_attr("role", "tab");
    if let Some(panel_ref) = panel_ref {
        tab = tab.with_attr("aria-controls", panel_ref);
    }
    let tab = doc.append(wrapper, tab);
    let panel = doc.append(container, Element::new("div").with_id("p").with_attr("role", "tabpanel").with_class(SHOW));
    (doc, wrapper, tab, panel)
}

#[test]
fn missing_panel_fails_after_reset() {
    let (mut doc, wrapper, tab, panel) = single_group(Some("nowhere"));
    let controller = TabController::bind(&doc, &InteractionConfig::default());
    let err = controller.on_tab_click(&mut doc, &tab).unwrap_err();
    assert_eq!(err, InteractionError::MissingPanel { panel_id: "nowhere".into() });
    assert!(doc.has_class(&wrapper, ACTIVE));
    assert!(doc.has_class(&panel, HIDE));
    assert!(!doc.has_class(&panel, SHOW));
}

#[test]
fn missing_panel_reference_is_reported() {
    let (mut doc, _, tab, _) = single_group(None);
    let controller = TabController::bind(&doc, &InteractionConfig::default());
    assert_eq!(controller.on_tab_click(&mut doc, &tab), Err(InteractionError::MissingPanelReference));
}

#[test]
fn panel_may_live_outside_the_group() {
    let (mut doc, _, tab, local_panel) = single_group(Some("remote"));
    let remote = doc.append(doc.root(), Element::new("div").with_id("remote").with_class(HIDE));
    let controller = TabController::bind(&doc, &InteractionConfig::default());
    controller.on_tab_click(&mut doc, &tab).unwrap();
    assert!(doc.has_class(&remote, SHOW));
    assert!(!doc.has_class(&remote, HIDE));
    assert!(doc.has_class(&local_panel, HIDE));
}
