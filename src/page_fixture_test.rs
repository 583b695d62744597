//! Style-guide page built in the in-memory document, shared by unit tests.

use crate::config::InteractionConfig;
use crate::doc::{Document, Element, NodeId};
use crate::interactions::{Event, Interactions};

pub struct TabsFixture {
    pub container: NodeId,
    pub tablist: NodeId,
    pub wrappers: Vec<NodeId>,
    pub tabs: Vec<NodeId>,
    pub panels: Vec<NodeId>,
}

pub struct Page {
    pub doc: Document,
    pub dropdowns: Vec<NodeId>,
    pub triggers: Vec<NodeId>,
    pub default_tabs: TabsFixture,
    pub scoped_tabs: TabsFixture,
    pub upload_button: Option<NodeId>,
    pub modal: Option<NodeId>,
    pub backdrop: Option<NodeId>,
    pub close_button: Option<NodeId>,
    pub cancel_button: Option<NodeId>,
    pub label: Option<NodeId>,
    pub content_area: Option<NodeId>,
    pub action_area: Option<NodeId>,
    pub checkboxes: Vec<NodeId>,
    /// Checkbox outside the content area.
    pub stray_checkbox: NodeId,
    /// Text input inside the content area.
    pub text_input: NodeId,
}

impl Page {
    pub fn build() -> Self {
        Self::build_without(&[])
    }

    /// Build the page, leaving out the elements whose ids are listed.
    pub fn build_without(skip: &[&str]) -> Self {
        let mut doc = Document::new();
        let body = doc.root();
        let add = |doc: &mut Document, parent: NodeId, id: &str, element: Element| -> Option<NodeId> {
            if skip.iter().any(|skipped| *skipped == id) {
                None
            } else {
                Some(doc.append(parent, element.with_id(id)))
            }
        };

        let mut dropdowns = Vec::new();
        let mut triggers = Vec::new();
        for _ in 0..2 {
            let dropdown = doc.append(body, Element::new("div").with_class("slds-dropdown-trigger slds-dropdown-trigger_click"));
            let trigger = doc.append(dropdown, Element::new("button").with_class("slds-button slds-button_icon"));
            let menu = doc.append(dropdown, Element::new("div").with_class("slds-dropdown"));
            doc.append(menu, Element::new("ul").with_class("slds-dropdown__list").with_attr("role", "menu"));
            dropdowns.push(dropdown);
            triggers.push(trigger);
        }
        // Looks like a trigger but is not a direct child of the container.
        let hover = doc.append(body, Element::new("div").with_class("slds-dropdown-trigger_click"));
        let nested = doc.append(hover, Element::new("span"));
        doc.append(nested, Element::new("button").with_class("slds-button"));

        let default_tabs = build_tabs(&mut doc, body, "default", 3);
        let scoped_tabs = build_tabs(&mut doc, body, "scoped", 2);

        let upload_button = add(&mut doc, body, "upload-content-button", Element::new("button").with_class("slds-button"));
        let modal = add(&mut doc, body, "upload-content-modal", Element::new("section").with_class("slds-modal"));
        let backdrop = add(&mut doc, body, "modal-backdrop", Element::new("div").with_class("slds-backdrop"));
        let footer = modal.map_or(body, |modal| doc.append(modal, Element::new("footer")));
        let close_button = add(&mut doc, footer, "close-modal-button", Element::new("button"));
        let cancel_button = add(&mut doc, footer, "cancel-modal-button", Element::new("button"));

        let label = add(&mut doc, body, "items-selected-count", Element::new("span").with_text("0 Item(s) Selected"));
        let content_area = add(&mut doc, body, "content-area", Element::new("div").with_class("slds-col"));
        let action_area = add(&mut doc, body, "action-area", Element::new("div").with_class("slds-col slds-hidden"));
        let table = doc.append(content_area.unwrap_or(body), Element::new("table"));
        let mut checkboxes = Vec::new();
        for _ in 0..3 {
            let row = doc.append(table, Element::new("tr"));
            checkboxes.push(doc.append(row, Element::checkbox()));
        }
        let text_input = doc.append(table, Element::new("input").with_attr("type", "text"));
        let stray_checkbox = doc.append(body, Element::checkbox());

        Self {
            doc,
            dropdowns,
            triggers,
            default_tabs,
            scoped_tabs,
            upload_button,
            modal,
            backdrop,
            close_button,
            cancel_button,
            label,
            content_area,
            action_area,
            checkboxes,
            stray_checkbox,
            text_input,
        }
    }

    pub fn bind(&self) -> Interactions<NodeId> {
        self.bind_with(&InteractionConfig::default())
    }

    pub fn bind_with(&self, config: &InteractionConfig) -> Interactions<NodeId> {
        Interactions::bind(&self.doc, config)
    }

    pub fn click(&mut self, interactions: &mut Interactions<NodeId>, node: NodeId) {
        interactions
            .handle(&mut self.doc, &Event::Click(node))
            .expect("click should succeed");
    }

    /// Set the box's state and fire `change` through delegation.
    pub fn set_box(&mut self, interactions: &mut Interactions<NodeId>, node: NodeId, checked: bool) {
        self.doc.set_checked(node, checked);
        interactions
            .handle(&mut self.doc, &Event::Change(node))
            .expect("change should succeed");
    }

    pub fn has(&self, node: NodeId, class: &str) -> bool {
        self.doc.classes(node).iter().any(|c| c == class)
    }

    pub fn label_text(&self) -> &str {
        self.label.map_or("", |label| self.doc.text(label))
    }
}

fn build_tabs(doc: &mut Document, body: NodeId, variant: &str, count: usize) -> TabsFixture {
    let container = doc.append(body, Element::new("div").with_class(&format!("slds-tabs_{variant}")));
    let tablist = doc.append(
        container,
        Element::new("ul").with_class(&format!("slds-tabs_{variant}__nav")).with_attr("role", "tablist"),
    );
    let mut wrappers = Vec::new();
    let mut tabs = Vec::new();
    for i in 0..count {
        let mut item = Element::new("li").with_class(&format!("slds-tabs_{variant}__item")).with_attr("role", "presentation");
        if i == 0 {
            item = item.with_class("slds-active");
        }
        let wrapper = doc.append(tablist, item);
        let tab = doc.append(
            wrapper,
            Element::new("a")
                .with_class(&format!("slds-tabs_{variant}__link"))
                .with_attr("role", "tab")
                .with_attr("aria-controls", &format!("tab-{variant}-{i}")),
        );
        wrappers.push(wrapper);
        tabs.push(tab);
    }
    let mut panels = Vec::new();
    for i in 0..count {
        let state = if i == 0 { "slds-show" } else { "slds-hide" };
        panels.push(doc.append(
            container,
            Element::new("div")
                .with_id(&format!("tab-{variant}-{i}"))
                .with_class(&format!("slds-tabs_{variant}__content {state}"))
                .with_attr("role", "tabpanel"),
        ));
    }
    TabsFixture { container, tablist, wrappers, tabs, panels }
}
