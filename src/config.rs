//! Interaction configuration: class vocabulary, element ids and binding
//! options, deserialized from JSON with every field optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Prefix used by the default class vocabulary.
pub const DEFAULT_CLASS_PREFIX: &str = "slds-";

/// State and structural class names.
///
/// State classes are written by the controllers; structural classes are only
/// read when locating elements at bind time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Toggled on a dropdown trigger's parent.
    pub open: String,
    /// Set on the wrapper of the selected tab.
    pub active: String,
    pub panel_shown: String,
    pub panel_hidden: String,
    pub modal_open: String,
    pub backdrop_open: String,
    /// Present on the action area while nothing is selected.
    pub hidden: String,
    /// Container of click-activated dropdowns.
    pub dropdown_container: String,
    /// Trigger button directly inside a dropdown container.
    pub dropdown_trigger: String,
    /// Tabs container class is `<tabs_container_prefix><variant>`.
    pub tabs_container_prefix: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }
}

impl ClassNames {
    /// Vocabulary with every class name prefixed by `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            open: format!("{prefix}is-open"),
            active: format!("{prefix}active"),
            panel_shown: format!("{prefix}show"),
            panel_hidden: format!("{prefix}hide"),
            modal_open: format!("{prefix}fade-in-open"),
            backdrop_open: format!("{prefix}backdrop_open"),
            hidden: format!("{prefix}hidden"),
            dropdown_container: format!("{prefix}dropdown-trigger_click"),
            dropdown_trigger: format!("{prefix}button"),
            tabs_container_prefix: format!("{prefix}tabs_"),
        }
    }
}

/// Fixed element ids looked up at bind time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub upload_button: String,
    pub upload_modal: String,
    pub modal_backdrop: String,
    pub close_modal_button: String,
    pub cancel_modal_button: String,
    pub items_selected_label: String,
    pub content_area: String,
    pub action_area: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            upload_button: "upload-content-button".into(),
            upload_modal: "upload-content-modal".into(),
            modal_backdrop: "modal-backdrop".into(),
            close_modal_button: "close-modal-button".into(),
            cancel_modal_button: "cancel-modal-button".into(),
            items_selected_label: "items-selected-count".into(),
            content_area: "content-area".into(),
            action_area: "action-area".into(),
        }
    }
}

/// How checkbox `change` events reach the selection counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxBinding {
    /// One listener on the content area handles every checkbox inside it.
    #[default]
    Delegated,
    /// The host calls the exported handler per checkbox.
    Manual,
}

/// What happens when a controller cannot find its elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindPolicy {
    /// Stop at the first failure; later controllers stay unbound.
    #[default]
    Strict,
    /// Log the failure, skip that controller and keep going.
    Lenient,
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub classes: ClassNames,
    pub ids: ElementIds,
    /// Tab variants to bind, in order.
    pub tab_variants: Vec<String>,
    pub checkbox_binding: CheckboxBinding,
    pub bind_policy: BindPolicy,
    /// Added to the content area while the action area is visible.
    pub content_area_selected_class: Option<String>,
    pub show_disclaimer: bool,
    /// `log` level name for the browser console sink.
    pub log_level: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            ids: ElementIds::default(),
            tab_variants: vec!["default".into(), "scoped".into()],
            checkbox_binding: CheckboxBinding::default(),
            bind_policy: BindPolicy::default(),
            content_area_selected_class: None,
            show_disclaimer: true,
            log_level: "info".into(),
        }
    }
}

impl InteractionConfig {
    /// Parse a JSON object; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields,
    /// and [`ConfigError::LogLevel`] for an unknown level name.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Parsed [`InteractionConfig::log_level`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when the name is not a `log` level.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Container class for one tab variant, e.g. `slds-tabs_scoped`.
    pub fn tabs_container_class(&self, variant: &str) -> String {
        format!("{}{variant}", self.classes.tabs_container_prefix)
    }
}
