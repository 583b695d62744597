//! Error types for configuration, binding and interaction handling.

/// Error returned by [`crate::config::InteractionConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not valid JSON or a field has the wrong type.
    #[error("invalid interaction config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `log_level` does not name a `log` level.
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// A controller could not locate the elements it binds to.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No element carries the required id.
    #[error("{controller}: no element with id '{id}'")]
    MissingElement { controller: &'static str, id: String },
}

impl BindError {
    pub(crate) fn missing(controller: &'static str, id: &str) -> Self {
        Self::MissingElement { controller, id: id.to_owned() }
    }
}

/// Failure while handling a single event.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InteractionError {
    /// A tab names a panel that is not in the document. The active wrapper and
    /// panel reset have already been applied when this is returned.
    #[error("tab panel '{panel_id}' not found")]
    MissingPanel { panel_id: String },
    /// A tab has no `aria-controls` attribute.
    #[error("tab has no panel reference")]
    MissingPanelReference,
}
