//! Prototype interactions for the design-system style guide.
//!
//! Dropdown menus, tabs, the upload-content modal and the checkbox selection
//! counter, driven by toggling state classes that the style guide's CSS
//! already understands. This is prototype code: no keyboard support, focus
//! management or ARIA bookkeeping beyond the classes it writes.
//!
//! The controllers are host-independent and run against any [`dom::Dom`].
//! With the `hydrate` feature the crate compiles to WebAssembly and exports
//! `start` / `start_with_config`, which bind everything against the live page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`interactions`] | Binds all controllers and routes events to them |
//! | [`dropdown`] | Click-activated dropdown menus |
//! | [`tabs`] | Default and scoped tab groups |
//! | [`modal`] | Upload-content modal and backdrop |
//! | [`selection`] | Checkbox selection counter and action area |
//! | [`dom`] | Host abstraction trait |
//! | [`doc`] | In-memory document host |
//! | [`config`] | Class vocabulary, element ids, binding options |
//! | [`error`] | Error types |
//! | [`disclaimer`] | Load-time "not for production" console lines |
//! | `web` | Browser host and wasm exports (`hydrate` only) |

pub mod config;
pub mod disclaimer;
pub mod doc;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod interactions;
pub mod modal;
pub mod selection;
pub mod tabs;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
#[path = "page_fixture_test.rs"]
pub(crate) mod page_fixture;

pub use config::InteractionConfig;
pub use interactions::{Event, Interactions};
