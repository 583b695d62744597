//! Upload-content modal and its backdrop.
//!
//! Two phases only. `show` and `close` add or remove the open classes
//! unconditionally, so repeated clicks leave the pair where it already is.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::config::{ClassNames, ElementIds};
use crate::dom::Dom;
use crate::error::BindError;

const CONTROLLER: &str = "modal";

/// What a click on one of the modal's triggers does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Show,
    Close,
}

#[derive(Clone, Debug)]
pub struct ModalController<N> {
    modal: N,
    backdrop: N,
    open_trigger: N,
    close_trigger: N,
    cancel_trigger: N,
    modal_open_class: String,
    backdrop_open_class: String,
}

impl<N: Clone + PartialEq + std::fmt::Debug> ModalController<N> {
    /// Resolve all five elements by id.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] for the first id not found, in the
    /// order button, modal, backdrop, close, cancel.
    pub fn bind<D: Dom<Node = N>>(dom: &D, ids: &ElementIds, classes: &ClassNames) -> Result<Self, BindError> {
        let lookup = |id: &str| dom.element_by_id(id).ok_or_else(|| BindError::missing(CONTROLLER, id));
        let open_trigger = lookup(&ids.upload_button)?;
        let modal = lookup(&ids.upload_modal)?;
        let backdrop = lookup(&ids.modal_backdrop)?;
        let close_trigger = lookup(&ids.close_modal_button)?;
        let cancel_trigger = lookup(&ids.cancel_modal_button)?;
        log::debug!("modal: bound");
        Ok(Self {
            modal,
            backdrop,
            open_trigger,
            close_trigger,
            cancel_trigger,
            modal_open_class: classes.modal_open.clone(),
            backdrop_open_class: classes.backdrop_open.clone(),
        })
    }

    /// Trigger elements that need a click listener.
    pub fn triggers(&self) -> [&N; 3] {
        [&self.open_trigger, &self.close_trigger, &self.cancel_trigger]
    }

    /// Action bound to `node`, if it is one of the triggers. Show wins when a
    /// single element is wired as both.
    pub fn action_for(&self, node: &N) -> Option<ModalAction> {
        if node == &self.open_trigger {
            Some(ModalAction::Show)
        } else if node == &self.close_trigger || node == &self.cancel_trigger {
            Some(ModalAction::Close)
        } else {
            None
        }
    }

    pub fn apply<D: Dom<Node = N>>(&self, dom: &mut D, action: ModalAction) {
        match action {
            ModalAction::Show => self.show(dom),
            ModalAction::Close => self.close(dom),
        }
    }

    pub fn show<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.add_class(&self.modal, &self.modal_open_class);
        dom.add_class(&self.backdrop, &self.backdrop_open_class);
        log::debug!("modal: open");
    }

    pub fn close<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.remove_class(&self.modal, &self.modal_open_class);
        dom.remove_class(&self.backdrop, &self.backdrop_open_class);
        log::debug!("modal: closed");
    }

    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        dom.has_class(&self.modal, &self.modal_open_class)
    }
}
