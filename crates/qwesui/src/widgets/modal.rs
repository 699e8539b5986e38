//! Modal dialogs: `show` class on the modal, `modal-open` on the body, focus shift.

use tracing::debug;

use crate::core::markers::{
    MODAL_CLASS, MODAL_OPEN_BODY_CLASS, MODAL_TRIGGER_ATTR, OPEN_MODAL, SHOWN_CLASS,
};
use crate::core::selector::Selector;
use crate::host::{Document, ElementId};

/// Shows and hides `.modal` elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalController;

impl ModalController {
    /// Show the modal with `modal_id` and focus its first focusable descendant.
    /// Unknown ids are a no-op.
    pub fn show<D: Document>(self, document: &mut D, modal_id: &str) -> Option<ElementId> {
        let Some(modal) = document.element_by_id(modal_id) else {
            debug!(modal_id, "modal target missing");
            return None;
        };
        document.add_class(modal, SHOWN_CLASS);
        if let Some(body) = document.body() {
            document.add_class(body, MODAL_OPEN_BODY_CLASS);
        }
        if let Some(first) = document.query_first(modal, &Selector::Focusable) {
            document.focus(first);
        }
        debug!(modal_id, "modal shown");
        Some(modal)
    }

    /// Hide `modal` and clear the body marker.
    pub fn hide<D: Document>(self, document: &mut D, modal: ElementId) {
        document.remove_class(modal, SHOWN_CLASS);
        if let Some(body) = document.body() {
            document.remove_class(body, MODAL_OPEN_BODY_CLASS);
        }
        debug!(modal = modal.raw(), "modal hidden");
    }

    /// Hide the modal with `modal_id`, if it exists.
    pub fn hide_by_id<D: Document>(self, document: &mut D, modal_id: &str) -> Option<ElementId> {
        let modal = document.element_by_id(modal_id)?;
        self.hide(document, modal);
        Some(modal)
    }

    /// Open the modal named by a `[data-modal]` trigger.
    pub fn open_from<D: Document>(self, document: &mut D, trigger: ElementId) -> Option<ElementId> {
        let modal_id = document.attribute(trigger, MODAL_TRIGGER_ATTR)?;
        self.show(document, &modal_id)
    }

    /// Hide the modal enclosing a close control or backdrop.
    pub fn close_from<D: Document>(self, document: &mut D, target: ElementId) -> Option<ElementId> {
        let modal = document.closest(target, &Selector::Class(MODAL_CLASS))?;
        self.hide(document, modal);
        Some(modal)
    }

    /// Hide the first shown modal (Escape handling).
    pub fn dismiss_open<D: Document>(self, document: &mut D) -> Option<ElementId> {
        let modal = document.query_document(&OPEN_MODAL).into_iter().next()?;
        self.hide(document, modal);
        Some(modal)
    }
}
