//! Dropdown menus. At most one `.dropdown` carries `show` at a time.

use tracing::debug;

use crate::core::markers::{DROPDOWN_CLASS, OPEN_DROPDOWN, SHOWN_CLASS};
use crate::core::selector::Selector;
use crate::host::{Document, ElementId};

/// Opens, closes and toggles `.dropdown` containers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownController;

impl DropdownController {
    /// Mark `dropdown` open without touching the others.
    pub fn open<D: Document>(self, document: &mut D, dropdown: ElementId) {
        document.add_class(dropdown, SHOWN_CLASS);
    }

    /// Mark `dropdown` closed.
    pub fn close<D: Document>(self, document: &mut D, dropdown: ElementId) {
        document.remove_class(dropdown, SHOWN_CLASS);
    }

    /// Close `dropdown` if open; otherwise close every other dropdown and open it.
    /// Returns whether `dropdown` ends up open.
    pub fn toggle<D: Document>(self, document: &mut D, dropdown: ElementId) -> bool {
        if document.has_class(dropdown, SHOWN_CLASS) {
            self.close(document, dropdown);
            debug!(dropdown = dropdown.raw(), "dropdown closed");
            false
        } else {
            self.close_all(document);
            self.open(document, dropdown);
            debug!(dropdown = dropdown.raw(), "dropdown opened");
            true
        }
    }

    /// Close every open dropdown. Returns how many were closed.
    pub fn close_all<D: Document>(self, document: &mut D) -> usize {
        let open = document.query_document(&OPEN_DROPDOWN);
        for dropdown in &open {
            self.close(document, *dropdown);
        }
        open.len()
    }

    /// Toggle the dropdown enclosing a `[data-dropdown]` trigger.
    pub fn toggle_from<D: Document>(self, document: &mut D, trigger: ElementId) -> Option<bool> {
        let dropdown = document.closest(trigger, &Selector::Class(DROPDOWN_CLASS))?;
        Some(self.toggle(document, dropdown))
    }
}
