//! Markup conventions and the click routing table.
//!
//! # Design
//! - Every class/attribute the library reacts to is named here once.
//! - [`CLICK_BINDINGS`] maps marker selectors to [`WidgetAction`] variants; it is walked
//!   in order, so earlier handlers observe state before later ones.

use crate::core::events::WidgetAction;
use crate::core::selector::Selector;
use crate::host::{Document, ElementId};

/// Class marking a visible modal, dropdown, tooltip or toast.
pub const SHOWN_CLASS: &str = "show";
/// Class marking the active tab label and panel.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute on any element that flips the theme when clicked.
pub const THEME_TOGGLE_ATTR: &str = "data-theme-toggle";

/// Attribute whose value names the modal to open.
pub const MODAL_TRIGGER_ATTR: &str = "data-modal";
/// Class on modal roots.
pub const MODAL_CLASS: &str = "modal";
/// Class on controls that close their modal.
pub const MODAL_CLOSE_CLASS: &str = "modal-close";
/// Class on the modal backdrop.
pub const MODAL_BACKDROP_CLASS: &str = "modal-backdrop";
/// Class added to the body while a modal is shown.
pub const MODAL_OPEN_BODY_CLASS: &str = "modal-open";

/// Class on dropdown containers.
pub const DROPDOWN_CLASS: &str = "dropdown";
/// Attribute on the control that toggles its dropdown.
pub const DROPDOWN_TRIGGER_ATTR: &str = "data-dropdown";

/// Class on tab containers (scoping boundary).
pub const TABS_CLASS: &str = "tabs";
/// Class on tab labels.
pub const TAB_CLASS: &str = "tab";
/// Class on tab panels.
pub const TAB_PANEL_CLASS: &str = "tab-content";
/// Attribute carrying a label's tab identifier.
pub const TAB_TRIGGER_ATTR: &str = "data-tab";
/// Attribute carrying a panel's tab identifier.
pub const TAB_PANEL_ATTR: &str = "data-tab-content";

/// Attribute holding tooltip text.
pub const TOOLTIP_TEXT_ATTR: &str = "data-tooltip";
/// Attribute holding tooltip placement.
pub const TOOLTIP_POSITION_ATTR: &str = "data-tooltip-position";
/// Class on created tooltip elements.
pub const TOOLTIP_CLASS: &str = "tooltip";

/// Class on toast roots.
pub const TOAST_CLASS: &str = "toast";
/// Class exempting a toast from the periodic sweep.
pub const TOAST_PERSISTENT_CLASS: &str = "toast-persistent";
/// Class on the toast dismiss control.
pub const TOAST_CLOSE_CLASS: &str = "toast-close";
/// Class on the toast body wrapper.
pub const TOAST_CONTENT_CLASS: &str = "toast-content";
/// Class on the toast message span.
pub const TOAST_MESSAGE_CLASS: &str = "toast-message";
/// Text of the dismiss control.
pub const TOAST_CLOSE_LABEL: &str = "\u{d7}";

/// Class on forms that get submit feedback.
pub const FORM_CLASS: &str = "form";
/// Class marking a busy submit control.
pub const BUSY_CLASS: &str = "btn-loading";

/// `.modal.show`
pub const OPEN_MODAL: Selector<'static> = Selector::AllClasses(&[MODAL_CLASS, SHOWN_CLASS]);
/// `.dropdown.show`
pub const OPEN_DROPDOWN: Selector<'static> =
    Selector::AllClasses(&[DROPDOWN_CLASS, SHOWN_CLASS]);
/// `.toast.show`
pub const VISIBLE_TOAST: Selector<'static> = Selector::AllClasses(&[TOAST_CLASS, SHOWN_CLASS]);
/// `[type="submit"]`
pub const SUBMIT_CONTROL: Selector<'static> = Selector::AttrEq("type", "submit");
/// `[data-tooltip]`
pub const TOOLTIP_TRIGGER: Selector<'static> = Selector::Attr(TOOLTIP_TEXT_ATTR);
/// `.form`
pub const FORM: Selector<'static> = Selector::Class(FORM_CLASS);

/// Condition a click target must satisfy for a binding to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Target itself matches the selector.
    Matches(Selector<'static>),
    /// Target matches any of the selectors.
    MatchesAny(&'static [Selector<'static>]),
    /// Target is not inside (or equal to) an element matching the selector.
    OutsideOf(Selector<'static>),
}

impl Trigger {
    /// Evaluate against the current document state.
    #[must_use]
    pub fn fires<D: Document>(&self, document: &D, target: ElementId) -> bool {
        match self {
            Self::Matches(selector) => document.matches(target, selector),
            Self::MatchesAny(selectors) => selectors
                .iter()
                .any(|selector| document.matches(target, selector)),
            Self::OutsideOf(selector) => document.closest(target, selector).is_none(),
        }
    }
}

/// One row of the click routing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickBinding {
    /// Condition on the click target.
    pub trigger: Trigger,
    /// Behaviour to run when it holds.
    pub action: WidgetAction,
}

/// Click routing table, in registration order.
pub const CLICK_BINDINGS: &[ClickBinding] = &[
    ClickBinding {
        trigger: Trigger::Matches(Selector::Attr(MODAL_TRIGGER_ATTR)),
        action: WidgetAction::OpenModal,
    },
    ClickBinding {
        trigger: Trigger::MatchesAny(&[
            Selector::Class(MODAL_CLOSE_CLASS),
            Selector::Class(MODAL_BACKDROP_CLASS),
        ]),
        action: WidgetAction::CloseModal,
    },
    ClickBinding {
        trigger: Trigger::Matches(Selector::Attr(DROPDOWN_TRIGGER_ATTR)),
        action: WidgetAction::ToggleDropdown,
    },
    ClickBinding {
        trigger: Trigger::OutsideOf(Selector::Class(DROPDOWN_CLASS)),
        action: WidgetAction::CloseDropdowns,
    },
    ClickBinding {
        trigger: Trigger::Matches(Selector::Attr(TAB_TRIGGER_ATTR)),
        action: WidgetAction::SelectTab,
    },
    ClickBinding {
        trigger: Trigger::Matches(Selector::Attr(THEME_TOGGLE_ATTR)),
        action: WidgetAction::ToggleTheme,
    },
    ClickBinding {
        trigger: Trigger::Matches(Selector::Class(TOAST_CLOSE_CLASS)),
        action: WidgetAction::DismissToast,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_table_keeps_registration_order() {
        let actions: Vec<_> = CLICK_BINDINGS.iter().map(|binding| binding.action).collect();
        assert_eq!(
            actions,
            vec![
                WidgetAction::OpenModal,
                WidgetAction::CloseModal,
                WidgetAction::ToggleDropdown,
                WidgetAction::CloseDropdowns,
                WidgetAction::SelectTab,
                WidgetAction::ToggleTheme,
                WidgetAction::DismissToast,
            ]
        );
    }

    #[test]
    fn compound_selectors_render_expected_css() {
        assert_eq!(OPEN_MODAL.to_css(), ".modal.show");
        assert_eq!(OPEN_DROPDOWN.to_css(), ".dropdown.show");
        assert_eq!(SUBMIT_CONTROL.to_css(), r#"[type="submit"]"#);
    }
}
