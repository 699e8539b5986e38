//! Delegated event envelopes and the actions they resolve to.
//!
//! # Design
//! - Host bindings translate native events into [`UiEvent`] values carrying element handles.
//! - Dispatch reports every [`WidgetAction`] it ran so hosts can react (e.g. suppress navigation).

use crate::host::ElementId;

/// Name of the key that dismisses an open modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Events delivered by the host's delegation listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A click whose origin is `target`.
    Click {
        /// Element the click originated on.
        target: ElementId,
    },
    /// A key press anywhere in the document.
    KeyDown {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Pointer entered `target`.
    PointerEnter {
        /// Element the pointer entered.
        target: ElementId,
    },
    /// Pointer left `target`.
    PointerLeave {
        /// Element the pointer left.
        target: ElementId,
    },
    /// A form submission originating on `target`.
    Submit {
        /// Submitted element.
        target: ElementId,
    },
}

impl UiEvent {
    /// Convenience constructor for key presses.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::KeyDown { .. } => "keydown",
            Self::PointerEnter { .. } => "mouseenter",
            Self::PointerLeave { .. } => "mouseleave",
            Self::Submit { .. } => "submit",
        }
    }
}

/// Widget behaviour selected for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetAction {
    /// `[data-modal]` click.
    OpenModal,
    /// `.modal-close` / `.modal-backdrop` click.
    CloseModal,
    /// Escape pressed while a modal may be open.
    EscapeModal,
    /// `[data-dropdown]` click.
    ToggleDropdown,
    /// Click outside every `.dropdown`.
    CloseDropdowns,
    /// `[data-tab]` click.
    SelectTab,
    /// `[data-theme-toggle]` click.
    ToggleTheme,
    /// `.toast-close` click.
    DismissToast,
    /// Pointer entered a `[data-tooltip]` element.
    ShowTooltip,
    /// Pointer left a `[data-tooltip]` element.
    HideTooltip,
    /// `.form` submitted.
    SubmitForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_constructor_wraps_name() {
        assert_eq!(
            UiEvent::key(ESCAPE_KEY),
            UiEvent::KeyDown {
                key: "Escape".to_string()
            }
        );
    }

    #[test]
    fn kinds_match_dom_event_names() {
        let target = ElementId::from_raw(1);
        assert_eq!(UiEvent::Click { target }.kind(), "click");
        assert_eq!(UiEvent::PointerEnter { target }.kind(), "mouseenter");
        assert_eq!(UiEvent::Submit { target }.kind(), "submit");
        assert_eq!(UiEvent::key("a").kind(), "keydown");
    }
}
