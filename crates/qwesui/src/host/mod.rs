//! Host environment seams: document tree, preference store and timers.
//!
//! # Design
//! - Controllers are written against these traits only; the browser binding and the
//!   in-memory host both implement them.
//! - Element handles are opaque and copyable. A handle that no longer resolves makes
//!   every operation on it a no-op.
//! - Deferred work is data ([`TimerTask`]) delivered back to the owning instance, so no
//!   callback ever holds a reference into controller state.

pub mod memory;

use crate::core::geometry::Rect;
use crate::core::selector::Selector;
use thiserror::Error;

/// Opaque handle to an element owned by the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a host-assigned identifier.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Host-assigned identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Document-like tree the controllers mutate.
pub trait Document {
    /// The document element (`<html>`), carrier of the theme attribute.
    fn root(&self) -> Option<ElementId>;
    /// The body, parent of created tooltips and toasts.
    fn body(&self) -> Option<ElementId>;
    /// Attached element with the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;
    /// Whether `element` itself matches `selector`.
    fn matches(&self, element: ElementId, selector: &Selector<'_>) -> bool;
    /// `element` or its nearest ancestor matching `selector`.
    fn closest(&self, element: ElementId, selector: &Selector<'_>) -> Option<ElementId>;
    /// Descendants of `scope` matching `selector`, in document order.
    fn query_all(&self, scope: ElementId, selector: &Selector<'_>) -> Vec<ElementId>;

    /// First descendant of `scope` matching `selector`.
    fn query_first(&self, scope: ElementId, selector: &Selector<'_>) -> Option<ElementId> {
        self.query_all(scope, selector).into_iter().next()
    }

    /// Every element in the document matching `selector`.
    fn query_document(&self, selector: &Selector<'_>) -> Vec<ElementId> {
        self.root()
            .map(|root| self.query_all(root, selector))
            .unwrap_or_default()
    }

    /// Attribute value, if present.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;
    /// Set an attribute. Setting `class` replaces the class list.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
    /// Class membership.
    fn has_class(&self, element: ElementId, class: &str) -> bool;
    /// Add a class (idempotent).
    fn add_class(&mut self, element: ElementId, class: &str);
    /// Remove a class (idempotent).
    fn remove_class(&mut self, element: ElementId, class: &str);
    /// Concatenated text of the element and its descendants.
    fn text_content(&self, element: ElementId) -> String;
    /// Replace the element's content with a text node.
    fn set_text(&mut self, element: ElementId, text: &str);
    /// Set an inline style property.
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);
    /// Enable or disable a form control.
    fn set_disabled(&mut self, element: ElementId, disabled: bool);
    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Option<ElementId>;
    /// Append `child` as the last child of `parent`, moving it if already attached.
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    /// Detach `element` from the tree.
    fn remove(&mut self, element: ElementId);
    /// Whether `element` is connected to the document.
    fn is_attached(&self, element: ElementId) -> bool;
    /// Move keyboard focus to `element`.
    fn focus(&mut self, element: ElementId);
    /// Viewport-relative bounds.
    fn bounding_rect(&self, element: ElementId) -> Rect;
    /// Force style/layout so a following class change transitions.
    fn flush_layout(&mut self, element: ElementId);
    /// Ambient `prefers-color-scheme: dark` signal.
    fn prefers_dark_scheme(&self) -> bool;
}

/// Failure reported by a [`PreferenceStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The store could not be reached at all.
    #[error("preference store unavailable")]
    Unavailable,
    /// A read failed.
    #[error("preference read failed")]
    ReadFailed {
        /// Key being read.
        key: String,
        /// Host-provided detail.
        detail: String,
    },
    /// A write was rejected (quota, privacy mode).
    #[error("preference write rejected")]
    WriteRejected {
        /// Key being written.
        key: String,
        /// Host-provided detail.
        detail: String,
    },
}

/// Key-value store for the theme preference.
pub trait PreferenceStore {
    /// Stored value, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write is rejected.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Identifier of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Deferred work delivered back to [`crate::QwesUi::fire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTask {
    /// A toast's own lifetime elapsed.
    ToastAutoHide(ElementId),
    /// A hidden toast finished its exit transition.
    ToastDetach(ElementId),
    /// Periodic sweep over visible, non-persistent toasts.
    ToastSweep,
    /// Simulated form submission finished.
    FormComplete {
        /// Submit control to restore, if the form had one.
        submit: Option<ElementId>,
    },
}

/// Host timer facility. Timers are never cancelled; tasks re-check state when they fire.
pub trait Scheduler {
    /// Deliver `task` once after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u32, task: TimerTask) -> TimerId;
    /// Deliver `task` every `period_ms`.
    fn schedule_repeating(&mut self, period_ms: u32, task: TimerTask) -> TimerId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_round_trips_raw_value() {
        let id = ElementId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert!(ElementId::from_raw(1) < ElementId::from_raw(2));
    }

    #[test]
    fn storage_errors_have_stable_messages() {
        let err = StorageError::WriteRejected {
            key: "qwesui-theme".to_string(),
            detail: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "preference write rejected");
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "preference store unavailable"
        );
    }
}
