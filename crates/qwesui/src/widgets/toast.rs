//! Toast notifications with auto-hide, exit delay and a periodic sweep.
//!
//! # Design
//! - A toast's own timer and the sweep both run; whichever fires first starts the hide.
//! - Every timer re-checks attachment, so late firings after a manual dismissal are no-ops.

use tracing::debug;

use crate::core::config::ToastSettings;
use crate::core::markers::{
    SHOWN_CLASS, TOAST_CLASS, TOAST_CLOSE_CLASS, TOAST_CLOSE_LABEL, TOAST_CONTENT_CLASS,
    TOAST_MESSAGE_CLASS, TOAST_PERSISTENT_CLASS, VISIBLE_TOAST,
};
use crate::core::selector::Selector;
use crate::core::toast::ToastKind;
use crate::host::{Document, ElementId, Scheduler, TimerId, TimerTask};

/// Handle to a created toast element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastHandle(ElementId);

impl ToastHandle {
    /// Wrap an existing toast element.
    #[must_use]
    pub const fn new(element: ElementId) -> Self {
        Self(element)
    }

    /// The toast root element.
    #[must_use]
    pub const fn element(self) -> ElementId {
        self.0
    }
}

/// Creates and retires `.toast` elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastController {
    default_duration_ms: u32,
    exit_delay_ms: u32,
    sweep_interval_ms: u32,
}

impl ToastController {
    /// Controller using the configured timings.
    #[must_use]
    pub const fn new(settings: &ToastSettings) -> Self {
        Self {
            default_duration_ms: settings.default_duration_ms,
            exit_delay_ms: settings.exit_delay_ms,
            sweep_interval_ms: settings.sweep_interval_ms,
        }
    }

    /// Lifetime applied when callers do not pass one.
    #[must_use]
    pub const fn default_duration_ms(&self) -> u32 {
        self.default_duration_ms
    }

    /// Arm the recurring sweep.
    pub fn start_sweep<T: Scheduler>(&self, scheduler: &mut T) -> TimerId {
        scheduler.schedule_repeating(self.sweep_interval_ms, TimerTask::ToastSweep)
    }

    /// Build a toast, attach it to the body and make it visible.
    ///
    /// `duration_ms` of `None` uses the default; `Some(0)` keeps the toast until dismissed
    /// or swept.
    pub fn show<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        message: &str,
        kind: &ToastKind,
        duration_ms: Option<u32>,
    ) -> Option<ToastHandle> {
        let body = document.body()?;
        let toast = document.create_element("div")?;
        let content = document.create_element("div")?;
        let text = document.create_element("span")?;
        let close = document.create_element("button")?;

        document.set_attribute(toast, "class", &format!("{TOAST_CLASS} {}", kind.class_name()));
        document.add_class(content, TOAST_CONTENT_CLASS);
        document.add_class(text, TOAST_MESSAGE_CLASS);
        document.set_text(text, message);
        document.add_class(close, TOAST_CLOSE_CLASS);
        document.set_text(close, TOAST_CLOSE_LABEL);
        document.append_child(content, text);
        document.append_child(content, close);
        document.append_child(toast, content);
        document.append_child(body, toast);

        document.flush_layout(toast);
        document.add_class(toast, SHOWN_CLASS);

        let duration = duration_ms.unwrap_or(self.default_duration_ms);
        if duration > 0 {
            scheduler.schedule_once(duration, TimerTask::ToastAutoHide(toast));
        }
        debug!(toast = toast.raw(), kind = kind.as_str(), duration, "toast shown");
        Some(ToastHandle(toast))
    }

    /// Start hiding `toast`: drop `show` now, detach after the exit delay.
    /// Returns `false` when the toast is no longer attached.
    pub fn hide<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        toast: ElementId,
    ) -> bool {
        if !document.is_attached(toast) {
            return false;
        }
        document.remove_class(toast, SHOWN_CLASS);
        scheduler.schedule_once(self.exit_delay_ms, TimerTask::ToastDetach(toast));
        debug!(toast = toast.raw(), "toast hiding");
        true
    }

    /// Remove a hidden toast once its exit transition has run.
    pub fn detach<D: Document>(&self, document: &mut D, toast: ElementId) -> bool {
        if !document.is_attached(toast) {
            return false;
        }
        document.remove(toast);
        debug!(toast = toast.raw(), "toast detached");
        true
    }

    /// Hide every visible toast not marked persistent. Returns how many were hidden.
    pub fn sweep<D: Document, T: Scheduler>(&self, document: &mut D, scheduler: &mut T) -> usize {
        let expired: Vec<_> = document
            .query_document(&VISIBLE_TOAST)
            .into_iter()
            .filter(|toast| !document.has_class(*toast, TOAST_PERSISTENT_CLASS))
            .collect();
        for toast in &expired {
            self.hide(document, scheduler, *toast);
        }
        if !expired.is_empty() {
            debug!(count = expired.len(), "toast sweep");
        }
        expired.len()
    }

    /// Hide every toast whose message text equals `message`.
    pub fn hide_matching<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        message: &str,
    ) -> usize {
        let matching: Vec<_> = document
            .query_document(&Selector::Class(TOAST_CLASS))
            .into_iter()
            .filter(|toast| {
                document
                    .query_first(*toast, &Selector::Class(TOAST_MESSAGE_CLASS))
                    .is_some_and(|span| document.text_content(span) == message)
            })
            .collect();
        matching
            .into_iter()
            .filter(|toast| self.hide(document, scheduler, *toast))
            .count()
    }

    /// Hide the toast enclosing a `.toast-close` control.
    pub fn dismiss_from<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        target: ElementId,
    ) -> bool {
        document
            .closest(target, &Selector::Class(TOAST_CLASS))
            .is_some_and(|toast| self.hide(document, scheduler, toast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{ManualScheduler, MemoryDocument, element};

    fn controller() -> ToastController {
        ToastController::new(&ToastSettings::default())
    }

    #[test]
    fn show_builds_markup_and_schedules_auto_hide() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toast = controller()
            .show(&mut document, &mut scheduler, "Saved", &ToastKind::Success, Some(2_000))
            .expect("toast")
            .element();

        assert_eq!(document.classes(toast), vec!["toast", "toast-success", "show"]);
        assert_eq!(document.layout_flushes(), 1);
        let message = document
            .query_first(toast, &Selector::Class("toast-message"))
            .expect("message");
        assert_eq!(document.text_content(message), "Saved");
        assert!(
            document
                .query_first(toast, &Selector::Class("toast-close"))
                .is_some()
        );
        assert_eq!(scheduler.pop_due(1_999), None);
        assert_eq!(scheduler.pop_due(2_000), Some(TimerTask::ToastAutoHide(toast)));
    }

    #[test]
    fn zero_duration_schedules_nothing() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        controller()
            .show(&mut document, &mut scheduler, "Sticky", &ToastKind::Info, Some(0))
            .expect("toast");
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn message_is_text_not_markup() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toast = controller()
            .show(&mut document, &mut scheduler, "<b>bold</b>", &ToastKind::Info, None)
            .expect("toast")
            .element();
        assert!(document.query_first(toast, &Selector::Tag("b")).is_none());
        assert!(document.text_content(toast).starts_with("<b>bold</b>"));
    }

    #[test]
    fn hide_then_detach_and_late_timers_are_no_ops() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toasts = controller();
        let toast = toasts
            .show(&mut document, &mut scheduler, "Bye", &ToastKind::Info, Some(0))
            .expect("toast")
            .element();

        assert!(toasts.hide(&mut document, &mut scheduler, toast));
        assert!(!document.has_class(toast, "show"));
        assert!(document.is_attached(toast));
        assert!(toasts.detach(&mut document, toast));
        assert!(!toasts.detach(&mut document, toast));
        assert!(!toasts.hide(&mut document, &mut scheduler, toast));
    }

    #[test]
    fn sweep_skips_persistent_and_hidden_toasts() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toasts = controller();
        let pinned = document.mount_in_body(
            element("div").class("toast").class("toast-persistent").class("show"),
        );
        let hidden = document.mount_in_body(element("div").class("toast"));
        let plain = toasts
            .show(&mut document, &mut scheduler, "Plain", &ToastKind::Info, Some(0))
            .expect("toast")
            .element();

        assert_eq!(toasts.sweep(&mut document, &mut scheduler), 1);
        assert!(document.has_class(pinned, "show"));
        assert!(!document.has_class(plain, "show"));
        assert!(!document.has_class(hidden, "show"));
    }

    #[test]
    fn hide_matching_uses_message_text() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toasts = controller();
        let kept = toasts
            .show(&mut document, &mut scheduler, "Keep", &ToastKind::Info, Some(0))
            .expect("toast")
            .element();
        for _ in 0..2 {
            toasts.show(&mut document, &mut scheduler, "Drop", &ToastKind::Error, Some(0));
        }
        assert_eq!(toasts.hide_matching(&mut document, &mut scheduler, "Drop"), 2);
        assert!(document.has_class(kept, "show"));
    }

    #[test]
    fn close_control_dismisses_enclosing_toast() {
        let mut document = MemoryDocument::new();
        let mut scheduler = ManualScheduler::new();
        let toasts = controller();
        let toast = toasts
            .show(&mut document, &mut scheduler, "Hi", &ToastKind::Info, Some(0))
            .expect("toast")
            .element();
        let close = document
            .query_first(toast, &Selector::Class("toast-close"))
            .expect("close");
        assert!(toasts.dismiss_from(&mut document, &mut scheduler, close));
        assert!(!document.has_class(toast, "show"));
    }
}
