//! Submit feedback for `.form` elements.
//!
//! The submission itself is simulated: the control stays busy for a fixed delay and a
//! success toast follows. No request is made.

use tracing::debug;

use crate::core::config::FormSettings;
use crate::core::markers::{BUSY_CLASS, SUBMIT_CONTROL};
use crate::core::toast::ToastKind;
use crate::host::{Document, ElementId, Scheduler, TimerTask};
use crate::widgets::toast::{ToastController, ToastHandle};

/// Marks submit controls busy and reports completion through a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormController {
    delay_ms: u32,
    success_message: String,
}

impl FormController {
    /// Controller using the configured delay and message.
    #[must_use]
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            delay_ms: settings.simulated_delay_ms,
            success_message: settings.success_message.clone(),
        }
    }

    /// Disable the form's submit control and schedule completion.
    /// Returns the submit control, if the form has one.
    pub fn begin<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        form: ElementId,
    ) -> Option<ElementId> {
        let submit = document.query_first(form, &SUBMIT_CONTROL);
        if let Some(control) = submit {
            document.add_class(control, BUSY_CLASS);
            document.set_disabled(control, true);
        }
        scheduler.schedule_once(self.delay_ms, TimerTask::FormComplete { submit });
        debug!(form = form.raw(), has_submit = submit.is_some(), "form submission simulated");
        submit
    }

    /// Restore the submit control and announce success.
    pub fn complete<D: Document, T: Scheduler>(
        &self,
        document: &mut D,
        scheduler: &mut T,
        toasts: &ToastController,
        submit: Option<ElementId>,
    ) -> Option<ToastHandle> {
        if let Some(control) = submit {
            document.remove_class(control, BUSY_CLASS);
            document.set_disabled(control, false);
        }
        toasts.show(
            document,
            scheduler,
            &self.success_message,
            &ToastKind::Success,
            None,
        )
    }
}
