//! The coordinating instance: owns the host handles and the widget controllers.
//!
//! # Design
//! - Hosts construct one [`QwesUi`] per document and feed it delegated events through
//!   [`QwesUi::dispatch`] and timer deliveries through [`QwesUi::fire`].
//! - Click routing walks [`CLICK_BINDINGS`] in order, re-evaluating each trigger after
//!   the previous handler ran.
//! - Programmatic handles borrow the instance mutably for the duration of a call chain.

use tracing::{debug, trace};

use crate::core::config::{ConfigError, UiConfig};
use crate::core::events::{ESCAPE_KEY, UiEvent, WidgetAction};
use crate::core::markers::{CLICK_BINDINGS, FORM, TOOLTIP_TRIGGER};
use crate::core::theme::ThemeMode;
use crate::core::toast::ToastKind;
use crate::host::memory::ManualScheduler;
use crate::host::{Document, ElementId, PreferenceStore, Scheduler, TimerTask};
use crate::widgets::{
    DropdownController, FormController, ModalController, TabController, TabSelection,
    ThemeController, ToastController, ToastHandle, TooltipController,
};

/// Library surface version.
pub const VERSION: &str = "1.0.0";

/// Widget behaviours bound to one document.
#[derive(Debug)]
pub struct QwesUi<D, S, T> {
    document: D,
    storage: S,
    scheduler: T,
    config: UiConfig,
    theme: ThemeController,
    modals: ModalController,
    dropdowns: DropdownController,
    tabs: TabController,
    tooltips: TooltipController,
    toasts: ToastController,
    forms: FormController,
}

impl<D: Document, S: PreferenceStore, T: Scheduler> QwesUi<D, S, T> {
    /// Build with the default configuration, apply the theme and arm the toast sweep.
    #[must_use]
    pub fn new(document: D, storage: S, scheduler: T) -> Self {
        Self::build(document, storage, scheduler, UiConfig::default())
    }

    /// Build with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when `config` fails validation.
    pub fn with_config(
        document: D,
        storage: S,
        scheduler: T,
        config: UiConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(document, storage, scheduler, config))
    }

    /// Build from a configuration that already passed [`UiConfig::validate`].
    pub(crate) fn build(document: D, storage: S, scheduler: T, config: UiConfig) -> Self {
        let mut ui = Self {
            theme: ThemeController::new(&config.theme),
            modals: ModalController,
            dropdowns: DropdownController,
            tabs: TabController,
            tooltips: TooltipController::new(&config.tooltip),
            toasts: ToastController::new(&config.toast),
            forms: FormController::new(&config.form),
            document,
            storage,
            scheduler,
            config,
        };
        ui.start();
        ui
    }

    fn start(&mut self) {
        self.toasts.start_sweep(&mut self.scheduler);
        let theme = self.theme.initialize(&mut self.document, &self.storage);
        debug!(version = VERSION, theme = theme.map(ThemeMode::as_str), "qwesui started");
    }

    /// Library surface version.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn version(&self) -> &'static str {
        VERSION
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Host document.
    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Host document, mutably (for hosts that also build markup).
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Preference store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Timer facility.
    #[must_use]
    pub const fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Tooltip controller state (live tooltips per trigger).
    #[must_use]
    pub const fn tooltips(&self) -> &TooltipController {
        &self.tooltips
    }

    /// Route a delegated event. Returns the actions that ran, in order.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<WidgetAction> {
        let kind = event.kind();
        let actions = match event {
            UiEvent::Click { target } => self.on_click(target),
            UiEvent::KeyDown { key } if key == ESCAPE_KEY => {
                self.modals.dismiss_open(&mut self.document);
                vec![WidgetAction::EscapeModal]
            }
            UiEvent::KeyDown { .. } => Vec::new(),
            UiEvent::PointerEnter { target } => {
                if self.document.matches(target, &TOOLTIP_TRIGGER) {
                    self.tooltips.show(&mut self.document, target);
                    vec![WidgetAction::ShowTooltip]
                } else {
                    Vec::new()
                }
            }
            UiEvent::PointerLeave { target } => {
                if self.document.matches(target, &TOOLTIP_TRIGGER) {
                    self.tooltips.hide(&mut self.document, target);
                    vec![WidgetAction::HideTooltip]
                } else {
                    Vec::new()
                }
            }
            UiEvent::Submit { target } => {
                if self.document.matches(target, &FORM) {
                    self.forms
                        .begin(&mut self.document, &mut self.scheduler, target);
                    vec![WidgetAction::SubmitForm]
                } else {
                    Vec::new()
                }
            }
        };
        trace!(event = kind, ?actions, "event dispatched");
        actions
    }

    fn on_click(&mut self, target: ElementId) -> Vec<WidgetAction> {
        let mut ran = Vec::new();
        for binding in CLICK_BINDINGS {
            if binding.trigger.fires(&self.document, target) {
                self.run_click(binding.action, target);
                ran.push(binding.action);
            }
        }
        ran
    }

    fn run_click(&mut self, action: WidgetAction, target: ElementId) {
        match action {
            WidgetAction::OpenModal => {
                self.modals.open_from(&mut self.document, target);
            }
            WidgetAction::CloseModal => {
                self.modals.close_from(&mut self.document, target);
            }
            WidgetAction::ToggleDropdown => {
                self.dropdowns.toggle_from(&mut self.document, target);
            }
            WidgetAction::CloseDropdowns => {
                self.dropdowns.close_all(&mut self.document);
            }
            WidgetAction::SelectTab => {
                self.tabs.select_from(&mut self.document, target);
            }
            WidgetAction::ToggleTheme => {
                self.theme.toggle(&mut self.document, &mut self.storage);
            }
            WidgetAction::DismissToast => {
                self.toasts
                    .dismiss_from(&mut self.document, &mut self.scheduler, target);
            }
            WidgetAction::EscapeModal
            | WidgetAction::ShowTooltip
            | WidgetAction::HideTooltip
            | WidgetAction::SubmitForm => {}
        }
    }

    /// Run deferred work delivered by the scheduler.
    pub fn fire(&mut self, task: TimerTask) {
        trace!(?task, "timer fired");
        match task {
            TimerTask::ToastAutoHide(toast) => {
                self.toasts
                    .hide(&mut self.document, &mut self.scheduler, toast);
            }
            TimerTask::ToastDetach(toast) => {
                self.toasts.detach(&mut self.document, toast);
            }
            TimerTask::ToastSweep => {
                self.toasts.sweep(&mut self.document, &mut self.scheduler);
            }
            TimerTask::FormComplete { submit } => {
                self.forms.complete(
                    &mut self.document,
                    &mut self.scheduler,
                    &self.toasts,
                    submit,
                );
            }
        }
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle(&mut self.document, &mut self.storage)
    }

    /// Theme currently applied to the document.
    #[must_use]
    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme.current(&self.document)
    }

    /// Show the modal with `modal_id`. Unknown ids are a no-op.
    pub fn show_modal(&mut self, modal_id: &str) -> Option<ElementId> {
        self.modals.show(&mut self.document, modal_id)
    }

    /// Hide `modal`.
    pub fn hide_modal(&mut self, modal: ElementId) {
        self.modals.hide(&mut self.document, modal);
    }

    /// Show a toast. `duration_ms` of `None` uses the configured default.
    pub fn show_toast(
        &mut self,
        message: &str,
        kind: ToastKind,
        duration_ms: Option<u32>,
    ) -> Option<ToastHandle> {
        self.toast(message, kind, duration_ms).show()
    }

    /// Start hiding a toast.
    pub fn hide_toast(&mut self, toast: ToastHandle) -> bool {
        self.toasts
            .hide(&mut self.document, &mut self.scheduler, toast.element())
    }

    /// Handle for the modal with `modal_id`.
    pub fn modal(&mut self, modal_id: impl Into<String>) -> ModalHandle<'_, D, S, T> {
        ModalHandle {
            ui: self,
            modal_id: modal_id.into(),
        }
    }

    /// Request for a toast with the given message, category and lifetime.
    pub fn toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: Option<u32>,
    ) -> ToastRequest<'_, D, S, T> {
        ToastRequest {
            ui: self,
            message: message.into(),
            kind,
            duration_ms,
        }
    }

    /// Handle for an existing `.dropdown` element.
    pub fn dropdown(&mut self, dropdown: ElementId) -> DropdownHandle<'_, D, S, T> {
        DropdownHandle { ui: self, dropdown }
    }

    /// Handle for tab `tab_id` inside `container`.
    pub fn tab(
        &mut self,
        container: ElementId,
        tab_id: impl Into<String>,
    ) -> TabHandle<'_, D, S, T> {
        TabHandle {
            ui: self,
            container,
            tab_id: tab_id.into(),
        }
    }
}

impl<D: Document, S: PreferenceStore> QwesUi<D, S, ManualScheduler> {
    /// Advance the virtual clock by `ms`, running every timer that comes due, including
    /// timers scheduled while advancing. Returns how many timers fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let until = self.scheduler.now_ms() + ms;
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.fire(task);
            fired += 1;
        }
        self.scheduler.set_now(until);
        fired
    }
}

/// Programmatic access to one modal.
#[derive(Debug)]
pub struct ModalHandle<'ui, D, S, T> {
    ui: &'ui mut QwesUi<D, S, T>,
    modal_id: String,
}

impl<D: Document, S: PreferenceStore, T: Scheduler> ModalHandle<'_, D, S, T> {
    /// Show the modal. Returns its element when it exists.
    pub fn show(&mut self) -> Option<ElementId> {
        self.ui.show_modal(&self.modal_id)
    }

    /// Hide the modal. Returns its element when it exists.
    pub fn hide(&mut self) -> Option<ElementId> {
        self.ui.modals.hide_by_id(&mut self.ui.document, &self.modal_id)
    }
}

/// A toast ready to be shown, or hidden by message.
#[derive(Debug)]
pub struct ToastRequest<'ui, D, S, T> {
    ui: &'ui mut QwesUi<D, S, T>,
    message: String,
    kind: ToastKind,
    duration_ms: Option<u32>,
}

impl<D: Document, S: PreferenceStore, T: Scheduler> ToastRequest<'_, D, S, T> {
    /// Create the toast.
    pub fn show(&mut self) -> Option<ToastHandle> {
        let ui = &mut *self.ui;
        ui.toasts.show(
            &mut ui.document,
            &mut ui.scheduler,
            &self.message,
            &self.kind,
            self.duration_ms,
        )
    }

    /// Hide every toast carrying this message. Returns how many started hiding.
    pub fn hide(&mut self) -> usize {
        let ui = &mut *self.ui;
        ui.toasts
            .hide_matching(&mut ui.document, &mut ui.scheduler, &self.message)
    }
}

/// Programmatic access to one dropdown.
#[derive(Debug)]
pub struct DropdownHandle<'ui, D, S, T> {
    ui: &'ui mut QwesUi<D, S, T>,
    dropdown: ElementId,
}

impl<D: Document, S: PreferenceStore, T: Scheduler> DropdownHandle<'_, D, S, T> {
    /// Open without closing the others.
    pub fn show(&mut self) {
        self.ui.dropdowns.open(&mut self.ui.document, self.dropdown);
    }

    /// Close.
    pub fn hide(&mut self) {
        self.ui.dropdowns.close(&mut self.ui.document, self.dropdown);
    }

    /// Toggle with single-open semantics. Returns whether it ends up open.
    pub fn toggle(&mut self) -> bool {
        self.ui.dropdowns.toggle(&mut self.ui.document, self.dropdown)
    }
}

/// Programmatic access to one tab.
#[derive(Debug)]
pub struct TabHandle<'ui, D, S, T> {
    ui: &'ui mut QwesUi<D, S, T>,
    container: ElementId,
    tab_id: String,
}

impl<D: Document, S: PreferenceStore, T: Scheduler> TabHandle<'_, D, S, T> {
    /// Activate the tab.
    pub fn show(&mut self) -> TabSelection {
        self.ui
            .tabs
            .show(&mut self.ui.document, self.container, &self.tab_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{MemoryDocument, MemoryStorage, MemoryUi, element};

    fn ui() -> MemoryUi {
        QwesUi::new(MemoryDocument::new(), MemoryStorage::new(), ManualScheduler::new())
    }

    #[test]
    fn construction_arms_sweep_and_reports_version() {
        let ui = ui();
        assert_eq!(ui.version(), "1.0.0");
        assert_eq!(ui.scheduler().pending(), 1);
        assert_eq!(ui.theme(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = UiConfig::default();
        config.toast.sweep_interval_ms = 0;
        let built = QwesUi::with_config(
            MemoryDocument::new(),
            MemoryStorage::new(),
            ManualScheduler::new(),
            config,
        );
        assert!(built.is_err());
    }

    #[test]
    fn click_on_plain_element_only_closes_dropdowns() {
        let mut ui = ui();
        let plain = ui.document_mut().mount_in_body(element("p"));
        assert_eq!(
            ui.dispatch(UiEvent::Click { target: plain }),
            vec![WidgetAction::CloseDropdowns]
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut ui = ui();
        assert!(ui.dispatch(UiEvent::key("Enter")).is_empty());
        assert_eq!(
            ui.dispatch(UiEvent::key("Escape")),
            vec![WidgetAction::EscapeModal]
        );
    }

    #[test]
    fn pointer_events_on_plain_elements_do_nothing() {
        let mut ui = ui();
        let plain = ui.document_mut().mount_in_body(element("p"));
        assert!(ui.dispatch(UiEvent::PointerEnter { target: plain }).is_empty());
        assert!(ui.dispatch(UiEvent::PointerLeave { target: plain }).is_empty());
        assert!(ui.dispatch(UiEvent::Submit { target: plain }).is_empty());
        assert_eq!(ui.tooltips().open_count(), 0);
    }

    #[test]
    fn advance_runs_timers_scheduled_while_advancing() {
        let mut ui = ui();
        let toast = ui
            .show_toast("Saved", ToastKind::Success, Some(100))
            .expect("toast");
        assert_eq!(ui.advance(400), 2);
        assert!(!ui.document().is_attached(toast.element()));
        assert_eq!(ui.scheduler().now_ms(), 400);
    }
}
