//! Browser binding: delegated listeners on the live document.
//!
//! # Design
//! - [`install`] builds one instance per document and attaches `click`, `keydown` and
//!   `submit` listeners, plus capture-phase `mouseenter`/`mouseleave` (those events do
//!   not bubble).
//! - Listeners own the instance; timers reach it through a weak reference. Dropping the
//!   [`Installation`] detaches everything, [`Installation::persist`] keeps it for the
//!   page lifetime.
//! - A listener that finds the instance already borrowed (re-entrant dispatch) drops the
//!   event and reports it on the console.

pub mod document;
pub mod storage;
pub mod timers;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

pub use document::WebDocument;
pub use storage::LocalPreferences;
pub use timers::{BrowserScheduler, TimerSink};

use crate::core::config::{ConfigError, UiConfig};
use crate::core::events::UiEvent;
use crate::host::{ElementId, TimerTask};
use crate::ui::QwesUi;

/// Instance type driven by the browser binding.
pub type WebUi = QwesUi<WebDocument, LocalPreferences, BrowserScheduler>;

type SharedUi = Rc<RefCell<WebUi>>;

/// Errors raised while installing the browser binding.
#[derive(Debug, Error)]
pub enum WebError {
    /// No global `window` (e.g. running inside a worker).
    #[error("browser window unavailable")]
    NoWindow,
    /// The window has no document.
    #[error("browser document unavailable")]
    NoDocument,
    /// The supplied configuration was rejected.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
}

/// Live binding; dropping it removes every listener and interval.
#[derive(Debug)]
pub struct Installation {
    ui: SharedUi,
    listeners: Vec<EventListener>,
}

impl Installation {
    /// Shared instance, for programmatic calls (`modal`, `toast`, ...).
    #[must_use]
    pub fn ui(&self) -> Rc<RefCell<WebUi>> {
        Rc::clone(&self.ui)
    }

    /// Keep the binding alive for the lifetime of the page.
    pub fn persist(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Attach the library to the current document.
///
/// # Errors
///
/// Returns [`WebError`] when the window or document is missing, or `config` is invalid.
pub fn install(config: UiConfig) -> Result<Installation, WebError> {
    console_error_panic_hook::set_once();
    config.validate()?;
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let dom = window.document().ok_or(WebError::NoDocument)?;

    let ui: SharedUi = Rc::new_cyclic(|weak: &Weak<RefCell<WebUi>>| {
        let scheduler = BrowserScheduler::new(timer_sink(weak.clone()));
        RefCell::new(QwesUi::build(
            WebDocument::new(dom.clone()),
            LocalPreferences,
            scheduler,
            config,
        ))
    });

    let listeners = vec![
        listen(&dom, "click", EventListenerOptions::default(), &ui, |ui, event| {
            let target = target_of(ui, event)?;
            Some(UiEvent::Click { target })
        }),
        listen(&dom, "keydown", EventListenerOptions::default(), &ui, |_, event| {
            let key = event.dyn_ref::<KeyboardEvent>()?.key();
            Some(UiEvent::KeyDown { key })
        }),
        listen(
            &dom,
            "mouseenter",
            EventListenerOptions::run_in_capture_phase(),
            &ui,
            |ui, event| {
                let target = target_of(ui, event)?;
                Some(UiEvent::PointerEnter { target })
            },
        ),
        listen(
            &dom,
            "mouseleave",
            EventListenerOptions::run_in_capture_phase(),
            &ui,
            |ui, event| {
                let target = target_of(ui, event)?;
                Some(UiEvent::PointerLeave { target })
            },
        ),
        listen(
            &dom,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            &ui,
            |ui, event| {
                let target = target_of(ui, event)?;
                Some(UiEvent::Submit { target })
            },
        ),
    ];

    Ok(Installation { ui, listeners })
}

/// [`install`] with a JSON configuration payload.
///
/// # Errors
///
/// Returns [`WebError::Config`] for a malformed payload, otherwise as [`install`].
pub fn install_with_json(payload: &str) -> Result<Installation, WebError> {
    install(UiConfig::from_json(payload)?)
}

fn listen(
    dom: &web_sys::Document,
    event_type: &'static str,
    options: EventListenerOptions,
    ui: &SharedUi,
    translate: fn(&WebUi, &Event) -> Option<UiEvent>,
) -> EventListener {
    let ui = Rc::clone(ui);
    EventListener::new_with_options(dom, event_type, options, move |event| {
        let Ok(mut ui) = ui.try_borrow_mut() else {
            console::warn!("qwesui busy; dropped", event_type);
            return;
        };
        let Some(ui_event) = translate(&ui, event) else {
            return;
        };
        let submitted = matches!(ui_event, UiEvent::Submit { .. });
        let actions = ui.dispatch(ui_event);
        drop(ui);
        if submitted && !actions.is_empty() {
            event.prevent_default();
        }
    })
}

fn target_of(ui: &WebUi, event: &Event) -> Option<ElementId> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    Some(ui.document().handle(&element))
}

fn timer_sink(ui: Weak<RefCell<WebUi>>) -> TimerSink {
    Rc::new(move |task: TimerTask| {
        let Some(ui) = ui.upgrade() else {
            return;
        };
        match ui.try_borrow_mut() {
            Ok(mut ui) => ui.fire(task),
            Err(_) => console::error!("qwesui busy; timer task dropped"),
        }
    })
}
