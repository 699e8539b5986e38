#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! QwesUI: markup-driven widget behaviours over event delegation.
//!
//! Pages opt in through classes and `data-*` attributes; a single [`QwesUi`] instance
//! receives delegated events and drives the theme toggle, modals, dropdowns, tabs,
//! tooltips, toasts and form-submit feedback. The host document, preference store and
//! timers sit behind the traits in [`host`], with an in-memory host for native use and
//! tests and a browser binding on wasm32.

pub mod core;
pub mod host;
pub mod ui;
pub mod widgets;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::core::config::{ConfigError, UiConfig};
pub use crate::core::events::{UiEvent, WidgetAction};
pub use crate::core::geometry::{Rect, TooltipPlacement};
pub use crate::core::selector::Selector;
pub use crate::core::theme::ThemeMode;
pub use crate::core::toast::ToastKind;
pub use crate::host::{
    Document, ElementId, PreferenceStore, Scheduler, StorageError, TimerId, TimerTask,
};
pub use crate::ui::{DropdownHandle, ModalHandle, QwesUi, TabHandle, ToastRequest, VERSION};
pub use crate::widgets::{TabSelection, ToastHandle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_exposed_at_the_root() {
        assert_eq!(VERSION, "1.0.0");
    }
}
