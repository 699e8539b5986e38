//! Widget controllers.
//!
//! Each controller reacts to one markup convention and mutates classes/attributes on the
//! shared document. Only the tooltip controller keeps state of its own (the trigger →
//! tooltip map); everything else is encoded in the document.
pub mod dropdown;
pub mod form;
pub mod modal;
pub mod tabs;
pub mod theme;
pub mod toast;
pub mod tooltip;

pub use dropdown::DropdownController;
pub use form::FormController;
pub use modal::ModalController;
pub use tabs::{TabController, TabSelection};
pub use theme::ThemeController;
pub use toast::{ToastController, ToastHandle};
pub use tooltip::TooltipController;
