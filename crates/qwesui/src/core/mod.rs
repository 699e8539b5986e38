//! Core, DOM-free primitives shared by the controllers and host bindings.
pub mod config;
pub mod events;
pub mod geometry;
pub mod markers;
pub mod selector;
pub mod theme;
pub mod toast;
