//! Browser-side controls for Bulma-styled markup.
//!
//! Two independent behaviors, both plain DOM wiring (no framework):
//! - [`NavbarToggle`] — collapsible navbar burgers, each click flipping
//!   `is-active` on the burger and its menu panel.
//! - [`ModalController`] — show/close for one modal subtree, with bubbling
//!   `modal:show` / `modal:close` notifications and auto-wired close
//!   triggers (`[data-bulma-modal="close"]`, `.modal-background`).
//!
//! Opener buttons are hooked to modals through [`OpenerWiring`], which takes
//! explicit (opener, controller) pairs rather than global bindings.
//!
//! Everything runs synchronously on the UI event loop; listener lifetimes
//! follow the returned handles (drop a handle, lose its wiring).

pub mod error;
pub mod modal;
pub mod navbar;
pub mod wiring;

pub use error::UiError;
pub use modal::{ModalController, ModalEvent, ModalState};
pub use navbar::{NavbarToggle, ToggleBinding};
pub use wiring::OpenerWiring;

/// Bulma's "currently visible/open" marker class.
pub const ACTIVE_CLASS: &str = "is-active";
