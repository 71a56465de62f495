//! # Vexel Input
//!
//! Pointer-input tracking for the engine: discrete mouse events, a
//! debounced per-action "recent activity" store, and hit tests against
//! polygon collision paths.

pub mod action;
pub mod event;
pub mod mouse;

pub use action::MouseAction;
pub use event::{MouseEvent, MouseEventHandler};
pub use mouse::{Mouse, DEBOUNCE_WINDOW};
