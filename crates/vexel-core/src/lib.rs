//! # Vexel Core
//!
//! Scalar and point math plus the narrow collaborator traits shared by the
//! geometry and input crates: the scene registry, the display scale source,
//! and the error sink.

pub mod display;
pub mod maths;
pub mod point;
pub mod registry;
pub mod sink;

pub use display::Display;
pub use point::Pointf;
pub use registry::{GameObjectRegistry, SceneRegistry, UiRegistry};
pub use sink::{ErrorSink, LogSink};
