//! Display collaborator trait.

use crate::point::Pointf;

/// Source of the window's resolution scale.
///
/// Pointer events arrive in raw pixel coordinates; logical coordinates are
/// `raw / resolution_scale()`.
pub trait Display {
    fn resolution_scale(&self) -> Pointf;
}
