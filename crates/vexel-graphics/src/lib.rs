//! # Vexel Graphics
//!
//! The geometric core of the engine: box/path construction and comparison,
//! the multi-shape outline merge, transformable polygons with cached
//! composed transforms, pairwise collision resolution, and the plain-text
//! model-file serializer.

pub mod collision;
pub mod error;
pub mod geometry;
pub mod model;
pub mod polygon;

pub use collision::intersects;
pub use error::{GraphicsError, Result};
pub use geometry::{Color, FontSpec, FontStyle, Rect};
pub use model::{read_model, write_model};
pub use polygon::{Boundary, Polygon};
