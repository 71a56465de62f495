//! Box, path and outline construction utilities.
//!
//! Boxes are 4-point shapes in the fixed order top-left, top-right,
//! bottom-right, bottom-left. Paths are [`lyon::path::Path`]s built from
//! straight line segments with an explicit close.

use lyon::math::point;
use lyon::path::{Event, Path};
use rand::Rng;
use serde::{Deserialize, Serialize};

use vexel_core::Pointf;

use crate::error::{GraphicsError, Result};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font styles available to [`random_font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Plain,
    Bold,
    Italic,
}

/// A font request produced by [`random_font`]. Resolution to an actual
/// typeface is the rendering backend's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub style: FontStyle,
    pub size: u8,
}

/// Generic font families every backend can resolve.
pub const FONT_FAMILIES: [&str; 5] = ["serif", "sans-serif", "monospace", "cursive", "fantasy"];

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `point` lies within the rectangle, boundary included.
    pub fn contains(&self, point: Pointf) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Creates a box from its top-left corner and side lengths.
pub fn create_box(x: f32, y: f32, width: f32, height: f32) -> [Pointf; 4] {
    [
        Pointf::new(x, y),
        Pointf::new(x + width, y),
        Pointf::new(x + width, y + height),
        Pointf::new(x, y + height),
    ]
}

/// Creates a square box from its top-left corner and side length.
pub fn create_square(x: f32, y: f32, size: f32) -> [Pointf; 4] {
    create_box(x, y, size, size)
}

/// Creates a box from a top-left location point and a size point.
pub fn create_box_at(location: Pointf, size: Pointf) -> [Pointf; 4] {
    create_box(location.x, location.y, size.x, size.y)
}

/// Creates a square box from a top-left location point and a side length.
pub fn create_square_at(location: Pointf, size: f32) -> [Pointf; 4] {
    create_box(location.x, location.y, size, size)
}

/// Creates a square box centered on `center`.
pub fn create_square_around(center: Pointf, size: f32) -> [Pointf; 4] {
    create_box(center.x - size / 2.0, center.y - size / 2.0, size, size)
}

/// Creates a box at the origin sized to a bitmap's pixel extent.
pub fn create_box_from_extent(extent: (u32, u32)) -> [Pointf; 4] {
    create_box_from_extent_at(extent, Pointf::ORIGIN)
}

/// Creates a box at `location` sized to a bitmap's pixel extent.
pub fn create_box_from_extent_at(extent: (u32, u32), location: Pointf) -> [Pointf; 4] {
    create_box(location.x, location.y, extent.0 as f32, extent.1 as f32)
}

/// Creates an axis-aligned rectangle from a 4-point box.
///
/// Fails with a boundary-count error when `points` is not exactly 4 points.
pub fn create_rect(points: &[Pointf]) -> Result<Rect> {
    if points.len() != 4 {
        return Err(GraphicsError::BoundaryPointCount { count: points.len() });
    }

    Ok(Rect::new(
        points[0].x,
        points[0].y,
        points[1].x - points[0].x,
        points[3].y - points[0].y,
    ))
}

/// Computes the 4-point axis-aligned bounding box of a point set.
pub fn bounding_box(points: &[Pointf]) -> [Pointf; 4] {
    let mut min = Pointf::splat(f32::MAX);
    let mut max = Pointf::splat(f32::MIN);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    create_box(min.x, min.y, max.x - min.x, max.y - min.y)
}

/// Arithmetic mean of all points' coordinates.
///
/// For symmetric shapes this coincides with the bounding-box midpoint, but
/// the contract is the mean of the vertices.
pub fn center_of(points: &[Pointf]) -> Pointf {
    let sum = points
        .iter()
        .fold(Pointf::ORIGIN, |total, p| total + *p);
    sum / points.len() as f32
}

/// Builds a closed path: the first point is a move, each subsequent point a
/// line, followed by an explicit close.
pub fn create_path(points: &[Pointf]) -> Path {
    debug_assert!(!points.is_empty(), "a path needs at least one point");

    let mut builder = Path::builder();
    builder.begin(point(points[0].x, points[0].y));
    for p in &points[1..] {
        builder.line_to(point(p.x, p.y));
    }
    builder.close();
    builder.build()
}

/// Total number of move/line commands across all subpaths.
pub fn length_of_path(path: &Path) -> usize {
    path.iter()
        .filter(|event| matches!(event, Event::Begin { .. } | Event::Line { .. }))
        .count()
}

/// The vertices of a path in traversal order. Polygon paths only contain
/// line segments; curve events are not produced by [`create_path`].
pub fn points_of_path(path: &Path) -> Vec<Pointf> {
    let mut points = Vec::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => points.push(Pointf::new(at.x, at.y)),
            Event::Line { to, .. } => points.push(Pointf::new(to.x, to.y)),
            _ => {}
        }
    }
    points
}

/// Compares two closed paths point-by-point in traversal order.
///
/// Fails with a structural-mismatch error when the two paths have different
/// point counts; returns `Ok(true)` only when every corresponding point
/// matches exactly.
pub fn path_equals(first: &Path, second: &Path) -> Result<bool> {
    let first_length = length_of_path(first);
    let second_length = length_of_path(second);
    if first_length != second_length {
        return Err(GraphicsError::PathLengthMismatch {
            first: first_length,
            second: second_length,
        });
    }

    Ok(points_of_path(first) == points_of_path(second))
}

/// Whether `location` falls inside the polygon traced by `path`, by ray
/// casting over its vertices.
pub fn path_contains(path: &Path, location: Pointf) -> bool {
    let vertices = points_of_path(path);
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);

    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if ((a.y > location.y) != (b.y > location.y))
            && (location.x < (b.x - a.x) * (location.y - a.y) / (b.y - a.y) + a.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Merges the boundaries of two or more overlapping/abutting 4-point boxes
/// into a single outer outline.
///
/// Every vertex lying within more than one of the boxes is interior to the
/// union and dropped; the survivors are ordered by angle around their mean
/// center. Two overlapping boxes produce a 6-point outline, three boxes in a
/// staircase a 7-point outline.
pub fn create_collision_outline(shapes: &[&[Pointf]]) -> Result<Vec<Pointf>> {
    let rects = shapes
        .iter()
        .map(|points| create_rect(points))
        .collect::<Result<Vec<Rect>>>()?;

    let mut outline: Vec<Pointf> = shapes
        .iter()
        .flat_map(|points| points.iter().copied())
        .collect();
    outline.retain(|p| rects.iter().filter(|rect| rect.contains(*p)).count() < 2);

    let center = center_of(&outline);
    outline.sort_by(|a, b| {
        let angle_a = (a.y - center.y).atan2(a.x - center.x);
        let angle_b = (b.y - center.y).atan2(b.x - center.x);
        angle_a.total_cmp(&angle_b)
    });

    Ok(outline)
}

/// A random opaque color.
pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    Color::rgb(rng.gen(), rng.gen(), rng.gen())
}

/// A random color with a random alpha channel.
pub fn random_color_with_alpha() -> Color {
    let mut rng = rand::thread_rng();
    Color::rgba(rng.gen(), rng.gen(), rng.gen(), rng.gen())
}

/// A random font request: any generic family, any style, size in `1..=96`.
pub fn random_font() -> FontSpec {
    let mut rng = rand::thread_rng();
    let family = FONT_FAMILIES[rng.gen_range(0..FONT_FAMILIES.len())];
    let style = match rng.gen_range(0..3) {
        0 => FontStyle::Plain,
        1 => FontStyle::Bold,
        _ => FontStyle::Italic,
    };
    FontSpec {
        family,
        style,
        size: rng.gen_range(1..=96),
    }
}
