//! Transformable closed polygons.
//!
//! A [`Polygon`] owns a reference point set fixed at construction (or
//! explicit replacement) and derives its current points from translate,
//! rotate and scale operations. All transform operations return `&mut Self`
//! for chaining and invalidate the cached composed transform.

use lyon::math::{vector, Angle, Transform};
use lyon::path::Path;
use uuid::Uuid;

use vexel_core::{GameObjectRegistry, Pointf, SceneRegistry, UiRegistry};

use crate::error::{GraphicsError, Result};
use crate::geometry::{bounding_box, center_of, create_path, Color};

pub const DEFAULT_COLOR: Color = Color::BLACK;
pub const DEFAULT_FILL: bool = true;
pub const DEFAULT_SHOW: bool = true;
pub const DEFAULT_TRANSLATION: Pointf = Pointf::ORIGIN;
pub const DEFAULT_ROTATION: f32 = 0.0;
pub const DEFAULT_SCALE: Pointf = Pointf::new(1.0, 1.0);

/// One corner of a polygon's axis-aligned 4-point bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

/// A closed polygon with a transform state and a collision path.
#[derive(Debug, Clone)]
pub struct Polygon {
    raw_id: Uuid,
    id: String,
    original_points: Vec<Pointf>,
    points: Vec<Pointf>,
    translation: Pointf,
    rotation: f32,
    scale: Pointf,
    color: Color,
    filled: bool,
    should_render: bool,
    bounds: [Pointf; 4],
    collision_path: Option<Path>,
    cached_transform: Option<Transform>,
}

impl Polygon {
    /// Creates a polygon with default render attributes and a default
    /// transform. `points` must describe a closed polygon of at least 3
    /// vertices.
    pub fn new(points: Vec<Pointf>) -> Self {
        Self::with_style(points, DEFAULT_COLOR, DEFAULT_FILL, DEFAULT_SHOW)
    }

    pub fn with_style(points: Vec<Pointf>, color: Color, filled: bool, should_render: bool) -> Self {
        debug_assert!(points.len() >= 3, "a polygon needs at least 3 points");

        let raw_id = Uuid::new_v4();
        let bounds = bounding_box(&points);
        let collision_path = Some(create_path(&points));
        Self {
            raw_id,
            id: format!("POLYGON${raw_id}"),
            original_points: points.clone(),
            points,
            translation: DEFAULT_TRANSLATION,
            rotation: DEFAULT_ROTATION,
            scale: DEFAULT_SCALE,
            color,
            filled,
            should_render,
            bounds,
            collision_path,
            cached_transform: None,
        }
    }

    /// Creates a polygon and applies an initial translation, rotation and
    /// scale on top of the given reference points.
    pub fn with_transform(
        points: Vec<Pointf>,
        translation: Pointf,
        rotation: f32,
        scale: Pointf,
        color: Color,
        filled: bool,
        should_render: bool,
    ) -> Self {
        let mut polygon = Self::with_style(points, color, filled, should_render);
        polygon
            .set_translation(translation)
            .set_rotation(rotation)
            .set_scale(scale);
        polygon
    }

    /// The readable id of the polygon.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw id used at registry boundaries.
    pub fn raw_id(&self) -> Uuid {
        self.raw_id
    }

    /// The current (transformed) points.
    pub fn points(&self) -> &[Pointf] {
        &self.points
    }

    /// The reference points set at construction or replacement.
    pub fn original_points(&self) -> &[Pointf] {
        &self.original_points
    }

    pub fn translation(&self) -> Pointf {
        self.translation
    }

    /// Cumulative rotation in degrees, normalized into `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Cumulative component-wise scale.
    pub fn scale_factor(&self) -> Pointf {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn should_render(&self) -> bool {
        self.should_render
    }

    /// The shape used for intersection testing, if one is set.
    pub fn collision_path(&self) -> Option<&Path> {
        self.collision_path.as_ref()
    }

    /// Replaces the collision path. `None` is a valid but degraded state:
    /// every intersection test against this polygon reports to the error
    /// sink and resolves to `false`.
    pub fn set_collision_path(&mut self, path: Option<Path>) -> &mut Self {
        self.collision_path = path;
        self
    }

    /// The polygon's axis-aligned 4-point bounds (TL, TR, BR, BL).
    pub fn bounds(&self) -> &[Pointf; 4] {
        &self.bounds
    }

    /// One corner of the bounds.
    pub fn bound(&self, boundary: Boundary) -> Pointf {
        self.bounds[boundary as usize]
    }

    /// Replaces the bounds. Fails when `bounds` is not exactly 4 points.
    pub fn set_bounds(&mut self, bounds: &[Pointf]) -> Result<()> {
        let corners: [Pointf; 4] = bounds
            .try_into()
            .map_err(|_| GraphicsError::BoundaryPointCount { count: bounds.len() })?;
        self.bounds = corners;
        Ok(())
    }

    /// Arithmetic mean of the current points.
    pub fn center(&self) -> Pointf {
        center_of(&self.points)
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_filled(&mut self, filled: bool) -> &mut Self {
        self.filled = filled;
        self
    }

    pub fn set_should_render(&mut self, should_render: bool) -> &mut Self {
        self.should_render = should_render;
        self
    }

    /// Moves every current point (and the cumulative translation) by
    /// `delta`.
    pub fn translate(&mut self, delta: Pointf) -> &mut Self {
        for p in &mut self.points {
            *p += delta;
        }
        self.translation += delta;
        self.refresh_derived();
        self
    }

    /// Rotates about the polygon's current center.
    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        let center = self.center();
        self.rotate_about(degrees, center)
    }

    /// Rotates every current point about `pivot` by `degrees`.
    pub fn rotate_about(&mut self, degrees: f32, pivot: Pointf) -> &mut Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        for p in &mut self.points {
            let rel = *p - pivot;
            *p = Pointf::new(rel.x * cos - rel.y * sin, rel.y * cos + rel.x * sin) + pivot;
        }
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
        self.refresh_derived();
        self
    }

    /// Scales about the polygon's current center.
    pub fn scale(&mut self, factor: Pointf) -> &mut Self {
        let center = self.center();
        self.scale_about(factor, center)
    }

    /// Scales every current point relative to `pivot`.
    ///
    /// The applied multiplier is the sum of the cumulative scale and the
    /// requested factor, and the cumulative scale becomes that sum. The
    /// additive combination is part of the public contract; callers tuned to
    /// it would break under a multiplicative compose.
    pub fn scale_about(&mut self, factor: Pointf, pivot: Pointf) -> &mut Self {
        let applied = self.scale + factor;
        for p in &mut self.points {
            *p = (*p - pivot) * applied + pivot;
        }
        self.scale = applied;
        self.refresh_derived();
        self
    }

    /// Sets the translation to an absolute value.
    pub fn set_translation(&mut self, translation: Pointf) -> &mut Self {
        let delta = translation - self.translation;
        self.translate(delta)
    }

    /// Sets the rotation to an absolute value, rotating about the current
    /// center.
    pub fn set_rotation(&mut self, rotation: f32) -> &mut Self {
        let delta = rotation - self.rotation;
        self.rotate(delta)
    }

    /// Sets the cumulative scale to an absolute value, scaling about the
    /// current center.
    pub fn set_scale(&mut self, scale: Pointf) -> &mut Self {
        let delta = scale - self.scale;
        self.scale(delta)
    }

    /// Replaces both the reference and current points with `points` as
    /// given.
    ///
    /// Each flag independently resets its transform component to the
    /// default. Preserved components are *not* re-applied to the new
    /// geometry; the new points become the new baseline as-is.
    pub fn replace_points(
        &mut self,
        points: Vec<Pointf>,
        reset_translation: bool,
        reset_rotation: bool,
        reset_scale: bool,
    ) -> &mut Self {
        self.original_points = points.clone();
        self.points = points;

        if reset_translation {
            self.translation = DEFAULT_TRANSLATION;
        }
        if reset_rotation {
            self.rotation = DEFAULT_ROTATION;
        }
        if reset_scale {
            self.scale = DEFAULT_SCALE;
        }

        self.refresh_derived();
        self
    }

    /// The composed transform for the polygon's current state, rebuilt on
    /// demand after any mutation.
    ///
    /// The build runs three steps in the order scale, rotation about the
    /// current center, translation. Each step *sets* the transform rather
    /// than composing with the previous one, so the result equals the final
    /// translation alone. Downstream consumers depend on that exact output;
    /// keep the overwrite behavior.
    pub fn transformation(&mut self) -> Transform {
        if let Some(transform) = self.cached_transform {
            return transform;
        }

        let center = self.center();
        let _scale = Transform::scale(self.scale.x, self.scale.y);
        let _rotation = Transform::translation(-center.x, -center.y)
            .then_rotate(Angle::degrees(self.rotation))
            .then_translate(vector(center.x, center.y));
        let transform = Transform::translation(self.translation.x, self.translation.y);

        self.cached_transform = Some(transform);
        transform
    }

    /// Registers the polygon with a game-object registry.
    pub fn attach_as_game_object(&self, registry: &mut dyn GameObjectRegistry) {
        registry.attach(self.raw_id);
    }

    /// Registers the polygon with a UI registry.
    pub fn attach_as_ui_element(&self, registry: &mut dyn UiRegistry) {
        registry.attach(self.raw_id);
    }

    /// Explicit teardown: frees both point sets and the collision path
    /// immediately and removes every registry reference.
    pub fn destroy(&mut self, registry: &mut dyn SceneRegistry) {
        registry.detach(self.raw_id);
        registry.remove_tag(self.raw_id);

        self.original_points.clear();
        self.points.clear();
        self.collision_path = None;
        self.bounds = [Pointf::ORIGIN; 4];
        self.cached_transform = None;
    }

    fn refresh_derived(&mut self) {
        // A destroyed polygon has no points left; keep it degraded instead
        // of rebuilding an empty path.
        if self.points.is_empty() {
            self.bounds = [Pointf::ORIGIN; 4];
            self.collision_path = None;
        } else {
            self.bounds = bounding_box(&self.points);
            self.collision_path = Some(create_path(&self.points));
        }
        self.cached_transform = None;
    }
}

impl PartialEq for Polygon {
    /// Structural equality over points, transform state and render
    /// attributes; ids and derived state are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.original_points == other.original_points
            && self.points == other.points
            && self.translation == other.translation
            && self.rotation == other.rotation
            && self.scale == other.scale
            && self.color == other.color
            && self.filled == other.filled
            && self.should_render == other.should_render
    }
}
