//! Pairwise collision resolution between polygon boundaries.

use cavalier_contours::polyline::{
    BooleanOp, PlineSource, PlineSourceMut, PlineVertex, Polyline,
};

use vexel_core::{ErrorSink, Pointf};

use crate::error::GraphicsError;
use crate::geometry::points_of_path;
use crate::polygon::Polygon;

/// Determines whether the collision boundaries of two polygons share a
/// non-empty intersection area. Boundaries that only touch along an edge
/// or at a corner enclose no area and do not collide.
///
/// A missing boundary on either side is a recoverable condition: it is
/// reported to `sink` (suppressed while `switching_scenes` is set, since
/// boundaries are routinely torn down mid scene-transition) and the test
/// resolves to `false`.
pub fn intersects(
    first: &Polygon,
    second: &Polygon,
    sink: &dyn ErrorSink,
    switching_scenes: bool,
) -> bool {
    let Some(first_path) = first.collision_path() else {
        report_missing(first, sink, switching_scenes);
        return false;
    };
    let Some(second_path) = second.collision_path() else {
        report_missing(second, sink, switching_scenes);
        return false;
    };

    let first_outline = to_polyline(&points_of_path(first_path));
    let second_outline = to_polyline(&points_of_path(second_path));

    let intersection = first_outline.boolean(&second_outline, BooleanOp::And);
    // Abutting boundaries can produce a degenerate zero-area pline; only an
    // intersection with actual area counts.
    intersection
        .pos_plines
        .iter()
        .any(|result| result.pline.area().abs() > f64::EPSILON)
}

fn report_missing(polygon: &Polygon, sink: &dyn ErrorSink, switching_scenes: bool) {
    if switching_scenes {
        return;
    }

    let cause = GraphicsError::MissingCollisionPath {
        id: polygon.id().to_string(),
    };
    sink.report("A collision error occurred.", &cause);
}

fn to_polyline(points: &[Pointf]) -> Polyline<f64> {
    let mut polyline = Polyline::new_closed();
    for p in points {
        polyline.add_vertex(PlineVertex::new(p.x as f64, p.y as f64, 0.0));
    }
    polyline
}
