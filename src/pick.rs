//! Nearest-control-point queries for interactive dragging.

use crate::core::Point3;

/// Default pick radius in normalized device units, sized for dragging
/// control points with a mouse.
pub const DEFAULT_PICK_RADIUS: f64 = 0.01;

/// Returns the index of the first control point whose axis-aligned box
/// `[x - radius, x + radius] × [y - radius, y + radius]` contains `query`.
///
/// Picking operates in the projected XY plane; `z` is ignored on both sides.
/// Points are scanned in ascending index order and the first hit wins, even
/// when a later point is closer. Interactive selection depends on that
/// deterministic tie-break.
#[must_use]
pub fn pick_control_point(points: &[Point3], query: Point3, radius: f64) -> Option<usize> {
    points.iter().position(|cp| {
        query.x >= cp.x - radius
            && query.x <= cp.x + radius
            && query.y >= cp.y - radius
            && query.y <= cp.y + radius
    })
}
