//! Bézier curve control net.

use crate::core::Point3;
use crate::degree;
use crate::error::NetError;
use crate::pick::pick_control_point;

/// An ordered control polygon defining one parametric Bézier curve of degree
/// `point count - 1`.
///
/// The net owns its point sequence exclusively and is mutated in place. The
/// curve itself is evaluated elsewhere (GPU tessellation); this type only
/// maintains the control points and their degree-change algebra.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve3 {
    points: Vec<Point3>,
}

impl BezierCurve3 {
    /// Creates a degree-`order` net with all `order + 1` points at the origin.
    #[must_use]
    pub fn with_order(order: usize) -> Self {
        Self {
            points: vec![Point3::ORIGIN; order + 1],
        }
    }

    /// Wraps an explicit control polygon; the degree is `points.len() - 1`.
    ///
    /// # Errors
    /// Returns [`NetError::EmptyControlNet`] for an empty sequence.
    pub fn from_points(points: Vec<Point3>) -> Result<Self, NetError> {
        if points.is_empty() {
            return Err(NetError::EmptyControlNet);
        }
        Ok(Self { points })
    }

    /// Degree of the represented curve. A single-point net is a degenerate
    /// zero-degree curve.
    #[must_use]
    pub fn order(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of control points, as consumed by a draw call.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// # Errors
    /// Returns [`NetError::IndexOutOfRange`] when `i > order`.
    pub fn point(&self, i: usize) -> Result<Point3, NetError> {
        self.points
            .get(i)
            .copied()
            .ok_or(NetError::IndexOutOfRange {
                index: i,
                count: self.points.len(),
            })
    }

    /// Replaces a single control point.
    ///
    /// # Errors
    /// Returns [`NetError::IndexOutOfRange`] when `i > order`; the net is
    /// left unchanged.
    pub fn set_point(&mut self, i: usize, p: Point3) -> Result<(), NetError> {
        let count = self.points.len();
        let slot = self
            .points
            .get_mut(i)
            .ok_or(NetError::IndexOutOfRange { index: i, count })?;
        *slot = p;
        Ok(())
    }

    /// Raises the degree by `steps` without changing the represented curve.
    /// `steps = 0` leaves the polygon untouched.
    pub fn elevate_order(&mut self, steps: usize) {
        self.points = degree::elevated(&self.points, steps);
    }

    /// Lowers the degree by `steps`, approximating the curve. Lossy unless
    /// the net was itself produced by elevation; see [`degree::reduced`].
    ///
    /// # Errors
    /// Returns [`NetError::DegreeUnderflow`] if `steps` exceeds the current
    /// degree; the net is left unchanged.
    pub fn lower_order(&mut self, steps: usize) -> Result<(), NetError> {
        self.points = degree::reduced(&self.points, steps)?;
        Ok(())
    }

    /// First control point whose XY tolerance box contains `query`, scanning
    /// in ascending index order. See [`pick_control_point`].
    #[must_use]
    pub fn pick(&self, query: Point3, radius: f64) -> Option<usize> {
        pick_control_point(&self.points, query, radius)
    }
}
