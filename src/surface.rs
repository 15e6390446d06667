//! Rectangular tensor-product Bézier surface control net.

use crate::core::Point3;
use crate::error::NetError;
use crate::pick::pick_control_point;

/// A `(u, v)`-indexed grid of control points defining one tensor-product
/// surface patch of bidegree `(order_u, order_v)`.
///
/// Storage is a single flat vector of `(order_u + 1) * (order_v + 1)` points,
/// row-major in `u`: `index(u, v) = u * (order_v + 1) + v`. Degree change is
/// defined only for curves; the surface net is edited point by point.
#[derive(Debug, Clone, PartialEq)]
pub struct RectBezierSurface {
    order_u: usize,
    order_v: usize,
    points: Vec<Point3>,
}

impl RectBezierSurface {
    /// Creates a square patch of bidegree `(order_uv, order_uv)` with all
    /// points at the origin.
    #[must_use]
    pub fn square(order_uv: usize) -> Self {
        Self::new(order_uv, order_uv)
    }

    /// Creates a patch of bidegree `(order_u, order_v)` with all points at
    /// the origin.
    #[must_use]
    pub fn new(order_u: usize, order_v: usize) -> Self {
        Self {
            order_u,
            order_v,
            points: vec![Point3::ORIGIN; (order_u + 1) * (order_v + 1)],
        }
    }

    /// Builds a patch from nested rows of points. The outer length fixes
    /// `order_u + 1`; the longest row fixes `order_v + 1`. Shorter rows are
    /// zero-padded on the right.
    ///
    /// # Errors
    /// Returns [`NetError::EmptyControlNet`] when there are no rows or every
    /// row is empty, since no order can be derived.
    pub fn from_rows(rows: &[Vec<Point3>]) -> Result<Self, NetError> {
        let count_u = rows.len();
        let count_v = rows.iter().map(Vec::len).max().unwrap_or(0);
        if count_u == 0 || count_v == 0 {
            return Err(NetError::EmptyControlNet);
        }

        let mut points = vec![Point3::ORIGIN; count_u * count_v];
        for (u, row) in rows.iter().enumerate() {
            for (v, p) in row.iter().enumerate() {
                points[u * count_v + v] = *p;
            }
        }

        Ok(Self {
            order_u: count_u - 1,
            order_v: count_v - 1,
            points,
        })
    }

    #[must_use]
    pub fn order_u(&self) -> usize {
        self.order_u
    }

    #[must_use]
    pub fn order_v(&self) -> usize {
        self.order_v
    }

    #[must_use]
    pub fn orders(&self) -> (usize, usize) {
        (self.order_u, self.order_v)
    }

    /// Number of control points, as consumed by a draw call.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Flat point sequence, row-major in `u`.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    fn index(&self, u: usize, v: usize) -> Result<usize, NetError> {
        if u > self.order_u || v > self.order_v {
            return Err(NetError::GridIndexOutOfRange {
                u,
                v,
                order_u: self.order_u,
                order_v: self.order_v,
            });
        }
        Ok(u * (self.order_v + 1) + v)
    }

    /// # Errors
    /// Returns [`NetError::GridIndexOutOfRange`] when `u > order_u` or
    /// `v > order_v`.
    pub fn point(&self, u: usize, v: usize) -> Result<Point3, NetError> {
        Ok(self.points[self.index(u, v)?])
    }

    /// Replaces a single control point.
    ///
    /// # Errors
    /// Returns [`NetError::GridIndexOutOfRange`] when `u > order_u` or
    /// `v > order_v`; the net is left unchanged.
    pub fn set_point(&mut self, u: usize, v: usize, p: Point3) -> Result<(), NetError> {
        let i = self.index(u, v)?;
        self.points[i] = p;
        Ok(())
    }

    /// First control point whose XY tolerance box contains `query`, scanning
    /// the flat sequence in ascending index order.
    #[must_use]
    pub fn pick(&self, query: Point3, radius: f64) -> Option<usize> {
        pick_control_point(&self.points, query, radius)
    }
}
