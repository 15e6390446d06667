//! Degree elevation and reduction for Bézier control polygons.
//!
//! Elevation rewrites a degree-`d` control polygon as the degree-`d + 1`
//! polygon of the same curve; it is exact up to floating-point rounding.
//! Reduction inverts one elevation step. It reproduces the lower-degree
//! polygon when the input was itself produced by elevation, and is a lossy
//! approximation for any other input. Callers must not assume shape
//! preservation across a reduction.

use crate::core::Point3;
use crate::error::NetError;

/// One elevation step: degree `d` to `d + 1`.
///
/// Endpoints are preserved; interior points follow
/// `Q[i] = (i / (d + 1)) * P[i - 1] + (1 - i / (d + 1)) * P[i]`.
///
/// # Panics
/// Panics if `points` is empty. The control-net types guarantee at least one
/// point by construction.
#[must_use]
pub fn elevated_once(points: &[Point3]) -> Vec<Point3> {
    assert!(!points.is_empty(), "control polygon must not be empty");
    let d = points.len() - 1;

    let mut out = Vec::with_capacity(points.len() + 1);
    out.push(points[0]);
    for i in 1..=d {
        let t = i as f64 / (d + 1) as f64;
        out.push(points[i].lerp(points[i - 1], t));
    }
    out.push(points[d]);
    out
}

/// One reduction step: degree `d` to `d - 1`, the backward inverse of
/// [`elevated_once`].
///
/// Starts from `Q[d - 1] = P[d]` and walks down with
/// `Q[i - 1] = (d * P[i] - (d - i) * Q[i]) / i`, so each output depends only
/// on higher-index inputs and already computed outputs.
///
/// # Errors
/// Returns [`NetError::DegreeUnderflow`] for a degree-zero polygon; a single
/// point cannot be reduced further.
pub fn reduced_once(points: &[Point3]) -> Result<Vec<Point3>, NetError> {
    if points.len() < 2 {
        return Err(NetError::DegreeUnderflow);
    }
    let d = points.len() - 1;

    let mut out = vec![Point3::ORIGIN; d];
    out[d - 1] = points[d];
    for i in (1..d).rev() {
        let v = (points[i].to_vec3() * d as f64 - out[i].to_vec3() * (d - i) as f64) / i as f64;
        out[i - 1] = Point3::from(v);
    }
    Ok(out)
}

/// Elevate by `steps` degrees, one step at a time.
///
/// The degree is re-derived from the current point count on every step, since
/// each step lengthens the polygon by one. `steps = 0` returns the input
/// unchanged.
#[must_use]
pub fn elevated(points: &[Point3], steps: usize) -> Vec<Point3> {
    let mut out = points.to_vec();
    for _ in 0..steps {
        out = elevated_once(&out);
    }
    log::debug!(
        "elevated control polygon by {steps} step(s): {} -> {} points",
        points.len(),
        out.len()
    );
    out
}

/// Reduce by `steps` degrees, one step at a time.
///
/// Each step compounds the approximation error of [`reduced_once`]; no
/// closed-form exactness holds beyond the single-step inverse-of-elevation
/// case. `steps = 0` returns the input unchanged.
///
/// # Errors
/// Returns [`NetError::DegreeUnderflow`] if any step would reduce a
/// degree-zero polygon. The input is returned untouched in that case.
pub fn reduced(points: &[Point3], steps: usize) -> Result<Vec<Point3>, NetError> {
    if points.len() <= steps {
        return Err(NetError::DegreeUnderflow);
    }
    let mut out = points.to_vec();
    for _ in 0..steps {
        out = reduced_once(&out)?;
    }
    log::debug!(
        "reduced control polygon by {steps} step(s): {} -> {} points",
        points.len(),
        out.len()
    );
    Ok(out)
}
