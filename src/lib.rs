//! Bézier control-net editing core.
//!
//! Models parametric curve and tensor-product surface control nets
//! ([`BezierCurve3`], [`RectBezierSurface`]), the degree elevation/reduction
//! algebra over them ([`degree`]-level free functions), nearest-control-point
//! picking for interactive dragging, and the dirty-tracked [`RenderCache`]
//! that mirrors a net's points into a GPU-resident buffer only when the net
//! changed since the last flush.
//!
//! The GPU itself is out of scope: uploads and draw calls cross the
//! [`PointBuffer`] and [`DrawTarget`] traits, and the tessellation shaders
//! that evaluate the curve live entirely on the other side of them. All
//! operations are synchronous and single-threaded, driven by the render
//! loop: poll input, mutate nets, flush dirty caches, issue draws.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

mod core;
mod curve;
pub mod degree;
mod error;
mod pick;
mod render;
mod surface;

pub use crate::core::{Point3, Tolerance, Vec3};
pub use crate::curve::BezierCurve3;
pub use crate::error::NetError;
pub use crate::pick::{DEFAULT_PICK_RADIUS, pick_control_point};
pub use crate::render::{
    ControlNet, DEFAULT_TESSELLATION_LEVEL, DrawTarget, MAX_PATCH_POINTS, PointBuffer,
    RenderCache, RenderCacheStats, RenderDispatcher,
};
pub use crate::surface::RectBezierSurface;
