//! Render boundary: the dirty-tracked GPU mirror and the draw dispatcher.
//!
//! The GPU side of the renderer (buffer objects, shader programs, the
//! tessellation stages that evaluate the curve) lives behind two narrow
//! traits. [`PointBuffer`] replaces a GPU-resident vertex buffer's contents
//! in full; [`DrawTarget`] issues draw calls against whatever buffer the
//! renderer has bound. The core only decides *when* an upload happens and
//! *what* gets drawn.
//!
//! # Example
//! ```ignore
//! let mut cache = RenderCache::new(BezierCurve3::with_order(3));
//! cache.net_mut().set_point(1, Point3::new(0.5, 1.0, 0.0))?;
//!
//! let dispatcher = RenderDispatcher::new();
//! dispatcher.render(&mut cache, &mut vbo, &mut gl);
//! ```

use crate::core::Point3;
use crate::curve::BezierCurve3;
use crate::surface::RectBezierSurface;

/// Largest patch size the dispatcher will hand to [`DrawTarget::draw_patches`].
/// GL only guarantees 32 patch vertices, which also caps the drawable curve
/// order.
pub const MAX_PATCH_POINTS: usize = 32;

/// Tessellation precision used when none is configured, matching the
/// viewer's default outer tessellation level.
pub const DEFAULT_TESSELLATION_LEVEL: f32 = 50.0;

/// A control net viewed as the flat point sequence a renderer consumes.
pub trait ControlNet {
    fn control_points(&self) -> &[Point3];
}

impl ControlNet for BezierCurve3 {
    fn control_points(&self) -> &[Point3] {
        self.points()
    }
}

impl ControlNet for RectBezierSurface {
    fn control_points(&self) -> &[Point3] {
        self.points()
    }
}

/// GPU-resident vertex buffer boundary. `upload` replaces the buffer's
/// contents in full; partial updates are an optimization the implementation
/// may offer but the core never requires.
pub trait PointBuffer {
    fn upload(&mut self, points: &[Point3]);
}

/// Draw-call boundary. The implementation is responsible for having the
/// right buffer and shader program bound; the core only supplies vertex
/// counts and the declared patch size.
pub trait DrawTarget {
    /// Forwards the tessellation precision ahead of a patch draw (the outer
    /// tessellation level uniform).
    fn set_tessellation_level(&mut self, level: f32);
    fn draw_patches(&mut self, vertex_count: usize, patch_size: usize);
    fn draw_line_strip(&mut self, vertex_count: usize);
    fn draw_points(&mut self, vertex_count: usize);
}

// ─────────────────────────────────────────────────────────────────────────────
// RenderCache
// ─────────────────────────────────────────────────────────────────────────────

/// Upload statistics for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCacheStats {
    /// Number of flushes that performed an upload.
    pub uploads: usize,
    /// Number of flushes skipped because the mirror was already current.
    pub skipped_flushes: usize,
}

/// Dirty-flag wrapper keeping a GPU point buffer consistent with a control
/// net.
///
/// The cache owns the net and intercepts every mutation path: [`Self::net`]
/// hands out shared access, [`Self::net_mut`] marks the mirror stale before
/// handing out exclusive access. A freshly wrapped net is dirty, so the first
/// flush always uploads. Mutations between flushes coalesce into a single
/// upload of the latest state.
///
/// Marking on `&mut` access is deliberately coarse: a zero-step degree change
/// routed through the cache still re-uploads once, which mirrors the
/// historical "always signal update" behavior of the editing loop.
#[derive(Debug)]
pub struct RenderCache<N> {
    net: N,
    dirty: bool,
    uploads: usize,
    skipped_flushes: usize,
}

impl<N: ControlNet> RenderCache<N> {
    #[must_use]
    pub fn new(net: N) -> Self {
        Self {
            net,
            dirty: true,
            uploads: 0,
            skipped_flushes: 0,
        }
    }

    #[must_use]
    pub fn net(&self) -> &N {
        &self.net
    }

    /// Exclusive access to the wrapped net. The mirror is marked stale
    /// unconditionally; any `&mut` access may mutate.
    pub fn net_mut(&mut self) -> &mut N {
        self.dirty = true;
        &mut self.net
    }

    #[must_use]
    pub fn into_inner(self) -> N {
        self.net
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the mirror stale. Idempotent; the next flush uploads once.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Uploads the net's current points if the mirror is stale. Returns
    /// whether an upload happened. Exactly one upload occurs per dirty
    /// transition.
    pub fn flush(&mut self, buffer: &mut impl PointBuffer) -> bool {
        if !self.dirty {
            self.skipped_flushes += 1;
            return false;
        }
        let points = self.net.control_points();
        buffer.upload(points);
        self.dirty = false;
        self.uploads += 1;
        log::trace!("render cache uploaded {} control points", points.len());
        true
    }

    #[must_use]
    pub fn stats(&self) -> RenderCacheStats {
        RenderCacheStats {
            uploads: self.uploads,
            skipped_flushes: self.skipped_flushes,
        }
    }

    /// Resets upload counters without touching the dirty flag.
    pub fn reset_counters(&mut self) {
        self.uploads = 0;
        self.skipped_flushes = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RenderDispatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Issues the per-frame draw sequence for one control net: flush the cache,
/// draw the tessellated patch, then overlay the control polygon as a line
/// strip and its points.
///
/// Nets with fewer than two points are flushed but not drawn. A net larger
/// than [`MAX_PATCH_POINTS`] keeps its control polygon overlay but skips the
/// patch draw rather than issuing one the driver may reject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderDispatcher {
    precision: f32,
}

impl RenderDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_TESSELLATION_LEVEL)
    }

    #[must_use]
    pub fn with_precision(precision: f32) -> Self {
        Self { precision }
    }

    #[must_use]
    pub fn precision(&self) -> f32 {
        self.precision
    }

    pub fn set_precision(&mut self, precision: f32) {
        self.precision = precision;
    }

    pub fn render<N: ControlNet>(
        &self,
        cache: &mut RenderCache<N>,
        buffer: &mut impl PointBuffer,
        target: &mut impl DrawTarget,
    ) {
        cache.flush(buffer);

        let count = cache.net().control_points().len();
        if count < 2 {
            return;
        }

        if count <= MAX_PATCH_POINTS {
            target.set_tessellation_level(self.precision);
            target.draw_patches(count, count);
        } else {
            log::warn!("skipping patch draw: {count} control points exceed {MAX_PATCH_POINTS}");
        }

        target.draw_line_strip(count);
        target.draw_points(count);
    }
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
