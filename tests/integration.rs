//! End-to-end flows through the public API: edit, degree change, pick,
//! flush, draw.

use bezier_engine::{
    BezierCurve3, DrawTarget, NetError, Point3, PointBuffer, RectBezierSurface, RenderCache,
    RenderDispatcher, Tolerance, degree,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// In-memory stand-in for a GPU vertex buffer.
#[derive(Debug, Default)]
struct MirrorBuffer {
    data: Vec<Point3>,
    uploads: usize,
}

impl PointBuffer for MirrorBuffer {
    fn upload(&mut self, points: &[Point3]) {
        self.data.clear();
        self.data.extend_from_slice(points);
        self.uploads += 1;
    }
}

#[derive(Debug, Default)]
struct CountingTarget {
    patch_draws: usize,
    overlay_draws: usize,
}

impl DrawTarget for CountingTarget {
    fn set_tessellation_level(&mut self, _level: f32) {}
    fn draw_patches(&mut self, _vertex_count: usize, _patch_size: usize) {
        self.patch_draws += 1;
    }
    fn draw_line_strip(&mut self, _vertex_count: usize) {
        self.overlay_draws += 1;
    }
    fn draw_points(&mut self, _vertex_count: usize) {
        self.overlay_draws += 1;
    }
}

/// De Casteljau evaluation of a Bézier control polygon at parameter `t`.
fn eval_bezier(points: &[Point3], t: f64) -> Point3 {
    let mut work = points.to_vec();
    while work.len() > 1 {
        for i in 0..work.len() - 1 {
            work[i] = work[i].lerp(work[i + 1], t);
        }
        work.pop();
    }
    work[0]
}

fn random_polygon(rng: &mut StdRng, count: usize) -> Vec<Point3> {
    (0..count)
        .map(|_| {
            Point3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
        .collect()
}

#[test]
fn elevation_preserves_the_curve_on_random_nets() {
    let mut rng = StdRng::seed_from_u64(7);

    for deg in 1..8 {
        let original = random_polygon(&mut rng, deg + 1);
        let elevated = degree::elevated(&original, 1);

        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let before = eval_bezier(&original, t);
            let after = eval_bezier(&elevated, t);
            assert!(
                before.distance_to(after) < 1e-9,
                "degree {deg}: curve moved at t = {t}"
            );
        }
    }
}

#[test]
fn reduction_recovers_elevated_nets_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(11);
    let tol = Tolerance::LOOSE;

    for deg in 1..8 {
        let original = random_polygon(&mut rng, deg + 1);
        let reduced = degree::reduced(&degree::elevated(&original, 1), 1).unwrap();

        assert_eq!(reduced.len(), original.len());
        for (got, want) in reduced.iter().zip(&original) {
            assert!(tol.approx_eq_point3(*got, *want), "{got:?} != {want:?}");
        }
    }
}

#[test]
fn edit_flush_draw_frame_loop() {
    // The viewer's per-frame cycle: pick a point under the cursor, drag it,
    // then render. Uploads must track dirty transitions, not frames.
    let curve = BezierCurve3::from_points(vec![
        Point3::new(-0.5, -0.5, 0.0),
        Point3::new(-0.3, 0.25, 0.0),
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(0.0, -0.75, 0.0),
        Point3::new(0.5, -0.5, 0.0),
    ])
    .unwrap();

    let mut cache = RenderCache::new(curve);
    let mut buffer = MirrorBuffer::default();
    let mut target = CountingTarget::default();
    let dispatcher = RenderDispatcher::new();

    // Frame 1: nothing edited yet, first render uploads the initial net.
    dispatcher.render(&mut cache, &mut buffer, &mut target);
    assert_eq!(buffer.uploads, 1);

    // Frames 2-4: cursor drags control point 2 across three frames.
    for (frame, x) in [0.51_f64, 0.55, 0.6].iter().enumerate() {
        let cursor = Point3::new(*x, 0.5, 0.0);
        if let Some(i) = cache.net().pick(cursor, 0.2) {
            cache.net_mut().set_point(i, cursor).unwrap();
        }
        dispatcher.render(&mut cache, &mut buffer, &mut target);
        assert_eq!(buffer.uploads, 2 + frame);
    }
    assert_eq!(buffer.data[2], Point3::new(0.6, 0.5, 0.0));

    // Frames with no edits: no further uploads, draws still issued.
    dispatcher.render(&mut cache, &mut buffer, &mut target);
    dispatcher.render(&mut cache, &mut buffer, &mut target);
    assert_eq!(buffer.uploads, 4);
    assert_eq!(target.patch_draws, 6);
    assert_eq!(cache.stats().uploads, 4);
    assert_eq!(cache.stats().skipped_flushes, 2);
}

#[test]
fn degree_change_through_cache_resizes_the_mirror() {
    let curve = BezierCurve3::from_points(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ])
    .unwrap();
    let mut cache = RenderCache::new(curve);
    let mut buffer = MirrorBuffer::default();

    cache.flush(&mut buffer);
    assert_eq!(buffer.data.len(), 3);

    cache.net_mut().elevate_order(2);
    cache.flush(&mut buffer);
    assert_eq!(buffer.data.len(), 5);
    assert_eq!(buffer.data.first(), Some(&Point3::new(0.0, 0.0, 0.0)));
    assert_eq!(buffer.data.last(), Some(&Point3::new(2.0, 0.0, 0.0)));

    cache.net_mut().lower_order(2).unwrap();
    cache.flush(&mut buffer);
    assert_eq!(buffer.data.len(), 3);
}

#[test]
fn failed_operations_do_not_dirty_the_mirror_contents() {
    let mut cache = RenderCache::new(BezierCurve3::with_order(2));
    let mut buffer = MirrorBuffer::default();
    cache.flush(&mut buffer);
    let before = buffer.data.clone();

    // The mutable access marks the cache dirty, but the failed call leaves
    // the net unchanged, so the re-upload mirrors identical contents.
    assert_eq!(
        cache.net_mut().set_point(9, Point3::ORIGIN),
        Err(NetError::IndexOutOfRange { index: 9, count: 3 })
    );
    cache.flush(&mut buffer);
    assert_eq!(buffer.data, before);
}

#[test]
fn surface_demo_setup_round_trips_through_render() {
    // The rect-surface demo builds a 6x4 patch and lifts points to random
    // heights before rendering.
    let mut rng = StdRng::seed_from_u64(3);
    let (order_u, order_v) = (6, 4);
    let mut cache = RenderCache::new(RectBezierSurface::new(order_u, order_v));

    for u in 0..=order_u {
        for v in 0..=order_v {
            let p = Point3::new(u as f64, v as f64, rng.random_range(0.0..2.0));
            cache.net_mut().set_point(u, v, p).unwrap();
        }
    }

    let mut buffer = MirrorBuffer::default();
    let mut target = CountingTarget::default();
    RenderDispatcher::with_precision(1.0).render(&mut cache, &mut buffer, &mut target);

    assert_eq!(buffer.uploads, 1);
    assert_eq!(buffer.data.len(), (order_u + 1) * (order_v + 1));
    // 35 control points exceed the patch-size cap, so only the overlay draws.
    assert_eq!(target.patch_draws, 0);
    assert_eq!(target.overlay_draws, 2);
    assert_eq!(
        cache.net().point(1, 1).unwrap().to_array()[..2],
        [1.0, 1.0]
    );
}
