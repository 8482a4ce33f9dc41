//! Wedge geometry.
//!
//! A wedge is the ring segment between the inner hole and the outer radius,
//! bounded by two angles. Angles are in radians, measured from the positive x
//! axis towards the positive y axis (clockwise on screen, since y points down).
//!
//! Path construction is pure: [`wedge_path`] returns a [`WedgePath`] that a
//! [`Canvas`](crate::Canvas) fills or strokes.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::layout::Point;
use crate::palette::{WedgeIndex, WEDGE_COUNT};

/// Radius of the center hole as a fraction of the canvas side
pub const INTERIOR_HOLE_FRACTION: f32 = 1.0 / 6.0;

/// Outer diameter as a fraction of the canvas side; the rest is room for shadows
pub const PADDING_FOR_SHADOW: f32 = 0.95;

/// Angular size of one wedge
pub fn angle_step() -> f32 {
    TAU / WEDGE_COUNT as f32
}

/// Outer radius of the wheel drawn on a `size` canvas
pub fn wheel_radius(size: f32) -> f32 {
    size * PADDING_FOR_SHADOW / 2.0
}

/// Radius of the center hole on a `size` canvas
pub fn hole_radius(size: f32) -> f32 {
    size * INTERIOR_HOLE_FRACTION
}

/// Angular extent of a wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeSpan {
    pub start: f32,
    pub end: f32,
}

impl WedgeSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Span of palette wedge `index`.
    ///
    /// Both edges are computed from the index rather than accumulated, so
    /// neighbouring wedges share their boundary exactly.
    pub fn of(index: WedgeIndex) -> Self {
        let step = angle_step();
        let i = index.get() as f32;
        Self::new(i * step, (i + 1.0) * step)
    }

    /// Signed angle swept from `start` to `end`
    pub fn sweep(&self) -> f32 {
        self.end - self.start
    }

    pub fn mid(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Which way an arc travels in angle space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// From smaller to larger angles
    Increasing,
    /// From larger to smaller angles
    Decreasing,
}

impl ArcDirection {
    fn of_sweep(sweep: f32) -> Self {
        if sweep >= 0.0 {
            ArcDirection::Increasing
        } else {
            ArcDirection::Decreasing
        }
    }

    fn reversed(self) -> Self {
        match self {
            ArcDirection::Increasing => ArcDirection::Decreasing,
            ArcDirection::Decreasing => ArcDirection::Increasing,
        }
    }
}

/// Signed sweep of the short way from `from` to `to`, in `(-PI, PI]`
pub fn shortest_sweep(from: f32, to: f32) -> f32 {
    let sweep = (to - from).rem_euclid(TAU);
    if sweep > PI {
        sweep - TAU
    } else {
        sweep
    }
}

/// One step of a wedge outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc; the current point is already at the arc's start.
    ///
    /// `end` may lie outside `[0, TAU)` so that `end - start` is the sweep.
    Arc {
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        direction: ArcDirection,
    },
    Close,
}

/// Closed outline of a single wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgePath {
    segments: Vec<PathSegment>,
}

impl WedgePath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Convert to a tiny-skia path, flattening arcs into cubic Béziers.
    ///
    /// Returns `None` if tiny-skia rejects the geometry (non-finite points).
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
                PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
                PathSegment::Arc {
                    center,
                    radius,
                    start,
                    end,
                    direction,
                } => push_arc(&mut pb, center, radius, start, end, direction),
                PathSegment::Close => pb.close(),
            }
        }
        pb.finish()
    }
}

/// Point on the circle of `radius` around `center` at `angle`
pub fn polar(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Build the outline of the wedge between `start_angle` and `end_angle`.
///
/// The path starts on the inner hole, runs out to the outer circle, follows
/// the outer arc to `end_angle`, comes back in to the hole and follows the
/// inner arc back to the start. Both arcs take the short way between the two
/// angles, whichever order they are given in.
pub fn wedge_path(start_angle: f32, end_angle: f32, size: f32, radius: f32) -> WedgePath {
    let center = Point::new(size / 2.0, size / 2.0);
    let inner = hole_radius(size);
    let sweep = shortest_sweep(start_angle, end_angle);
    let end_angle = start_angle + sweep;
    let direction = ArcDirection::of_sweep(sweep);

    let segments = vec![
        PathSegment::MoveTo(polar(center, inner, start_angle)),
        PathSegment::LineTo(polar(center, radius, start_angle)),
        PathSegment::Arc {
            center,
            radius,
            start: start_angle,
            end: end_angle,
            direction,
        },
        PathSegment::LineTo(polar(center, inner, end_angle)),
        PathSegment::Arc {
            center,
            radius: inner,
            start: end_angle,
            end: start_angle,
            direction: direction.reversed(),
        },
        PathSegment::Close,
    ];

    WedgePath { segments }
}

/// Append an arc as cubic segments of at most a quarter turn each.
fn push_arc(
    pb: &mut tiny_skia::PathBuilder,
    center: Point,
    radius: f32,
    start: f32,
    end: f32,
    direction: ArcDirection,
) {
    let sweep = match direction {
        ArcDirection::Increasing => (end - start).abs(),
        ArcDirection::Decreasing => -(end - start).abs(),
    };
    if sweep == 0.0 {
        return;
    }
    let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let theta = sweep / pieces as f32;
    // Control point distance for a cubic approximating `theta` of arc
    let k = 4.0 / 3.0 * (theta / 4.0).tan();

    let mut a0 = start;
    for i in 0..pieces {
        let a1 = if i + 1 == pieces { start + sweep } else { a0 + theta };
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        let p3 = polar(center, radius, a1);
        pb.cubic_to(
            center.x + radius * (c0 - k * s0),
            center.y + radius * (s0 + k * c0),
            center.x + radius * (c1 + k * s1),
            center.y + radius * (s1 - k * c1),
            p3.x,
            p3.y,
        );
        a0 = a1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_spans_partition_full_circle() {
        let spans: Vec<_> = WedgeIndex::all().map(WedgeSpan::of).collect();
        assert_eq!(spans[0].start, 0.0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: f32 = spans.iter().map(WedgeSpan::sweep).sum();
        assert!((total - TAU).abs() < EPS);
        assert!((spans[WEDGE_COUNT - 1].end - TAU).abs() < EPS);
    }

    #[test]
    fn test_angle_step_for_eleven_wedges() {
        assert!((angle_step() - 0.571_198_4).abs() < 1e-5);
    }

    #[test]
    fn test_wedge_path_shape() {
        let size = 200.0;
        let radius = wheel_radius(size);
        let path = wedge_path(0.0, FRAC_PI_2, size, radius);
        let segs = path.segments();
        assert_eq!(segs.len(), 6);

        let center = Point::new(100.0, 100.0);
        match segs[0] {
            PathSegment::MoveTo(p) => assert!(close(p, Point::new(100.0 + size / 6.0, 100.0))),
            other => panic!("expected MoveTo, got {:?}", other),
        }
        match segs[1] {
            PathSegment::LineTo(p) => assert!(close(p, Point::new(100.0 + radius, 100.0))),
            other => panic!("expected LineTo, got {:?}", other),
        }
        match segs[3] {
            PathSegment::LineTo(p) => assert!(close(p, polar(center, size / 6.0, FRAC_PI_2))),
            other => panic!("expected LineTo, got {:?}", other),
        }
        assert_eq!(segs[5], PathSegment::Close);
    }

    #[test]
    fn test_arcs_take_short_way_for_either_order() {
        for (start, end) in [(0.2_f32, 0.8_f32), (0.8, 0.2)] {
            let path = wedge_path(start, end, 100.0, 40.0);
            let arcs: Vec<_> = path
                .segments()
                .iter()
                .filter_map(|s| match *s {
                    PathSegment::Arc {
                        start,
                        end,
                        direction,
                        ..
                    } => Some((start, end, direction)),
                    _ => None,
                })
                .collect();
            assert_eq!(arcs.len(), 2);
            for (s, e, dir) in arcs {
                assert!(((e - s).abs() - 0.6).abs() < EPS);
                let expected = if e >= s {
                    ArcDirection::Increasing
                } else {
                    ArcDirection::Decreasing
                };
                assert_eq!(dir, expected);
            }
        }
    }

    #[test]
    fn test_shortest_sweep_wraps_around_zero() {
        assert!((shortest_sweep(0.2, 0.8) - 0.6).abs() < EPS);
        assert!((shortest_sweep(0.8, 0.2) + 0.6).abs() < EPS);
        assert!((shortest_sweep(TAU - 0.2, 0.2) - 0.4).abs() < EPS);
        assert!((shortest_sweep(0.2, TAU - 0.2) + 0.4).abs() < EPS);
        assert!((shortest_sweep(0.0, PI) - PI).abs() < EPS);
    }

    #[test]
    fn test_wrapping_wedge_takes_short_way() {
        let size = 100.0;
        let path = wedge_path(TAU - 0.2, 0.2, size, wheel_radius(size));
        for segment in path.segments() {
            if let PathSegment::Arc {
                start,
                end,
                direction,
                ..
            } = *segment
            {
                assert!(((end - start).abs() - 0.4).abs() < EPS);
                assert_eq!(direction, ArcDirection::of_sweep(end - start));
            }
        }
        // The inner arc ends where the path started
        match (path.segments()[0], path.segments()[4]) {
            (PathSegment::MoveTo(p), PathSegment::Arc { center, radius, end, .. }) => {
                assert!(close(p, polar(center, radius, end)));
            }
            other => panic!("unexpected segments {:?}", other),
        }

        let bounds = path.to_skia().expect("wedge path should be drawable").bounds();
        // Hugs the positive x axis instead of wrapping round the ring
        assert!(bounds.left() >= 50.0 + hole_radius(size) * 0.2_f32.cos() - 0.5);
    }

    #[test]
    fn test_skia_path_stays_within_ring() {
        let size = 100.0;
        let radius = wheel_radius(size);
        let path = wedge_path(0.0, angle_step(), size, radius)
            .to_skia()
            .expect("wedge path should be drawable");
        let b = path.bounds();
        // Short arc: bounds hug the first ~33 degrees, right of center
        assert!(b.left() >= 50.0 + hole_radius(size) * angle_step().cos() - 0.5);
        assert!(b.right() <= 50.0 + radius + 0.5);
        assert!(b.top() >= 50.0 - 0.5);
        assert!(b.bottom() <= 50.0 + radius * angle_step().sin() + 0.5);
    }
}
