//! Plane geometry predicates used by the layout cost model.
//!
//! Every interval test here is strict: a parameter of exactly 0 or 1
//! (a shared endpoint) counts as no contact. Adjacent edges of a graph
//! legitimately share a vertex, and that alone must never register as
//! a crossing.

/// A point in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// How two segments relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRelation {
    /// No interior contact. Touching only at endpoints counts as separate.
    Separate,
    /// A proper crossing: both intersection parameters strictly in (0, 1).
    Intersect,
    /// Colinear with interior overlap.
    Overlap,
}

/// Projects `q` onto the line through `a` and `b`, returning the
/// parameter `t` with `q = a + t * (b - a)`, or `None` when `q` is off
/// the line. A segment degenerate along an axis only admits points that
/// share that coordinate.
fn project(a: Point, b: Point, q: Point) -> Option<f64> {
    let mut xt = None;
    if a.x != b.x {
        xt = Some((q.x - a.x) / (b.x - a.x));
    } else if q.x != a.x {
        return None;
    }
    let mut yt = None;
    if a.y != b.y {
        yt = Some((q.y - a.y) / (b.y - a.y));
    } else if q.y != a.y {
        return None;
    }
    match (xt, yt) {
        (None, t) => t,
        (t, None) => t,
        (Some(s), Some(t)) if s == t => Some(s),
        _ => None,
    }
}

/// Classifies the segments `p0..p1` and `p2..p3` by solving the 2x2
/// system for the intersection parameters along each segment.
///
/// A zero determinant means the segments are parallel; they overlap iff
/// some endpoint of one projects strictly inside the other. Otherwise
/// they intersect iff both parameters lie strictly inside (0, 1), so
/// segments that merely touch at an endpoint stay [`SegmentRelation::Separate`].
pub fn segments_intersect(p0: Point, p1: Point, p2: Point, p3: Point) -> SegmentRelation {
    let dx1 = p1.x - p0.x;
    let dy1 = p1.y - p0.y;
    let dx2 = p3.x - p2.x;
    let dy2 = p3.y - p2.y;
    let det = dx1 * dy2 - dx2 * dy1;
    if det == 0.0 {
        let params = [
            project(p0, p1, p2),
            project(p0, p1, p3),
            project(p2, p3, p0),
            project(p2, p3, p1),
        ];
        if params.iter().flatten().any(|&t| t > 0.0 && t < 1.0) {
            return SegmentRelation::Overlap;
        }
        return SegmentRelation::Separate;
    }
    let s = (-dy1 * (p0.x - p2.x) + dx1 * (p0.y - p2.y)) / det;
    let t = (dx2 * (p0.y - p2.y) - dy2 * (p0.x - p2.x)) / det;
    if s > 0.0 && s < 1.0 && t > 0.0 && t < 1.0 {
        SegmentRelation::Intersect
    } else {
        SegmentRelation::Separate
    }
}

/// True iff `q` lies strictly between `a` and `b`. Endpoints do not
/// count, and a zero-length segment contains no points at all.
pub fn point_on_segment(a: Point, b: Point, q: Point) -> bool {
    matches!(project(a, b, q), Some(t) if t > 0.0 && t < 1.0)
}

fn dot(a: Point, b: Point, q: Point) -> f64 {
    (b.x - a.x) * (q.x - b.x) + (b.y - a.y) * (q.y - b.y)
}

fn cross(a: Point, b: Point, q: Point) -> f64 {
    (b.x - a.x) * (q.y - a.y) - (b.y - a.y) * (q.x - a.x)
}

/// Euclidean distance from `q` to the closed segment `a..b`.
///
/// Proximity companion to [`point_on_segment`]: the scoring rule uses
/// strict containment, while renderers and clearance checks want the
/// actual distance.
pub fn segment_point_distance(a: Point, b: Point, q: Point) -> f64 {
    if a == b {
        return a.distance(q);
    }
    if dot(a, b, q) > 0.0 {
        return b.distance(q);
    }
    if dot(b, a, q) > 0.0 {
        return a.distance(q);
    }
    (cross(a, b, q) / a.distance(b)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let r = segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0));
        assert_eq!(r, SegmentRelation::Intersect);
    }

    #[test]
    fn test_shared_endpoint_is_separate() {
        let r = segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0));
        assert_eq!(r, SegmentRelation::Separate);
    }

    #[test]
    fn test_t_junction_is_separate() {
        // Endpoint of the vertical segment lies on the horizontal one:
        // the touching parameter is exactly 0, so no violation.
        let r = segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 5.0));
        assert_eq!(r, SegmentRelation::Separate);
    }

    #[test]
    fn test_colinear_overlap() {
        let r = segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0));
        assert_eq!(r, SegmentRelation::Overlap);
    }

    #[test]
    fn test_colinear_disjoint_is_separate() {
        let r = segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0));
        assert_eq!(r, SegmentRelation::Separate);
    }

    #[test]
    fn test_parallel_offset_is_separate() {
        let r = segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0));
        assert_eq!(r, SegmentRelation::Separate);
    }

    #[test]
    fn test_contained_segment_overlaps() {
        let r = segments_intersect(p(0.0, 0.0), p(4.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert_eq!(r, SegmentRelation::Overlap);
    }

    #[test]
    fn test_point_on_segment_interior() {
        assert!(point_on_segment(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0)));
        assert!(point_on_segment(p(0.0, 0.0), p(2.0, 2.0), p(1.0, 1.0)));
    }

    #[test]
    fn test_point_on_segment_endpoint_excluded() {
        assert!(!point_on_segment(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 0.0)));
        assert!(!point_on_segment(p(0.0, 0.0), p(2.0, 0.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_point_off_segment() {
        assert!(!point_on_segment(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0)));
        assert!(!point_on_segment(p(0.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn test_degenerate_segment_contains_nothing() {
        assert!(!point_on_segment(p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)));
        assert!(!point_on_segment(p(1.0, 1.0), p(1.0, 1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_segment_point_distance_perpendicular() {
        let d = segment_point_distance(p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0));
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_point_distance_past_endpoints() {
        let d = segment_point_distance(p(0.0, 0.0), p(4.0, 0.0), p(7.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
        let d = segment_point_distance(p(0.0, 0.0), p(4.0, 0.0), p(-3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_point_distance_degenerate() {
        let d = segment_point_distance(p(1.0, 1.0), p(1.0, 1.0), p(4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_classification_is_symmetric(
            ax in 0i32..10, ay in 0i32..10,
            bx in 0i32..10, by in 0i32..10,
            cx in 0i32..10, cy in 0i32..10,
            dx in 0i32..10, dy in 0i32..10,
        ) {
            let (a, b) = (p(ax as f64, ay as f64), p(bx as f64, by as f64));
            let (c, d) = (p(cx as f64, cy as f64), p(dx as f64, dy as f64));
            prop_assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
        }

        #[test]
        fn prop_shared_endpoint_never_intersects(
            ax in 0i32..10, ay in 0i32..10,
            bx in 0i32..10, by in 0i32..10,
            cx in 0i32..10, cy in 0i32..10,
        ) {
            let (a, b, c) = (p(ax as f64, ay as f64), p(bx as f64, by as f64), p(cx as f64, cy as f64));
            prop_assert_ne!(segments_intersect(a, b, b, c), SegmentRelation::Intersect);
        }
    }
}
