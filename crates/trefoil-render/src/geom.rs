//! Plane geometry in screen coordinates.
//!
//! Angles are degrees, measured counter-clockwise from the positive x axis. Screen y grows
//! downwards, so every polar conversion subtracts the sine term; arcs and labels both go through
//! [`polar`] to stay aligned.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Maps any finite angle into `[0, 360)`.
pub fn normalize_angle(deg: f64) -> f64 {
    let a = deg.rem_euclid(360.0);
    // `rem_euclid` can round tiny negatives up to exactly 360.
    if a >= 360.0 { 0.0 } else { a }
}

/// Counter-clockwise sweep from `start` to `end`, in `(0, 360]`.
///
/// An end below the start wraps through 0°; equal angles mean a full turn.
pub fn sweep_between(start: f64, end: f64) -> f64 {
    let diff = normalize_angle(end) - normalize_angle(start);
    if diff <= 0.0 { diff + 360.0 } else { diff }
}

pub fn polar(center: Point, radius: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    point(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// An angular span swept counter-clockwise from `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    /// Normalized start angle.
    pub start: f64,
    /// Normalized end angle.
    pub end: f64,
    pub sweep: f64,
}

impl ArcSpan {
    pub fn between(start: f64, end: f64) -> Self {
        Self {
            start: normalize_angle(start),
            end: normalize_angle(end),
            sweep: sweep_between(start, end),
        }
    }

    /// Splits the span into `parts` equal, contiguous sub-spans in sweep order.
    ///
    /// Boundaries are computed from the parent start so that each sub-span's end is bit-identical
    /// to the next one's start.
    pub fn subdivide(&self, parts: usize) -> Vec<ArcSpan> {
        let parts = parts.max(1);
        let n = parts as f64;
        let boundary = |i: usize| self.sweep * (i as f64) / n;
        (0..parts)
            .map(|i| {
                let from = boundary(i);
                let to = boundary(i + 1);
                ArcSpan {
                    start: normalize_angle(self.start + from),
                    end: normalize_angle(self.start + to),
                    sweep: to - from,
                }
            })
            .collect()
    }

    pub fn mid_angle(&self) -> f64 {
        normalize_angle(self.start + self.sweep / 2.0)
    }

    /// SVG `large-arc-flag` for this span.
    pub fn is_large(&self) -> bool {
        self.sweep > 180.0
    }
}

/// Intersection points of two circles, or `None` when there is no crossing.
///
/// Concentric circles and circles at or beyond tangency yield `None`. The first point lies to
/// the left of the `c1 -> c2` direction in screen coordinates.
pub fn circle_intersections(c1: Point, r1: f64, c2: Point, r2: f64) -> Option<(Point, Point)> {
    let delta = c2 - c1;
    let d = delta.length();
    if !(d.is_finite() && d > 0.0) {
        return None;
    }
    if d >= r1 + r2 || d <= (r1 - r2).abs() {
        return None;
    }

    // Distance from c1 to the chord midpoint, then half the chord length.
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let unit = delta / d;
    let mid = c1 + unit * a;
    let perp = vector(-unit.y, unit.x);
    Some((mid + perp * h, mid - perp * h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(725.0), 5.0);
        assert!(normalize_angle(-1e-15) < 360.0);
    }

    #[test]
    fn sweep_handles_wraparound() {
        assert_eq!(sweep_between(49.0, 251.0), 202.0);
        assert_eq!(sweep_between(289.0, 131.0), 202.0);
        assert_eq!(sweep_between(168.0, 12.0), 204.0);
        assert_eq!(sweep_between(10.0, 10.0), 360.0);
    }

    #[test]
    fn polar_flips_the_y_axis() {
        let c = point(100.0, 100.0);
        let top = polar(c, 10.0, 90.0);
        assert!(close(top.x, 100.0) && close(top.y, 90.0));
        let right = polar(c, 10.0, 0.0);
        assert!(close(right.x, 110.0) && close(right.y, 100.0));
    }

    #[test]
    fn wrapped_span_splits_into_contiguous_thirds() {
        let span = ArcSpan::between(289.0, 131.0);
        let parts = span.subdivide(3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].start, 289.0);
        assert_eq!(parts[2].end, 131.0);
        for pair in parts.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for p in &parts {
            assert!((p.sweep - 202.0 / 3.0).abs() < 1e-9);
            assert!(!p.is_large());
        }
        let total: f64 = parts.iter().map(|p| p.sweep).sum();
        assert!(close(total, 202.0));
    }

    #[test]
    fn large_arc_flag_follows_sweep() {
        assert!(ArcSpan::between(0.0, 181.0).is_large());
        assert!(!ArcSpan::between(0.0, 180.0).is_large());
        assert!(ArcSpan::between(300.0, 250.0).is_large());
        let thirds = ArcSpan::between(0.0, 0.0).subdivide(3);
        assert!(thirds.iter().all(|p| close(p.sweep, 120.0)));
        assert!(ArcSpan::between(0.0, 0.0).subdivide(1)[0].is_large());
    }

    #[test]
    fn mid_angle_wraps() {
        assert!(close(ArcSpan::between(350.0, 30.0).mid_angle(), 10.0));
    }

    #[test]
    fn intersections_of_equal_circles() {
        let (p1, p2) =
            circle_intersections(point(0.0, 0.0), 5.0, point(6.0, 0.0), 5.0).unwrap();
        assert!(close(p1.x, 3.0) && close(p1.y, 4.0));
        assert!(close(p2.x, 3.0) && close(p2.y, -4.0));
        for p in [p1, p2] {
            assert!(close((p - point(0.0, 0.0)).length(), 5.0));
            assert!(close((p - point(6.0, 0.0)).length(), 5.0));
        }
    }

    #[test]
    fn degenerate_pairs_have_no_intersections() {
        let c = point(10.0, 10.0);
        assert!(circle_intersections(c, 5.0, c, 5.0).is_none());
        assert!(circle_intersections(c, 5.0, point(21.0, 10.0), 5.0).is_none());
        assert!(circle_intersections(c, 5.0, point(20.0, 10.0), 5.0).is_none());
        assert!(circle_intersections(c, 5.0, point(11.0, 10.0), 1.0).is_none());
    }
}
