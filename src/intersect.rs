// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle/line and circle/segment intersection.
//!
//! Both queries return at most two points. Segment intersection is the
//! core algorithm: it projects the circle's center onto the segment's
//! supporting line, reducing the problem to 1-D root extraction along the
//! segment parameter. Line intersection derives a representative segment
//! spanning the circle's diameter and delegates.

use arrayvec::ArrayVec;

use crate::{Circle, Line, LineSegment, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Absolute tolerance for tangency and endpoint-boundary decisions.
///
/// Intersection points within this distance of an exact tangency or of a
/// segment endpoint are treated as hits. The tolerance is fixed and does
/// not scale with radius or segment length; results near segment endpoints
/// are approximate at this scale.
pub const INTERSECTION_EPSILON: f64 = 1e-4;

impl Circle {
    /// Intersection points between this circle and a finite segment.
    ///
    /// Returns zero, one or two points, ordered by the segment parameter
    /// (closest to `segment.a` first). A segment whose closest approach to
    /// the center equals the radius within [`INTERSECTION_EPSILON`] is
    /// tangent and yields at most one point; a closer approach yields up
    /// to two, each kept only when its parameter falls within the segment
    /// (the far endpoint within tolerance).
    ///
    /// Degenerate segments (zero-length or non-finite) yield no
    /// intersections.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::{Circle, LineSegment, Point};
    /// let c = Circle::new((0.0, 0.0), 1.0);
    /// let tangent = LineSegment::new((-1.0, 1.0), (1.0, 1.0));
    /// assert_eq!(
    ///     c.segment_intersections(tangent).as_slice(),
    ///     &[Point::new(0.0, 1.0)],
    /// );
    /// ```
    pub fn segment_intersections(&self, segment: LineSegment) -> ArrayVec<Point, 2> {
        let mut hits = ArrayVec::new();
        let length = segment.length();
        if !length.is_finite() || length == 0.0 {
            return hits;
        }
        let u = (segment.b - segment.a) / length;
        // Signed distance along the segment to the foot of the
        // perpendicular from the center.
        let t0 = (self.center - segment.a).dot(u);
        let foot = segment.a + u * t0;
        let dist = foot.distance(self.center);
        let radius = self.radius.abs();

        if (dist - radius).abs() < INTERSECTION_EPSILON {
            // Tangent; the single touch point must lie within the segment.
            if t0 >= 0.0 && t0 <= length {
                hits.push(foot);
            }
        } else if dist < radius {
            // Secant; root offsets on either side of the foot.
            let h = (radius * radius - dist * dist).sqrt();
            for t in [t0 - h, t0 + h] {
                if t >= 0.0 && (t < length || (t - length).abs() < INTERSECTION_EPSILON) {
                    hits.push(segment.a + u * t);
                }
            }
        }
        hits
    }

    /// Intersection points between this circle and an infinite line.
    ///
    /// An infinite line has no natural finite parametrization, so a
    /// representative segment is derived first: the line is sampled where
    /// it crosses `x = center.x ± radius` and `y = center.y ± radius`, and
    /// whichever axis pair spans the greater distance becomes the segment.
    /// An axis pair only participates when the line actually crosses both
    /// of its coordinates (a vertical line has no x-pair, a horizontal
    /// line no y-pair). The segment is then guaranteed to span the
    /// circle's diameter, so delegation to [`segment_intersections`] loses
    /// no true intersections.
    ///
    /// A degenerate line whose two defining points coincide yields no
    /// intersections.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::{Circle, Line};
    /// let c = Circle::new((0.0, 0.0), 1.0);
    /// let diagonal = Line::new((0.0, 0.0), (1.0, 1.0));
    /// assert_eq!(c.line_intersections(diagonal).len(), 2);
    /// ```
    ///
    /// [`segment_intersections`]: Circle::segment_intersections
    pub fn line_intersections(&self, line: Line) -> ArrayVec<Point, 2> {
        let radius = self.radius.abs();
        let x_pair = line
            .point_at_x(self.center.x - radius)
            .zip(line.point_at_x(self.center.x + radius));
        let y_pair = line
            .point_at_y(self.center.y - radius)
            .zip(line.point_at_y(self.center.y + radius));

        let segment = match (x_pair, y_pair) {
            (Some((p0, p1)), Some((q0, q1))) => {
                if p0.distance(p1) >= q0.distance(q1) {
                    LineSegment::new(p0, p1)
                } else {
                    LineSegment::new(q0, q1)
                }
            }
            (Some((p0, p1)), None) => LineSegment::new(p0, p1),
            (None, Some((q0, q1))) => LineSegment::new(q0, q1),
            (None, None) => return ArrayVec::new(),
        };
        self.segment_intersections(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pt_approx_eq(pt: Point, expected: Point) {
        assert!(
            pt.distance(expected) < 1e-6,
            "{pt:?} != {expected:?}"
        );
    }

    #[test]
    fn secant_through_diameter() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let seg = LineSegment::new((-2.0, 0.0), (2.0, 0.0));
        let hits = c.segment_intersections(seg);
        assert_eq!(hits.len(), 2);
        // Ordered by segment parameter.
        assert_pt_approx_eq(hits[0], Point::new(-1.0, 0.0));
        assert_pt_approx_eq(hits[1], Point::new(1.0, 0.0));
    }

    #[test]
    fn tangent_touches_once() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let seg = LineSegment::new((-1.0, 1.0), (1.0, 1.0));
        let hits = c.segment_intersections(seg);
        assert_eq!(hits.len(), 1);
        assert_pt_approx_eq(hits[0], Point::new(0.0, 1.0));
    }

    #[test]
    fn tangent_outside_segment() {
        let c = Circle::new((0.0, 0.0), 1.0);
        // Same supporting line as the tangent above, but the touch point
        // at x = 0 lies before the segment start.
        let seg = LineSegment::new((2.0, 1.0), (4.0, 1.0));
        assert!(c.segment_intersections(seg).is_empty());
    }

    #[test]
    fn no_intersection() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let seg = LineSegment::new((-1.0, 5.0), (1.0, 5.0));
        assert!(c.segment_intersections(seg).is_empty());
    }

    #[test]
    fn secant_one_endpoint_inside() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let seg = LineSegment::new((0.0, 0.0), (2.0, 0.0));
        let hits = c.segment_intersections(seg);
        assert_eq!(hits.len(), 1);
        assert_pt_approx_eq(hits[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn secant_exact_endpoint_within_tolerance() {
        let c = Circle::new((0.0, 0.0), 1.0);
        // The far endpoint lies exactly on the boundary; the epsilon rule
        // keeps it.
        let seg = LineSegment::new((0.0, 0.0), (1.0, 0.0));
        let hits = c.segment_intersections(seg);
        assert_eq!(hits.len(), 1);
        assert_pt_approx_eq(hits[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn degenerate_segment_is_empty() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let seg = LineSegment::new((0.5, 0.5), (0.5, 0.5));
        assert!(c.segment_intersections(seg).is_empty());
        let seg = LineSegment::new((f64::NAN, 0.0), (1.0, 0.0));
        assert!(c.segment_intersections(seg).is_empty());
    }

    #[test]
    fn offset_circle_secant() {
        let c = Circle::new((3.0, 4.0), 2.0);
        let seg = LineSegment::new((0.0, 4.0), (10.0, 4.0));
        let hits = c.segment_intersections(seg);
        assert_eq!(hits.len(), 2);
        assert_pt_approx_eq(hits[0], Point::new(1.0, 4.0));
        assert_pt_approx_eq(hits[1], Point::new(5.0, 4.0));
    }

    #[test]
    fn line_diagonal() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let hits = c.line_intersections(Line::new((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(hits.len(), 2);
        let inv_sqrt2 = core::f64::consts::FRAC_1_SQRT_2;
        assert_pt_approx_eq(hits[0], Point::new(-inv_sqrt2, -inv_sqrt2));
        assert_pt_approx_eq(hits[1], Point::new(inv_sqrt2, inv_sqrt2));
    }

    #[test]
    fn line_vertical() {
        let c = Circle::new((2.0, 0.0), 1.0);
        // A vertical line has no x-pair; the y-pair segment is used.
        let hits = c.line_intersections(Line::new((2.0, -9.0), (2.0, 3.0)));
        assert_eq!(hits.len(), 2);
        assert_pt_approx_eq(hits[0], Point::new(2.0, -1.0));
        assert_pt_approx_eq(hits[1], Point::new(2.0, 1.0));
    }

    #[test]
    fn line_horizontal() {
        let c = Circle::new((0.0, 0.0), 3.0);
        let hits = c.line_intersections(Line::new((5.0, 0.0), (6.0, 0.0)));
        assert_eq!(hits.len(), 2);
        assert_pt_approx_eq(hits[0], Point::new(-3.0, 0.0));
        assert_pt_approx_eq(hits[1], Point::new(3.0, 0.0));
    }

    #[test]
    fn line_miss() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let hits = c.line_intersections(Line::new((0.0, 2.0), (1.0, 2.0)));
        assert!(hits.is_empty());
    }

    #[test]
    fn line_degenerate_is_empty() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let hits = c.line_intersections(Line::new((5.0, 5.0), (5.0, 5.0)));
        assert!(hits.is_empty());
    }
}
