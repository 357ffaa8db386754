// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::cmp::Ordering;
use core::f64::consts::{FRAC_PI_2, PI};
use core::ops::{Add, Sub};

use smallvec::SmallVec;

use crate::{
    Angle, CoordinateOrientation, PathEl, Point, Rect, RotationDirection, Shape, Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
///
/// Immutable value semantics: every derived quantity is computed on demand,
/// never cached, so "mutating" a circle is just building a new one.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    ///
    /// The radius is not validated; a negative radius yields the same
    /// geometry as its absolute value for containment, bounding box and
    /// perimeter queries, but is preserved verbatim in [`diameter`] and
    /// the extremity accessors.
    ///
    /// [`diameter`]: Circle::diameter
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// A new circle from center and diameter.
    #[inline]
    pub fn with_diameter(center: impl Into<Point>, diameter: f64) -> Circle {
        Circle {
            center: center.into(),
            radius: 0.5 * diameter,
        }
    }

    /// The largest circle that fits inside the rectangle.
    ///
    /// The center is the rectangle's center and the diameter is the
    /// shorter edge. For a square this is the inscribed circle touching
    /// all four edges.
    #[inline]
    pub fn inscribed_in(rect: Rect) -> Circle {
        Circle::with_diameter(rect.center(), rect.abs().size().min_side())
    }

    /// The diameter, `2 · radius`.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// The circumference, `π · diameter`.
    #[inline]
    pub fn circumference(&self) -> f64 {
        PI * self.diameter()
    }

    /// The leftmost x coordinate, `center.x - radius`.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.center.x - self.radius
    }

    /// The rightmost x coordinate, `center.x + radius`.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.center.x + self.radius
    }

    /// The topmost y coordinate in a y-down space, `center.y - radius`.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.center.y - self.radius
    }

    /// The bottommost y coordinate in a y-down space, `center.y + radius`.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.center.y + self.radius
    }

    /// Whether a point lies inside the circle or on its boundary.
    ///
    /// Unlike the [`Shape`] winding test, the boundary is inclusive, so
    /// `contains` holds for points exactly at distance `radius` from the
    /// center.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.center.distance(pt) <= self.radius.abs()
    }

    /// Whether this circle has the same radius as another, regardless of
    /// position.
    ///
    /// This is a size comparison, not a geometric one: two unit circles at
    /// opposite ends of the plane are `same_size`. Use `==` to compare
    /// both center and radius.
    #[inline]
    pub fn same_size(&self, other: &Circle) -> bool {
        self.radius == other.radius
    }

    /// Compare circles by radius alone.
    ///
    /// This is a size ordering, not a total geometric order; circles with
    /// equal radii but different centers compare as `Equal`. Returns
    /// `None` when either radius is NaN.
    #[inline]
    pub fn size_cmp(&self, other: &Circle) -> Option<Ordering> {
        self.radius.partial_cmp(&other.radius)
    }

    /// Evenly spaced points along the perimeter.
    ///
    /// Divides a full rotation into `segments` parts (which need not be an
    /// integer), starting at angle zero and travelling visually clockwise
    /// in the default [`CoordinateOrientation`]. See
    /// [`perimeter_points_from`] for the general form.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundel::{Circle, Point};
    /// let c = Circle::new((0.0, 0.0), 1.0);
    /// let pts = c.perimeter_points(4.0);
    /// assert_eq!(pts.len(), 4);
    /// assert_eq!(pts[0], Point::new(1.0, 0.0));
    /// ```
    ///
    /// [`perimeter_points_from`]: Circle::perimeter_points_from
    pub fn perimeter_points(&self, segments: f64) -> SmallVec<[Point; 8]> {
        self.perimeter_points_from(
            segments,
            Angle::ZERO,
            RotationDirection::Clockwise,
            CoordinateOrientation::default(),
        )
    }

    /// Evenly spaced points along the perimeter, with full control over
    /// start angle, travel direction and coordinate orientation.
    ///
    /// The angular step is `2π / segments`. Points are emitted eagerly
    /// while the accumulated offset is below a full rotation, so a
    /// fractional `segments` yields `ceil(segments)` points with the last
    /// step falling short of a full increment. The first point is always
    /// at `starting_angle`.
    ///
    /// `rotating` states the caller's on-screen intent; whether that means
    /// adding or subtracting angle offsets depends on `orientation`, since
    /// increasing angle reads as clockwise on a y-down raster and as
    /// counterclockwise on a y-up plot.
    ///
    /// `segments <= 0` (including NaN) yields an empty sequence; this is
    /// not an error.
    pub fn perimeter_points_from(
        &self,
        segments: f64,
        starting_angle: Angle,
        rotating: RotationDirection,
        orientation: CoordinateOrientation,
    ) -> SmallVec<[Point; 8]> {
        let mut points = SmallVec::new();
        if segments.is_nan() || segments <= 0.0 {
            return points;
        }
        let full_turn = Angle::FULL_TURN.radians;
        let step = full_turn / segments;
        let forward =
            orientation.angle_sweeps_clockwise() == (rotating == RotationDirection::Clockwise);
        let mut offset = 0.0;
        while offset < full_turn {
            let angle = if forward {
                starting_angle + Angle::from_radians(offset)
            } else {
                starting_angle - Angle::from_radians(offset)
            };
            points.push(self.center + Vec2::from_polar(angle, self.radius));
            offset += step;
        }
        points
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[doc(hidden)]
#[derive(Debug)]
pub struct CirclePathIter {
    circle: Circle,
    delta_th: f64,
    arm_len: f64,
    ix: usize,
    n: usize,
}

impl Shape for Circle {
    type PathElementsIter<'iter> = CirclePathIter;

    fn path_elements(&self, tolerance: f64) -> CirclePathIter {
        let scaled_err = self.radius.abs() / tolerance;
        let (n, arm_len) = if scaled_err < 1.0 / 1.9608e-4 {
            // Solution from http://spencermortensen.com/articles/bezier-circle/
            (4, 0.551915024494)
        } else {
            // This is empirically determined to fall within error tolerance.
            let n = (1.1163 * scaled_err).powf(1.0 / 6.0).ceil() as usize;
            // Note: this isn't minimum error, but it is simple and we can
            // easily estimate the error.
            let arm_len = (4.0 / 3.0) * (FRAC_PI_2 / (n as f64)).tan();
            (n, arm_len)
        };
        CirclePathIter {
            circle: *self,
            delta_th: 2.0 * PI / (n as f64),
            arm_len,
            ix: 0,
            n,
        }
    }

    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[inline]
    fn perimeter(&self, _accuracy: f64) -> f64 {
        (2.0 * PI * self.radius).abs()
    }

    fn winding(&self, pt: Point) -> i32 {
        if (pt - self.center).hypot2() < self.radius * self.radius {
            1
        } else {
            0
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let (x, y) = self.center.into();
        Rect::new(x - r, y - r, x + r, y + r)
    }

    /// Boundary-inclusive containment, matching [`Circle::contains`].
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        Circle::contains(self, pt)
    }

    fn as_circle(&self) -> Option<Circle> {
        Some(*self)
    }
}

impl Iterator for CirclePathIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let a = self.arm_len;
        let r = self.circle.radius;
        let (x, y) = self.circle.center.into();
        let ix = self.ix;
        self.ix += 1;
        if ix == 0 {
            Some(PathEl::MoveTo(Point::new(x + r, y)))
        } else if ix <= self.n {
            let th1 = self.delta_th * (ix as f64);
            let th0 = th1 - self.delta_th;
            let (s0, c0) = th0.sin_cos();
            let (s1, c1) = if ix == self.n {
                (0.0, 1.0)
            } else {
                th1.sin_cos()
            };
            Some(PathEl::CurveTo(
                Point::new(x + r * (c0 - a * s0), y + r * (s0 + a * c0)),
                Point::new(x + r * (c1 + a * s1), y + r * (s1 - a * c1)),
                Point::new(x + r * c1, y + r * s1),
            ))
        } else if ix == self.n + 1 {
            Some(PathEl::ClosePath)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn derived_quantities() {
        let c = Circle::new((5.0, 5.0), 5.0);
        assert_approx_eq(c.area(), 25.0 * PI);
        assert_approx_eq(c.circumference(), 10.0 * PI);
        assert_approx_eq(c.perimeter(1e-9), c.circumference());
        assert_approx_eq(c.diameter(), 10.0);
        assert_eq!(c.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));

        let c_neg_radius = Circle::new((5.0, 5.0), -5.0);
        assert_approx_eq(c_neg_radius.area(), 25.0 * PI);
        assert_approx_eq(c_neg_radius.perimeter(1e-9), 10.0 * PI);
        assert_eq!(c_neg_radius.winding(Point::new(5.0, 5.0)), 1);
    }

    #[test]
    fn constructors() {
        assert_eq!(
            Circle::with_diameter((1.0, 1.0), 4.0),
            Circle::new((1.0, 1.0), 2.0)
        );
        let square = Rect::from_center_size((3.0, 3.0), (2.0, 2.0));
        assert_eq!(Circle::inscribed_in(square), Circle::new((3.0, 3.0), 1.0));
        // Aspect fit inside a non-square rect takes the shorter edge.
        let wide = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(Circle::inscribed_in(wide), Circle::new((5.0, 2.0), 2.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn extremities() {
        let c = Circle::new((2.0, -1.0), 3.0);
        assert_eq!(c.min_x(), -1.0);
        assert_eq!(c.max_x(), 5.0);
        assert_eq!(c.min_y(), -4.0);
        assert_eq!(c.max_y(), 2.0);
    }

    #[test]
    fn containment() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert!(c.contains(Point::ZERO));
        // Boundary inclusive.
        assert!(c.contains(Point::new(1.0, 0.0)));
        assert!(!c.contains(Point::new(1.001, 0.0)));
        // The winding test is boundary exclusive.
        assert_eq!(c.winding(Point::new(1.0, 0.0)), 0);

        // Degenerate radius still contains its center.
        assert!(Circle::new((2.0, 2.0), 0.0).contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn size_equality() {
        let a = Circle::new((0.0, 0.0), 5.0);
        let b = Circle::new((10.0, 10.0), 5.0);
        assert!(a.same_size(&b));
        assert_ne!(a, b);
        assert_eq!(a.size_cmp(&b), Some(Ordering::Equal));
        assert_eq!(
            a.size_cmp(&Circle::new((0.0, 0.0), 6.0)),
            Some(Ordering::Less)
        );
        assert_eq!(a.size_cmp(&Circle::new((0.0, 0.0), f64::NAN)), None);
    }

    #[test]
    fn perimeter_points_quarters() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let pts = c.perimeter_points(4.0);
        assert_eq!(pts.len(), 4);
        for (i, pt) in pts.iter().enumerate() {
            assert_approx_eq(c.center.distance(*pt), 1.0);
            let angle = pt.to_vec2().atan2();
            let expected = (i as f64) * FRAC_PI_2;
            // atan2 wraps to (-π, π].
            let expected = if expected > PI {
                expected - 2.0 * PI
            } else {
                expected
            };
            assert_approx_eq(angle, expected);
        }
        assert_eq!(pts[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn perimeter_points_fractional() {
        let c = Circle::new((0.0, 0.0), 2.0);
        // Step is 2π/2.5; offsets 0, 0.8π, 1.6π all fall below 2π.
        assert_eq!(c.perimeter_points(2.5).len(), 3);
        assert_eq!(c.perimeter_points(1.0).len(), 1);
    }

    #[test]
    fn perimeter_points_empty() {
        let c = Circle::new((0.0, 0.0), 1.0);
        assert!(c.perimeter_points(0.0).is_empty());
        assert!(c.perimeter_points(-3.0).is_empty());
        assert!(c.perimeter_points(f64::NAN).is_empty());
    }

    #[test]
    fn perimeter_points_starting_angle() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let pts = c.perimeter_points_from(
            2.0,
            Angle::from_radians(FRAC_PI_2),
            RotationDirection::Clockwise,
            CoordinateOrientation::default(),
        );
        assert_eq!(pts.len(), 2);
        assert_approx_eq(pts[0].x, 0.0);
        assert_approx_eq(pts[0].y, 1.0);
    }

    #[test]
    fn perimeter_points_direction_mirrors() {
        let c = Circle::new((1.0, 2.0), 3.0);
        let start = Angle::from_radians(0.3);
        let cw = c.perimeter_points_from(
            8.0,
            start,
            RotationDirection::Clockwise,
            CoordinateOrientation::YDown,
        );
        let ccw = c.perimeter_points_from(
            8.0,
            start,
            RotationDirection::CounterClockwise,
            CoordinateOrientation::YDown,
        );
        assert_eq!(cw.len(), ccw.len());
        // Same starting point; the remainder visits the same points in
        // reverse angular order.
        assert_approx_eq(cw[0].distance(ccw[0]), 0.0);
        let n = cw.len();
        for i in 1..n {
            assert_approx_eq(cw[i].distance(ccw[n - i]), 0.0);
        }
    }

    #[test]
    fn perimeter_points_orientation_decouples_intent() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let start = Angle::from_radians(0.7);
        // "Clockwise on screen" in a y-down space accumulates the same
        // angles as "counterclockwise on screen" in a y-up space.
        let y_down_cw = c.perimeter_points_from(
            3.0,
            start,
            RotationDirection::Clockwise,
            CoordinateOrientation::YDown,
        );
        let y_up_ccw = c.perimeter_points_from(
            3.0,
            start,
            RotationDirection::CounterClockwise,
            CoordinateOrientation::YUp,
        );
        assert_eq!(y_down_cw, y_up_ccw);
    }

    #[test]
    fn circle_path_closes() {
        let c = Circle::new((0.0, 0.0), 1.0);
        let els: Vec<PathEl> = c.path_elements(0.1).collect();
        assert_eq!(els.first(), Some(&PathEl::MoveTo(Point::new(1.0, 0.0))));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        // 4 curve segments suffice at loose tolerance.
        assert_eq!(els.len(), 6);
    }
}
