// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite lines and finite line segments.

use core::ops::{Add, Sub};

use crate::{Point, Vec2};

/// An infinite line, described by two distinct points it passes through.
///
/// The two points carry no start/end meaning; they only fix the line's
/// position and slope. For a bounded segment, see [`LineSegment`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// One point on the line.
    pub p0: Point,
    /// Another point on the line.
    pub p1: Point,
}

impl Line {
    /// Create a new line through two points.
    ///
    /// The line is degenerate if the points coincide; the `point_at_*`
    /// queries then return `None` in both directions.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The point on the line with the given x coordinate.
    ///
    /// Returns `None` when the line is vertical (parallel to the Y axis),
    /// in which case no single point has the requested x coordinate.
    pub fn point_at_x(&self, x: f64) -> Option<Point> {
        let run = self.p1.x - self.p0.x;
        if run == 0.0 {
            return None;
        }
        let t = (x - self.p0.x) / run;
        Some(self.p0.lerp(self.p1, t))
    }

    /// The point on the line with the given y coordinate.
    ///
    /// Returns `None` when the line is horizontal (parallel to the X axis).
    pub fn point_at_y(&self, y: f64) -> Option<Point> {
        let rise = self.p1.y - self.p0.y;
        if rise == 0.0 {
            return None;
        }
        let t = (y - self.p0.y) / rise;
        Some(self.p0.lerp(self.p1, t))
    }

    /// Is this line finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline]
    fn from((p0, p1): (Point, Point)) -> Self {
        Line::new(p0, p1)
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(self, v: Vec2) -> Line {
        Line::new(self.p0 - v, self.p1 - v)
    }
}

/// A finite line segment between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// The segment's start point.
    pub a: Point,
    /// The segment's end point.
    pub b: Point,
}

impl LineSegment {
    /// Create a new segment between two endpoints.
    #[inline]
    pub fn new(a: impl Into<Point>, b: impl Into<Point>) -> LineSegment {
        LineSegment {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The length of the segment.
    #[inline]
    pub fn length(self) -> f64 {
        (self.b - self.a).hypot()
    }

    /// The midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Returns a copy of this segment with the endpoints swapped so that
    /// it points in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(self) -> LineSegment {
        LineSegment {
            a: self.b,
            b: self.a,
        }
    }

    /// The infinite line this segment lies on.
    #[inline]
    pub fn extended(self) -> Line {
        Line::new(self.a, self.b)
    }

    /// Is this segment finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }

    /// Is this segment NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.a.is_nan() || self.b.is_nan()
    }
}

impl From<(Point, Point)> for LineSegment {
    #[inline]
    fn from((a, b): (Point, Point)) -> Self {
        LineSegment::new(a, b)
    }
}

impl Add<Vec2> for LineSegment {
    type Output = LineSegment;

    #[inline]
    fn add(self, v: Vec2) -> LineSegment {
        LineSegment::new(self.a + v, self.b + v)
    }
}

impl Sub<Vec2> for LineSegment {
    type Output = LineSegment;

    #[inline]
    fn sub(self, v: Vec2) -> LineSegment {
        LineSegment::new(self.a - v, self.b - v)
    }
}
