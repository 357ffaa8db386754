// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::{Circle, Point, Rect};

/// A single path element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::exhaustive_enums)]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic bezier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

/// A generic trait for closed shapes.
pub trait Shape: Sized {
    /// The iterator returned by the [`path_elements`] method.
    ///
    /// [`path_elements`]: Shape::path_elements
    type PathElementsIter<'iter>: Iterator<Item = PathEl> + 'iter
    where
        Self: 'iter;

    /// Returns an iterator over this shape expressed as Bézier path
    /// elements.
    ///
    /// The `tolerance` parameter controls the accuracy of the conversion
    /// of curved shapes into Bézier segments, as curves are lowered with
    /// bounded error.
    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_>;

    /// Signed area.
    ///
    /// The convention is that a positive area is counterclockwise in a
    /// Y-up coordinate system, clockwise in Y-down.
    fn area(&self) -> f64;

    /// Total length of perimeter.
    fn perimeter(&self, accuracy: f64) -> f64;

    /// The [winding number] of a point.
    ///
    /// A point is considered inside the shape when the winding number is
    /// nonzero.
    ///
    /// [winding number]: https://mathworld.wolfram.com/ContourWindingNumber.html
    fn winding(&self, pt: Point) -> i32;

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;

    /// Whether a point is inside the shape.
    ///
    /// The default implementation considers a point inside when its
    /// winding number is nonzero; implementations may refine boundary
    /// behavior.
    fn contains(&self, pt: Point) -> bool {
        self.winding(pt) != 0
    }

    /// If the shape is a circle, make it available.
    fn as_circle(&self) -> Option<Circle> {
        None
    }

    /// If the shape is a rectangle, make it available.
    fn as_rect(&self) -> Option<Rect> {
        None
    }
}
