// Copyright 2025 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angles, rotation directions and coordinate-system orientation.

use core::f64::consts::TAU;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An angle, stored in radians.
///
/// A thin newtype over `f64` so that signatures taking both angles and
/// plain scalars (radii, segment counts) cannot mix them up. The value is
/// not normalized; angles outside `0..2π` are meaningful to the perimeter
/// sampler, which accumulates offsets past a starting angle.
#[derive(Clone, Copy, Default, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    /// The angle magnitude in radians.
    pub radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle { radians: 0. };

    /// One full rotation, 2π radians.
    pub const FULL_TURN: Angle = Angle { radians: TAU };

    /// Create an angle from radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle { radians }
    }

    /// Create an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle {
            radians: degrees.to_radians(),
        }
    }

    /// This angle in degrees.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Simultaneously compute the sine and cosine of the angle.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    /// Is this angle finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.radians.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle {
            radians: self.radians + other.radians,
        }
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, other: Angle) {
        *self = *self + other;
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle {
            radians: self.radians - other.radians,
        }
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, other: Angle) {
        *self = *self - other;
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn mul(self, other: f64) -> Angle {
        Angle {
            radians: self.radians * other,
        }
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    #[inline]
    fn div(self, other: f64) -> Angle {
        Angle {
            radians: self.radians / other,
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.radians, formatter)?;
        write!(formatter, " rad")
    }
}

/// The sense in which a caller wants to travel around a circle, as seen on
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDirection {
    /// Visually clockwise motion.
    Clockwise,
    /// Visually counterclockwise motion.
    CounterClockwise,
}

/// The orientation of the ambient rendering coordinate system.
///
/// Whether increasing angle sweeps visually clockwise depends on which way
/// the Y axis points. [`Vec2::from_angle`] always rotates from +X towards
/// +Y; on a Y-down raster that motion reads as clockwise, on a Y-up plot it
/// reads as counterclockwise. The perimeter sampler takes this as an
/// explicit argument so callers can state their intent ("clockwise on
/// screen") independently of the arithmetic sign of angle accumulation.
///
/// The `Default` is [`YDown`], the common convention for 2D graphics.
///
/// [`Vec2::from_angle`]: crate::Vec2::from_angle
/// [`YDown`]: CoordinateOrientation::YDown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateOrientation {
    /// Y increases downward (raster images, most UI toolkits).
    #[default]
    YDown,
    /// Y increases upward (mathematical convention, PDF, OpenGL).
    YUp,
}

impl CoordinateOrientation {
    /// Whether increasing angle sweeps visually clockwise in this
    /// orientation.
    #[inline]
    pub fn angle_sweeps_clockwise(self) -> bool {
        self == CoordinateOrientation::YDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn arithmetic() {
        let quarter = Angle::FULL_TURN / 4.0;
        assert_eq!(quarter + quarter, Angle::from_radians(PI));
        assert_eq!(quarter - quarter, Angle::ZERO);
        assert_eq!(-quarter, Angle::from_radians(-PI / 2.0));
        assert_eq!(quarter * 2.0, Angle::from_radians(PI));
    }

    #[test]
    fn degrees() {
        assert!((Angle::from_degrees(180.0).radians - PI).abs() < 1e-12);
        assert!((Angle::FULL_TURN.to_degrees() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn orientation() {
        assert!(CoordinateOrientation::YDown.angle_sweeps_clockwise());
        assert!(!CoordinateOrientation::YUp.angle_sweeps_clockwise());
        assert_eq!(
            CoordinateOrientation::default(),
            CoordinateOrientation::YDown
        );
    }
}
