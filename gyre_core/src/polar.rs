// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar coordinates and conversion to Cartesian offsets.

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::Angle;

/// A point in polar coordinates: a distance from some center and an angle.
///
/// `radius` is nominally non-negative, but negative radii are tolerated and
/// produce the mirrored Cartesian offset; callers treat them as "zero or
/// inverted" as fits their geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarPoint {
    /// Distance from the reference center.
    pub radius: f64,
    /// Orientation of the point around the center.
    pub angle: Angle,
}

impl PolarPoint {
    /// Creates a new polar point.
    pub const fn new(radius: f64, angle: Angle) -> Self {
        Self { radius, angle }
    }

    /// Converts to a Cartesian offset: `(r·cos a, r·sin a)`.
    ///
    /// The conversion is exact trigonometry with no domain errors and no
    /// axis flipping; screen-space concerns live with the caller.
    pub fn to_cartesian(self) -> Vec2 {
        let a = self.angle.to_radians();
        Vec2::new(self.radius * a.cos(), self.radius * a.sin())
    }

    /// Converts to an absolute point relative to `center`.
    pub fn cartesian_from(self, center: Point) -> Point {
        center + self.to_cartesian()
    }

    /// Recovers a polar point from a Cartesian offset.
    ///
    /// The angle is the plain `atan2` result in `(-π, π]`.
    pub fn from_cartesian(offset: Vec2) -> Self {
        Self {
            radius: offset.hypot(),
            angle: Angle::from_radians(offset.atan2()),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn cartesian_round_trip() {
        let p = PolarPoint::new(80.0, Angle::from_degrees(30.0));
        let v = p.to_cartesian();
        let back = PolarPoint::from_cartesian(v);
        assert!((back.radius - 80.0).abs() < 1e-9);
        assert!((back.angle.to_degrees() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_lands_on_the_y_axis() {
        let v = PolarPoint::new(10.0, Angle::from_radians(FRAC_PI_2)).to_cartesian();
        assert!(v.x.abs() < 1e-9);
        assert!((v.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn negative_radius_mirrors() {
        let v = PolarPoint::new(-5.0, Angle::ZERO).to_cartesian();
        assert!((v.x + 5.0).abs() < 1e-9);
        assert!(v.y.abs() < 1e-9);
    }

    #[test]
    fn cartesian_from_offsets_the_center() {
        let p = PolarPoint::new(1.0, Angle::ZERO).cartesian_from(Point::new(3.0, 4.0));
        assert!((p.x - 4.0).abs() < 1e-9);
        assert!((p.y - 4.0).abs() < 1e-9);
    }
}
