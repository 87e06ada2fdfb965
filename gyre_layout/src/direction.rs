// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item rotation policy for ring placement.

use gyre_core::Angle;

/// Whether a placed item's own rotation tracks its placement angle.
///
/// Exactly one variant is active at a time, and the numeric degree payload is
/// the only thing animation may interpolate; interpolating *across* variants
/// is undefined and [`RingDirection::lerp`] refuses to do it.
///
/// Rotations assume an item whose neutral orientation points outward along
/// the positive x-axis at placement angle 0°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingDirection {
    /// Every item receives the same absolute rotation, in degrees.
    Fixed(f64),
    /// Every item's rotation is its placement angle plus an offset, in
    /// degrees.
    Related(f64),
}

impl RingDirection {
    /// No extra rotation; items keep their own orientation.
    pub const NONE: Self = Self::Fixed(0.0);
    /// Each item points at the ring center.
    pub const TO_CENTER: Self = Self::Related(180.0);
    /// Each item points away from the ring center.
    pub const FROM_CENTER: Self = Self::Related(0.0);
    /// Each item aligns with the clockwise tangent of the ring.
    pub const ALONG_CLOCKWISE: Self = Self::Related(-90.0);
    /// Each item aligns with the counter-clockwise tangent of the ring.
    pub const ALONG_COUNTER_CLOCKWISE: Self = Self::Related(90.0);

    /// The rotation an item placed at `placement` should receive.
    pub fn resolve(self, placement: Angle) -> Angle {
        match self {
            Self::Fixed(degrees) => Angle::from_degrees(degrees),
            Self::Related(degrees) => placement + Angle::from_degrees(degrees),
        }
    }

    /// Linearly interpolates the degree payload toward `other`.
    ///
    /// Cross-variant pairs are not interpolable and return `self` unchanged.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => Self::Fixed(a + (b - a) * t),
            (Self::Related(a), Self::Related(b)) => Self::Related(a + (b - a) * t),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_ignores_placement() {
        let d = RingDirection::Fixed(45.0);
        let r = d.resolve(Angle::from_degrees(300.0));
        assert!((r.to_degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn related_adds_the_placement_angle() {
        let d = RingDirection::TO_CENTER;
        let r = d.resolve(Angle::from_degrees(30.0));
        assert!((r.to_degrees() - 210.0).abs() < 1e-9);
    }

    #[test]
    fn lerp_stays_within_a_variant() {
        let a = RingDirection::Related(0.0);
        let b = RingDirection::Related(90.0);
        assert_eq!(a.lerp(b, 0.5), RingDirection::Related(45.0));

        let fixed = RingDirection::Fixed(10.0);
        assert_eq!(fixed.lerp(b, 0.5), fixed);
    }
}
