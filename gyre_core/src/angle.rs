// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar angle type.

use core::f64::consts::{PI, TAU};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A scalar orientation, stored canonically in radians.
///
/// Angles are **never normalized implicitly**. Arithmetic and trigonometry
/// keep whatever value they produce, so a sweep that runs past a full turn
/// (for example a trailing-edge arc covering 270°..450°) stays monotonic and
/// a quadrant-corrected pointer angle can legitimately exceed 2π. Callers
/// that need a canonical representative opt in via [`Angle::normalized_tau`].
///
/// Equality and ordering are numeric on the radian value, so two angles that
/// differ by a full turn compare as different. That is deliberate: it is what
/// keeps gesture deltas continuous across the wrap point.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle from radians.
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * (PI / 180.0),
        }
    }

    /// Returns the angle in radians.
    pub const fn to_radians(self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    pub const fn to_degrees(self) -> f64 {
        self.radians * (180.0 / PI)
    }

    /// Returns the angle folded into `[0, 2π)`.
    ///
    /// This is the only place the crate normalizes an angle; everything else
    /// keeps angles exactly as produced.
    pub fn normalized_tau(self) -> Self {
        Self {
            radians: ((self.radians % TAU) + TAU) % TAU,
        }
    }

    /// Returns `true` if the underlying value is NaN.
    ///
    /// NaN angles are used as "no value yet" sentinels by gesture state.
    pub const fn is_nan(self) -> bool {
        self.radians.is_nan()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}
