// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer displacement vectors and continuous angles.
//!
//! Drag gestures arrive in screen space, where y grows downward. The helpers
//! here convert pointer positions into math-convention vectors (positive
//! angles counter-clockwise) and provide the quadrant-corrected angle that
//! keeps a tracked pointer's angle continuous where plain `atan2` jumps.

use kurbo::{Point, Vec2};

use core::f64::consts::TAU;

use crate::Angle;

/// Vector from `center` to `point`, with the y-axis inverted.
///
/// Screen-space y grows downward; flipping it here makes every downstream
/// angle obey standard math conventions. All angle math in the workspace
/// relies on this inversion happening exactly once, at this boundary.
pub fn pointer_vector(center: Point, point: Point) -> Vec2 {
    Vec2::new(point.x - center.x, center.y - point.y)
}

/// The plain `atan2` angle of a vector, in `(-π, π]`.
pub fn raw_angle(v: Vec2) -> Angle {
    Angle::from_radians(v.atan2())
}

/// The quadrant-corrected angle of a vector.
///
/// `atan2` is discontinuous along the negative x-axis. When both components
/// are negative (third quadrant) a full turn is added, so an angle tracked
/// counter-clockwise through the upper half-plane keeps growing smoothly
/// past 180° instead of snapping to −180°. The corrected angle lies in
/// `(-π/2, 3π/2]`.
pub fn adjusted_angle(v: Vec2) -> Angle {
    let raw = v.atan2();
    if v.x < 0.0 && v.y < 0.0 {
        Angle::from_radians(raw + TAU)
    } else {
        Angle::from_radians(raw)
    }
}

/// Whether a pair of consecutive vectors crosses the quadrant-3/4 boundary.
///
/// Both vectors point into the lower half-plane and the x component flips
/// sign between them. In that one case the raw angles are already continuous
/// and [`adjusted_angle`] would manufacture a spurious full-turn jump, so
/// gesture code must keep the raw angles instead.
pub fn crosses_lower_quadrants(a: Vec2, b: Vec2) -> bool {
    a.y < 0.0 && b.y < 0.0 && (a.x < 0.0) != (b.x < 0.0)
}
