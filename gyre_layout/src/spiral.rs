// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Archimedean spiral point generation.

use alloc::vec::Vec;

use core::f64::consts::TAU;

use gyre_core::{Angle, PolarPoint};

/// An Archimedean spiral descriptor: `radius(θ) = inner_radius +
/// radius_spacing · θ / 2π`.
///
/// [`ArchimedeanSpiral::points`] produces points whose consecutive
/// **straight-line** (chord) distance equals `gap`: equidistant by chord,
/// not by angle, so glyphs or path samples placed on them look evenly
/// spaced regardless of how tightly the spiral is wound at that radius.
///
/// With `inner_radius == 0` and `radius_spacing == 0` the spiral collapses
/// and every generated point coincides with the origin. This degenerate
/// shape is intentional and not special-cased.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchimedeanSpiral {
    /// Radius at angle zero.
    pub inner_radius: f64,
    /// Radius added per full turn.
    pub radius_spacing: f64,
    /// Minimum chord length between consecutive points.
    pub gap: f64,
}

impl ArchimedeanSpiral {
    /// Creates a new spiral descriptor.
    pub const fn new(inner_radius: f64, radius_spacing: f64, gap: f64) -> Self {
        Self {
            inner_radius,
            radius_spacing,
            gap,
        }
    }

    /// The spiral radius at angle `theta` (radians from the spiral origin).
    pub fn radius_at(&self, theta: f64) -> f64 {
        self.inner_radius + self.radius_spacing * theta / TAU
    }

    /// Generates exactly `count` points eagerly, starting at `start`.
    ///
    /// Each angular increment is solved so the chord to the previous point
    /// equals `gap` at the radius the new angle actually has; the arc-length
    /// estimate `gap / r` only seeds the fixed-point iteration.
    pub fn points(&self, start: Angle, count: usize) -> Vec<PolarPoint> {
        let mut out = Vec::with_capacity(count);
        if count == 0 {
            return out;
        }

        let mut theta = start.to_radians();
        out.push(PolarPoint::new(
            self.radius_at(theta),
            Angle::from_radians(theta),
        ));

        for _ in 1..count {
            theta += self.step_from(theta);
            out.push(PolarPoint::new(
                self.radius_at(theta),
                Angle::from_radians(theta),
            ));
        }
        out
    }

    /// Solves for the angular increment whose chord from `theta` is `gap`.
    fn step_from(&self, theta: f64) -> f64 {
        let r1 = self.radius_at(theta);
        let p1 = PolarPoint::new(r1, Angle::from_radians(theta)).to_cartesian();

        // Seed with the arc-length estimate; fall back to a turn-based guess
        // when starting at the origin of a growing spiral.
        let mut dt = if r1 > f64::EPSILON {
            self.gap / r1
        } else if self.radius_spacing.abs() > f64::EPSILON {
            self.gap * TAU / self.radius_spacing.abs()
        } else {
            // Fully degenerate spiral: no step ever separates the points.
            return 0.0;
        };

        for _ in 0..16 {
            let r2 = self.radius_at(theta + dt);
            let p2 = PolarPoint::new(r2, Angle::from_radians(theta + dt)).to_cartesian();
            let chord = (p2 - p1).hypot();
            if !chord.is_finite() || chord <= 0.0 {
                break;
            }
            let next = dt * self.gap / chord;
            if (next - dt).abs() <= 1e-12 * dt.abs().max(1.0) {
                return next;
            }
            dt = next;
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn consecutive_points_are_chord_equidistant() {
        let spiral = ArchimedeanSpiral::new(40.0, 12.0, 6.0);
        let points = spiral.points(Angle::from_degrees(90.0), 60);
        assert_eq!(points.len(), 60);
        for pair in points.windows(2) {
            let chord = (pair[1].to_cartesian() - pair[0].to_cartesian()).hypot();
            assert!(
                (chord - 6.0).abs() < 1e-6,
                "chord {chord} deviates from the configured gap"
            );
        }
    }

    #[test]
    fn radius_grows_linearly_with_angle() {
        let spiral = ArchimedeanSpiral::new(10.0, 8.0, 2.0);
        assert!((spiral.radius_at(0.0) - 10.0).abs() < 1e-12);
        assert!((spiral.radius_at(TAU) - 18.0).abs() < 1e-12);
        assert!((spiral.radius_at(2.0 * TAU) - 26.0).abs() < 1e-12);
    }

    #[test]
    fn starts_exactly_at_the_start_angle() {
        let spiral = ArchimedeanSpiral::new(25.0, 5.0, 3.0);
        let points = spiral.points(Angle::from_degrees(45.0), 3);
        assert!((points[0].angle.to_degrees() - 45.0).abs() < 1e-9);
        assert!((points[0].radius - spiral.radius_at(points[0].angle.to_radians())).abs() < 1e-9);
    }

    #[test]
    fn growth_from_the_origin_respects_the_gap() {
        let spiral = ArchimedeanSpiral::new(0.0, 10.0, 4.0);
        let points = spiral.points(Angle::ZERO, 20);
        for pair in points.windows(2) {
            let chord = (pair[1].to_cartesian() - pair[0].to_cartesian()).hypot();
            assert!((chord - 4.0).abs() < 1e-6);
        }
    }

    #[test]
    fn fully_degenerate_spiral_collapses_to_the_origin() {
        let spiral = ArchimedeanSpiral::new(0.0, 0.0, 5.0);
        let points = spiral.points(Angle::ZERO, 4);
        assert_eq!(points.len(), 4);
        for p in points {
            assert!(p.to_cartesian().hypot() < 1e-12);
        }
    }
}
