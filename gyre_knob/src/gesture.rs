// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state machine for rotary controls.

use kurbo::{Point, Vec2};

use gyre_core::vector::{adjusted_angle, crosses_lower_quadrants, pointer_vector, raw_angle};

use crate::KnobMapping;

/// A snapshot of one gesture-update tick, handed to the active mapping.
///
/// Ephemeral: built and consumed within a single pointer-sample step, never
/// persisted. Degrees are math-convention (counter-clockwise positive) after
/// the pointer-vector y-inversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecord {
    /// Bound value when the gesture began.
    pub start_value: f64,
    /// Pointer angle when the gesture began, in degrees.
    pub start_degree: f64,
    /// Bound value at this tick.
    pub current_value: f64,
    /// Pointer angle of the previously processed sample, in degrees.
    pub current_degree: f64,
    /// Pointer angle of the sample being processed, in degrees.
    pub next_degree: f64,
}

/// Drag state for a single rotary control.
///
/// The machine is Idle until [`KnobGesture::begin`], Dragging until
/// [`KnobGesture::end`]. One gesture is active at a time and samples are
/// processed strictly in order; transient state lives in NaN sentinels while
/// idle so a stray update can never fabricate a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobGesture {
    center: Point,
    start_vector: Vec2,
    start_value: f64,
    last_vector: Vec2,
}

impl Default for KnobGesture {
    fn default() -> Self {
        Self::new(Point::ORIGIN)
    }
}

impl KnobGesture {
    /// Creates an idle gesture tracker around `center`.
    pub fn new(center: Point) -> Self {
        Self {
            center,
            start_vector: Vec2::new(f64::NAN, f64::NAN),
            start_value: f64::NAN,
            last_vector: Vec2::new(f64::NAN, f64::NAN),
        }
    }

    /// Moves the rotation center (the control moved or resized).
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        !self.start_value.is_nan()
    }

    /// Starts a drag at `pointer`, capturing the bound `value`.
    ///
    /// The capture happens exactly once per gesture: a begin that arrives
    /// mid-drag (drag callbacks can re-enter during a bound-state update)
    /// keeps the original start vector and value.
    pub fn begin(&mut self, pointer: Point, value: f64) {
        if self.is_dragging() {
            return;
        }
        let v = pointer_vector(self.center, pointer);
        self.start_vector = v;
        self.last_vector = v;
        self.start_value = value;
    }

    /// Processes one pointer sample against the active mapping.
    ///
    /// Returns the candidate value to commit, or `None` when this tick leaves
    /// the bound value unchanged: the machine is idle, the sample's angle
    /// falls outside the mapping's degree range (discarded, not clamped, so no
    /// change event fires at the boundary), the mapping answered NaN, or the
    /// candidate equals the current value.
    pub fn update(&mut self, mapping: &KnobMapping, pointer: Point, current_value: f64) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let current = self.last_vector;
        let next = pointer_vector(self.center, pointer);
        // Tracking continues even when the sample is rejected below.
        self.last_vector = next;

        // Crossing the quadrant-3/4 boundary keeps the raw angles; applying
        // the correction there would report a spurious full-turn jump.
        let (start, current, next) = if crosses_lower_quadrants(current, next) {
            (
                raw_angle(self.start_vector),
                raw_angle(current),
                raw_angle(next),
            )
        } else {
            (
                adjusted_angle(self.start_vector),
                adjusted_angle(current),
                adjusted_angle(next),
            )
        };

        let (d0, d1) = mapping.degree_range();
        if d0.is_nan() || d1.is_nan() {
            return None;
        }
        let next_degree = next.to_degrees();
        if next_degree < d0.min(d1) || next_degree > d0.max(d1) {
            return None;
        }

        let record = GestureRecord {
            start_value: self.start_value,
            start_degree: start.to_degrees(),
            current_value,
            current_degree: current.to_degrees(),
            next_degree,
        };
        let candidate = mapping.new_value(&record);
        if candidate.is_nan() || candidate == current_value {
            return None;
        }
        Some(candidate)
    }

    /// Ends the drag, resetting all transient state to idle sentinels.
    pub fn end(&mut self) {
        self.start_vector = Vec2::new(f64::NAN, f64::NAN);
        self.last_vector = Vec2::new(f64::NAN, f64::NAN);
        self.start_value = f64::NAN;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::{LinearMapping, SegmentMapping, Stop};

    use super::*;

    fn linear_knob() -> KnobMapping {
        // Value 0..1 over the lower-left three quadrants, like a volume knob.
        LinearMapping::new((0.0, 1.0), (-180.0, 0.0)).into()
    }

    #[test]
    fn idle_machine_ignores_updates() {
        let mut gesture = KnobGesture::new(Point::new(50.0, 50.0));
        let out = gesture.update(&linear_knob(), Point::new(60.0, 50.0), 0.5);
        assert_eq!(out, None);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn begin_captures_only_once() {
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        gesture.begin(Point::new(10.0, 0.0), 0.25);
        assert!(gesture.is_dragging());
        // A re-entrant begin mid-drag keeps the original capture.
        gesture.begin(Point::new(0.0, 10.0), 0.75);
        assert_eq!(gesture.start_value, 0.25);
        assert!((gesture.start_vector.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_sample_is_discarded() {
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        // Screen point below center => math angle −90°, inside [−180, 0].
        gesture.begin(Point::new(0.0, 10.0), 0.5);
        // Screen point above and right of center => +10°, outside the range.
        let ten_deg = Point::new(10.0, -1.7632698070846498);
        let out = gesture.update(&linear_knob(), ten_deg, 0.5);
        assert_eq!(out, None);
    }

    #[test]
    fn clockwise_drag_raises_the_value() {
        let mapping = linear_knob();
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        // Start at −90° (screen point straight below the center).
        gesture.begin(Point::new(0.0, 10.0), 0.5);
        // Drag clockwise to −135° (screen lower-left diagonal).
        let out = gesture.update(&mapping, Point::new(-10.0, 10.0), 0.5);
        let v = out.expect("in-range drag must produce a candidate");
        // 45° of clockwise travel over a 180° span is a quarter of the range.
        assert!((v - 0.75).abs() < 1e-9);
    }

    #[test]
    fn lower_boundary_crossing_has_no_full_turn_jump() {
        let mapping: KnobMapping = LinearMapping::new((0.0, 1.0), (-225.0, 225.0)).into();
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        // Start at −45° (screen lower-right), cross to −135° (lower-left).
        gesture.begin(Point::new(10.0, 10.0), 0.5);
        let out = gesture.update(&mapping, Point::new(-10.0, 10.0), 0.5);
        let v = out.expect("crossing drag must produce a candidate");
        // True travel is 90° clockwise: a 90°/450° value change, not a
        // ±360° artifact.
        assert!((v - (0.5 + 90.0 / 450.0)).abs() < 1e-9);
    }

    #[test]
    fn nan_mapping_result_produces_no_update() {
        let mapping: KnobMapping = SegmentMapping::new([]).into();
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        gesture.begin(Point::new(0.0, 10.0), 0.5);
        let out = gesture.update(&mapping, Point::new(-10.0, 10.0), 0.5);
        assert_eq!(out, None);
    }

    #[test]
    fn unchanged_candidate_is_suppressed() {
        let mapping: KnobMapping = SegmentMapping::new([
            Stop::new(0.2, -120.0),
            Stop::new(0.8, -60.0),
        ])
        .into();
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        gesture.begin(Point::new(0.0, 10.0), 0.2);
        // A tiny wiggle that buckets back to the same stop reports no change.
        let out = gesture.update(&mapping, Point::new(-1.0, 10.0), 0.2);
        assert_eq!(out, None);
    }

    #[test]
    fn end_resets_to_idle_sentinels() {
        let mut gesture = KnobGesture::new(Point::new(0.0, 0.0));
        gesture.begin(Point::new(10.0, 0.0), 0.5);
        gesture.end();
        assert!(!gesture.is_dragging());
        assert!(gesture.start_vector.x.is_nan());
        assert!(gesture.last_vector.y.is_nan());
        // And a fresh gesture can begin cleanly.
        gesture.begin(Point::new(0.0, 10.0), 0.1);
        assert!(gesture.is_dragging());
    }
}
