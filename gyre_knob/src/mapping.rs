// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value↔angle mapping strategies.

use smallvec::SmallVec;

use crate::GestureRecord;

/// A single `(value, degree)` breakpoint of a segmented mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    /// Value this stop represents.
    pub value: f64,
    /// Degree the value sits at.
    pub degree: f64,
}

impl Stop {
    /// Creates a new stop.
    pub const fn new(value: f64, degree: f64) -> Self {
        Self { value, degree }
    }
}

/// Maps a bounded value domain onto an angular domain and back.
#[derive(Clone, Debug, PartialEq)]
pub enum KnobMapping {
    /// Continuous affine mapping between two closed intervals.
    Linear(LinearMapping),
    /// Explicit stop list with nearest-stop gesture resolution.
    Segment(SegmentMapping),
}

impl KnobMapping {
    /// The degree a value sits at. `NaN` when the mapping cannot place it.
    pub fn degree(&self, value: f64) -> f64 {
        match self {
            Self::Linear(m) => m.degree(value),
            Self::Segment(m) => m.degree(value),
        }
    }

    /// The candidate value for one gesture tick. `NaN` means "do not update".
    pub fn new_value(&self, record: &GestureRecord) -> f64 {
        match self {
            Self::Linear(m) => m.new_value(record),
            Self::Segment(m) => m.new_value(record),
        }
    }

    /// The declared degree range, `(NaN, NaN)` for an empty stop list.
    pub fn degree_range(&self) -> (f64, f64) {
        match self {
            Self::Linear(m) => m.degree_range,
            Self::Segment(m) => m.degree_range(),
        }
    }

    /// The declared value range, `(NaN, NaN)` for an empty stop list.
    pub fn value_range(&self) -> (f64, f64) {
        match self {
            Self::Linear(m) => m.value_range,
            Self::Segment(m) => m.value_range(),
        }
    }
}

impl From<LinearMapping> for KnobMapping {
    fn from(value: LinearMapping) -> Self {
        Self::Linear(value)
    }
}

impl From<SegmentMapping> for KnobMapping {
    fn from(value: SegmentMapping) -> Self {
        Self::Segment(value)
    }
}

/// A continuous affine mapping between a value range and a degree range.
///
/// `value_range` is `(min, max)` with `min <= max`; the degree range may run
/// in either direction (a knob whose maximum sits counter-clockwise of its
/// minimum simply declares a descending degree range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMapping {
    /// Value domain, `(min, max)`.
    pub value_range: (f64, f64),
    /// Angular range the value domain maps onto, in degrees.
    pub degree_range: (f64, f64),
}

impl LinearMapping {
    /// Creates a new linear mapping.
    pub const fn new(value_range: (f64, f64), degree_range: (f64, f64)) -> Self {
        Self {
            value_range,
            degree_range,
        }
    }

    /// Maps a value to its degree, clamping out-of-range values to the
    /// nearest range endpoint's angle.
    pub fn degree(&self, value: f64) -> f64 {
        let (v0, v1) = self.value_range;
        let (d0, d1) = self.degree_range;
        if value < v0 {
            return d0;
        }
        if value > v1 {
            return d1;
        }
        let denom = v1 - v0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (value - v0) / denom * (d1 - d0)
    }

    /// The candidate value for one gesture tick.
    ///
    /// The delta is `current° − next°`: pointer angles are math-convention
    /// (counter-clockwise positive), so a clockwise drag produces a positive
    /// delta, which is the direction a knob's value grows on screen.
    pub fn new_value(&self, record: &GestureRecord) -> f64 {
        let (v0, v1) = self.value_range;
        let (d0, d1) = self.degree_range;
        let degree_span = d1 - d0;
        if degree_span == 0.0 {
            return record.current_value;
        }
        let delta_degrees = record.current_degree - record.next_degree;
        let candidate = record.current_value + delta_degrees * (v1 - v0) / degree_span;
        if candidate < v0 {
            v0
        } else if candidate > v1 {
            v1
        } else {
            candidate
        }
    }
}

/// An explicit stop list, sorted by degree, with nearest-stop bucketing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentMapping {
    stops: SmallVec<[Stop; 8]>,
}

impl SegmentMapping {
    /// Creates a segment mapping; the stops are sorted by degree.
    pub fn new(stops: impl IntoIterator<Item = Stop>) -> Self {
        let mut stops: SmallVec<[Stop; 8]> = stops.into_iter().collect();
        stops.sort_unstable_by(|a, b| a.degree.total_cmp(&b.degree));
        Self { stops }
    }

    /// The stops, in ascending degree order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The derived degree range `[min stop degree, max stop degree]`, or
    /// `(NaN, NaN)` when the stop list is empty.
    pub fn degree_range(&self) -> (f64, f64) {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first.degree, last.degree),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// The derived value range over all stops, or `(NaN, NaN)` when empty.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for stop in &self.stops {
            min = min.min(stop.value);
            max = max.max(stop.value);
        }
        if min.is_finite() && max.is_finite() {
            (min, max)
        } else {
            (f64::NAN, f64::NAN)
        }
    }

    /// Exact-match degree lookup.
    ///
    /// A value with no matching stop yields `NaN`, deliberately *not* an
    /// interpolation. Callers treat the sentinel as "do not update".
    pub fn degree(&self, value: f64) -> f64 {
        self.stops
            .iter()
            .find(|stop| stop.value == value)
            .map_or(f64::NAN, |stop| stop.degree)
    }

    /// Buckets a degree to the nearest stop's value.
    ///
    /// The decision boundary between adjacent stops is the midpoint of their
    /// degrees; a degree exactly on a midpoint belongs to the later stop.
    /// Degrees beyond the first or last stop saturate to that stop.
    pub fn value_from_degree(&self, degree: f64) -> f64 {
        let Some(last) = self.stops.last() else {
            return f64::NAN;
        };
        for pair in self.stops.windows(2) {
            let midpoint = (pair[0].degree + pair[1].degree) / 2.0;
            if degree < midpoint {
                return pair[0].value;
            }
        }
        last.value
    }

    /// The candidate value for one gesture tick.
    ///
    /// The gesture's angular travel (`start° − next°`) is applied to the
    /// degree of the stop matching the gesture's start value, and the result
    /// is bucketed back to a stop. When no stop matches the start value
    /// exactly, the stop whose value is numerically closest to the current
    /// value anchors the travel instead (ties prefer the first stop in
    /// degree order).
    pub fn new_value(&self, record: &GestureRecord) -> f64 {
        if self.stops.is_empty() {
            return f64::NAN;
        }
        let delta_degrees = record.start_degree - record.next_degree;
        let base = self
            .stops
            .iter()
            .find(|stop| stop.value == record.start_value)
            .or_else(|| self.closest_by_value(record.current_value));
        let Some(base) = base else {
            return f64::NAN;
        };
        self.value_from_degree(base.degree + delta_degrees)
    }

    /// The stop whose value is numerically closest to `value`.
    fn closest_by_value(&self, value: f64) -> Option<&Stop> {
        let mut best: Option<(&Stop, f64)> = None;
        for stop in &self.stops {
            let diff = (stop.value - value).abs();
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((stop, diff)),
            }
        }
        best.map(|(stop, _)| stop)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn five_stops() -> SegmentMapping {
        SegmentMapping::new([
            Stop::new(0.0, -225.0),
            Stop::new(0.2, 0.0),
            Stop::new(0.5, -90.0),
            Stop::new(0.8, -180.0),
            Stop::new(1.0, 45.0),
        ])
    }

    fn record(
        start_value: f64,
        start_degree: f64,
        current_value: f64,
        current_degree: f64,
        next_degree: f64,
    ) -> GestureRecord {
        GestureRecord {
            start_value,
            start_degree,
            current_value,
            current_degree,
            next_degree,
        }
    }

    #[test]
    fn linear_round_trips_within_tolerance() {
        let m = LinearMapping::new((0.0, 10.0), (-135.0, 135.0));
        for i in 0..=20 {
            let v = i as f64 * 0.5;
            let d = m.degree(v);
            let back = (d - -135.0) / 270.0 * 10.0;
            assert!((back - v).abs() < 1e-9);
        }
    }

    #[test]
    fn linear_clamps_to_exact_endpoint_angles() {
        let m = LinearMapping::new((0.0, 1.0), (-225.0, 45.0));
        assert_eq!(m.degree(-0.5), -225.0);
        assert_eq!(m.degree(1.5), 45.0);
    }

    #[test]
    fn linear_gesture_delta_follows_the_clockwise_convention() {
        let m = LinearMapping::new((0.0, 1.0), (0.0, 270.0));
        // Pointer moved 27° clockwise: current 100°, next 73°.
        let v = m.new_value(&record(0.4, 108.0, 0.4, 100.0, 73.0));
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn linear_gesture_clamps_the_candidate() {
        let m = LinearMapping::new((0.0, 1.0), (0.0, 270.0));
        let v = m.new_value(&record(0.9, 243.0, 0.9, 243.0, 100.0));
        assert_eq!(v, 1.0);
    }

    #[test]
    fn linear_degenerate_degree_span_keeps_the_value() {
        let m = LinearMapping::new((0.0, 1.0), (90.0, 90.0));
        let v = m.new_value(&record(0.3, 90.0, 0.3, 90.0, 40.0));
        assert_eq!(v, 0.3);
    }

    #[test]
    fn segment_degree_requires_an_exact_match() {
        let m = five_stops();
        assert_eq!(m.degree(0.5), -90.0);
        assert!(m.degree(0.51).is_nan());
    }

    #[test]
    fn segment_buckets_by_midpoint() {
        let m = five_stops();
        assert_eq!(m.value_from_degree(-95.0), 0.5);
        assert_eq!(m.value_from_degree(200.0), 1.0);
        assert_eq!(m.value_from_degree(-300.0), 0.0);
    }

    #[test]
    fn segment_midpoint_tie_goes_to_the_later_stop() {
        let m = SegmentMapping::new([Stop::new(0.0, 0.0), Stop::new(1.0, 90.0)]);
        assert_eq!(m.value_from_degree(45.0), 1.0);
        assert_eq!(m.value_from_degree(44.9), 0.0);
    }

    #[test]
    fn segment_gesture_moves_from_the_start_stop() {
        let m = five_stops();
        // Start at value 0.5 (−90°); an 85° clockwise travel shifts the
        // start stop's degree to −5°, which buckets to the 0° stop.
        let v = m.new_value(&record(0.5, -90.0, 0.5, -90.0, -175.0));
        assert_eq!(v, 0.2);
    }

    #[test]
    fn segment_gesture_falls_back_to_the_nearest_stop() {
        let m = five_stops();
        // Start value 0.45 matches no stop; nearest to current 0.45 is 0.5.
        let v = m.new_value(&record(0.45, -90.0, 0.45, -90.0, -90.0));
        assert_eq!(v, 0.5);
    }

    #[test]
    fn segment_empty_stop_list_yields_nan() {
        let m = SegmentMapping::new([]);
        assert!(m.new_value(&record(0.5, 0.0, 0.5, 0.0, 10.0)).is_nan());
        assert!(m.value_from_degree(10.0).is_nan());
        let (d0, d1) = m.degree_range();
        assert!(d0.is_nan() && d1.is_nan());
    }

    #[test]
    fn segment_ranges_are_derived_from_the_stops() {
        let m = five_stops();
        assert_eq!(m.degree_range(), (-225.0, 45.0));
        assert_eq!(m.value_range(), (0.0, 1.0));
    }
}
