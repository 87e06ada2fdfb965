// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A numeric value that always stays inside a closed range.

/// A value paired with the closed range it is clamped into.
///
/// The only mutators are [`ClampedValue::set`] (clamps the incoming value)
/// and [`ClampedValue::set_range`] (re-clamps the existing value against the
/// new range), so the invariant `range.0 <= value <= range.1` can never be
/// observed broken. Non-finite inputs to `set` are ignored: NaN is the
/// workspace-wide "undefined result, do not update" sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampedValue {
    value: f64,
    range: (f64, f64),
}

impl ClampedValue {
    /// Creates a clamped value, clamping `value` into `range`.
    pub fn new(value: f64, range: (f64, f64)) -> Self {
        Self {
            value: clamp_into(value, range),
            range,
        }
    }

    /// Returns the current value.
    pub const fn get(&self) -> f64 {
        self.value
    }

    /// Returns the range as authored.
    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Sets the value, clamping it into the range.
    ///
    /// Non-finite values are ignored and leave the current value unchanged.
    pub fn set(&mut self, value: f64) {
        if value.is_finite() {
            self.value = clamp_into(value, self.range);
        }
    }

    /// Replaces the range and re-clamps the current value against it.
    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
        self.value = clamp_into(self.value, range);
    }
}

/// Clamp into a range given in either endpoint order.
///
/// NaN endpoints leave the value untouched (the comparisons are all false),
/// which is the degenerate-range fallback rather than a panic.
fn clamp_into(value: f64, range: (f64, f64)) -> f64 {
    let (lo, hi) = if range.0 <= range.1 {
        (range.0, range.1)
    } else {
        (range.1, range.0)
    };
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
