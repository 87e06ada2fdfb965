// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock-face index layout.

use alloc::vec::Vec;

use gyre_core::{Angle, PolarPoint};

use crate::{DeferredRotations, RingDirection, RingPlacement, RingSlot};

/// Number of markers on a clock face.
pub const CLOCK_MARKERS: usize = 12;

/// Errors returned when building a [`ClockIndexSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockIndexError {
    /// The marker list does not have exactly [`CLOCK_MARKERS`] entries.
    MarkerCount {
        /// Number of markers actually supplied.
        got: usize,
    },
}

/// A 12-marker clock-face index.
///
/// This is the center-anchor ring rotated so marker 0 sits at 12 o'clock and
/// indices advance clockwise, matching how clock faces are read. The marker
/// payload is host-defined (labels, glyph ids, whatever the face renders).
#[derive(Clone, Debug, PartialEq)]
pub struct ClockIndexSpec<T> {
    markers: Vec<T>,
    direction: RingDirection,
}

impl<T> ClockIndexSpec<T> {
    /// Creates a clock index from exactly 12 markers.
    ///
    /// Any other marker count is a configuration error and the spec is
    /// simply not constructed.
    pub fn new(markers: Vec<T>) -> Result<Self, ClockIndexError> {
        if markers.len() != CLOCK_MARKERS {
            return Err(ClockIndexError::MarkerCount { got: markers.len() });
        }
        Ok(Self {
            markers,
            direction: RingDirection::NONE,
        })
    }

    /// Sets the per-marker rotation policy.
    pub fn with_direction(mut self, direction: RingDirection) -> Self {
        self.direction = direction;
        self
    }

    /// The markers, in clock order starting at 12 o'clock.
    pub fn markers(&self) -> &[T] {
        &self.markers
    }

    /// Places the 12 markers at `radius` from the face center.
    ///
    /// Marker `i` sits at `90° − i·30°`: angles decrease because clock order
    /// is clockwise while the angular convention is counter-clockwise.
    pub fn place(&self, radius: f64) -> RingPlacement {
        let radius = radius.max(0.0);
        let step = 360.0 / CLOCK_MARKERS as f64;

        let mut slots = Vec::with_capacity(CLOCK_MARKERS);
        let mut rotations = DeferredRotations::default();
        for index in 0..self.markers.len() {
            let angle = Angle::from_degrees(90.0 - step * index as f64);
            slots.push(RingSlot {
                index,
                angle,
                offset: PolarPoint::new(radius, angle).to_cartesian(),
            });
            rotations.push(index, self.direction.resolve(angle));
        }

        RingPlacement { slots, rotations }
    }
}
