// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring and arc placement.
//!
//! A placement pass is a pure function from a [`RingLayoutSpec`] to slot
//! positions plus a queue of per-slot rotations. Positions are consumed by
//! the host's layout pass immediately; rotations are deliberately delivered
//! one tick later (see [`DeferredRotations`]), so the positioning pass never
//! blocks on per-item rotation updates.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Vec2;

use gyre_core::{Angle, PolarPoint};

use crate::{Anchor, RingDirection};

/// A single placed slot on a ring or arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSlot {
    /// Index of the item this slot positions.
    pub index: usize,
    /// Placement angle along the sweep.
    pub angle: Angle,
    /// Cartesian offset from the anchor point.
    pub offset: Vec2,
}

/// One queued rotation, applied a tick after placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationUpdate {
    /// Slot index the rotation belongs to.
    pub slot: usize,
    /// Rotation the item should adopt.
    pub rotation: Angle,
}

/// Rotation updates produced by a placement pass.
///
/// Rotations are decoupled from positioning: the host drains this queue
/// *after* the current layout pass, on the same thread that ran layout.
/// Items can disappear between placement and drain (a re-layout removed
/// them); entries whose slot is no longer live are skipped silently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeferredRotations {
    pending: Vec<RotationUpdate>,
}

impl DeferredRotations {
    /// Returns `true` when no rotations are queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of queued rotations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// The queued updates, in placement order.
    pub fn pending(&self) -> &[RotationUpdate] {
        &self.pending
    }

    /// Drains the queue, invoking `sink` once per update whose slot is still
    /// in `live`. Updates for removed slots are dropped without error.
    pub fn apply(self, live: &HashSet<usize>, mut sink: impl FnMut(usize, Angle)) {
        for update in self.pending {
            if live.contains(&update.slot) {
                sink(update.slot, update.rotation);
            }
        }
    }

    pub(crate) fn push(&mut self, slot: usize, rotation: Angle) {
        self.pending.push(RotationUpdate { slot, rotation });
    }
}

/// Output of a placement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RingPlacement {
    /// One slot per item, in index order.
    pub slots: Vec<RingSlot>,
    /// Rotations to apply after the layout pass completes.
    pub rotations: DeferredRotations,
}

/// Declarative inputs for a ring or arc placement pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayoutSpec {
    /// Number of items to place.
    pub count: usize,
    /// Placement radius from the anchor point.
    pub radius: f64,
    /// Anchor selecting the canonical sweep.
    pub anchor: Anchor,
    /// Normalized sub-range of the sweep, `[lo, hi] ⊆ [0, 1]`.
    pub range: (f64, f64),
    /// Per-item rotation policy.
    pub direction: RingDirection,
    /// Extra radial inset reserved for oversized children.
    pub inset: f64,
}

impl RingLayoutSpec {
    /// Creates a full-ring spec centered on the anchor box.
    pub fn new(count: usize, radius: f64) -> Self {
        Self {
            count,
            radius,
            anchor: Anchor::Center,
            range: (0.0, 1.0),
            direction: RingDirection::NONE,
            inset: 0.0,
        }
    }

    /// Sets the anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the normalized sub-range, clamping each endpoint into `[0, 1]`.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = (lo.max(0.0).min(1.0), hi.max(0.0).min(1.0));
        self
    }

    /// Sets the rotation policy.
    pub fn with_direction(mut self, direction: RingDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the radial inset.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Computes slot positions and queued rotations.
    ///
    /// The active sweep is the anchor sweep narrowed to `range`. For the
    /// center anchor with the full `[0, 1]` range the sweep divides into
    /// `count` equal steps (closed ring, no duplicated endpoint); every other
    /// configuration divides into `max(count - 1, 1)` steps so both sweep
    /// endpoints are populated (open arc). The full-range test is an exact
    /// float comparison: the full range is only ever produced by the literal
    /// `(0.0, 1.0)` default, never by upstream arithmetic.
    ///
    /// `count == 0` yields an empty (but valid) placement, and a non-positive
    /// effective radius clamps to zero.
    pub fn place(&self) -> RingPlacement {
        let (begin, end) = self.anchor.sweep_degrees();
        let (lo, hi) = self.range;
        let sweep_begin = begin + (end - begin) * lo;
        let sweep_end = begin + (end - begin) * hi;
        let span = sweep_end - sweep_begin;

        let closed_ring = self.anchor.is_center() && lo == 0.0 && hi == 1.0;
        let steps = if closed_ring {
            self.count
        } else {
            self.count.saturating_sub(1).max(1)
        };
        let step = if steps == 0 { 0.0 } else { span / steps as f64 };

        let radius = (self.radius - self.inset).max(0.0);

        let mut slots = Vec::with_capacity(self.count);
        let mut rotations = DeferredRotations::default();
        for index in 0..self.count {
            let angle = Angle::from_degrees(sweep_begin + step * index as f64);
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
