// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring, arc, and spiral placement algorithms.
//!
//! This crate computes *where things go* and nothing else:
//! - [`RingLayoutSpec`] places N items along a circle or arc anchored to one
//!   of nine canonical [`Anchor`] points, with per-item rotations delivered
//!   out of band through [`DeferredRotations`].
//! - [`ArchimedeanSpiral`] generates chord-equidistant points along a spiral,
//!   for spiral paths and glyph placement.
//! - [`ClockIndexSpec`] is the clock-face convenience layout, validated at
//!   construction.
//!
//! Hosts receive Cartesian offsets and rotation angles; rendering and child
//! measurement stay on their side of the boundary.

#![no_std]

extern crate alloc;

mod anchor;
mod clock;
mod direction;
mod ring;
mod spiral;

pub use anchor::Anchor;
pub use clock::{CLOCK_MARKERS, ClockIndexError, ClockIndexSpec};
pub use direction::RingDirection;
pub use ring::{DeferredRotations, RingLayoutSpec, RingPlacement, RingSlot, RotationUpdate};
pub use spiral::ArchimedeanSpiral;
