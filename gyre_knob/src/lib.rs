// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotary knob and gauge building blocks.
//!
//! A knob maps a bounded numeric value to an angular position and back:
//! - [`KnobMapping`] is the value↔degree strategy ([`LinearMapping`] for
//!   continuous ranges, [`SegmentMapping`] for explicit stops).
//! - [`KnobGesture`] turns drag samples into candidate values through the
//!   active mapping, with quadrant-crossing correction.
//! - [`KnobSpec`] composes a mapping, a clamped bound value, and an ordered
//!   list of [`KnobLayerSpec`] layers whose rotations the host applies
//!   before delegating to each layer's own rendering.
//!
//! Undefined mapping results are `f64::NAN`, a "do not update" sentinel,
//! never an error and never a zero.

#![no_std]

extern crate alloc;

mod gesture;
mod knob;
mod mapping;

pub use gesture::{GestureRecord, KnobGesture};
pub use knob::{KnobLayerSpec, KnobSpec};
pub use mapping::{KnobMapping, LinearMapping, SegmentMapping, Stop};
