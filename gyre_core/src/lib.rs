// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives for angular UI layout.
//!
//! This crate is the leaf of the Gyre workspace:
//! - [`Angle`] is a scalar orientation convertible between radians and degrees.
//! - [`PolarPoint`] converts losslessly between polar and Cartesian coordinates.
//! - The [`vector`] helpers turn pointer positions into math-convention
//!   displacement vectors and continuous angles.
//! - [`ClampedValue`] keeps a bound value inside a closed range.
//!
//! Rendering, hit testing, and gesture recognition live elsewhere; everything
//! here is a plain value type computed fresh per layout or gesture pass.

#![no_std]

mod angle;
mod clamped;
#[cfg(not(feature = "std"))]
mod float;
mod polar;
pub mod vector;

pub use angle::Angle;
pub use clamped::ClampedValue;
pub use polar::PolarPoint;
