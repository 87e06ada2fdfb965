// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Rust's transcendental float methods like `f64::sin` are not available in
//! `core`. We provide a small trait that dispatches to either `std` or `libm`
//! depending on features. Vector-shaped math (`atan2`, `hypot`) goes through
//! `kurbo`, which handles the same dispatch itself.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("gyre_core requires either the `std` or `libm` feature");
