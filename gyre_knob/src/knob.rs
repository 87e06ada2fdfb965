// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob composition: mapping + bound value + layers.
//!
//! A knob is assembled from an ordinary ordered list of layers; the optional
//! background layer is an explicit `Option` decided at construction.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use gyre_core::ClampedValue;

use crate::{KnobGesture, KnobMapping};

/// One visual layer of a knob or gauge.
///
/// The engine computes the rotation each layer should adopt and hands it to
/// the host before the host delegates to the layer's own rendering; nothing
/// here draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobLayerSpec {
    /// Fixed layers never rotate with the value (tracks, tick scales).
    pub fixed: bool,
    /// Base rotation in degrees, used as-is for fixed layers.
    pub degree: f64,
    /// Optional private degree range; when present, the value's normalized
    /// position is re-mapped into it instead of using the knob mapping's
    /// degree directly.
    pub degree_range: Option<(f64, f64)>,
    /// Cartesian offset of the layer from the knob center.
    pub offset: Vec2,
    /// Layer radius, for hosts that size the layer from it.
    pub radius: f64,
}

impl KnobLayerSpec {
    /// A layer that rotates with the knob value.
    pub const fn rotating() -> Self {
        Self {
            fixed: false,
            degree: 0.0,
            degree_range: None,
            offset: Vec2::ZERO,
            radius: 0.0,
        }
    }

    /// A layer pinned at `degree`, independent of the value.
    pub const fn pinned(degree: f64) -> Self {
        Self {
            fixed: true,
            degree,
            degree_range: None,
            offset: Vec2::ZERO,
            radius: 0.0,
        }
    }

    /// Gives the layer its own degree range.
    pub const fn with_degree_range(mut self, range: (f64, f64)) -> Self {
        self.degree_range = Some(range);
        self
    }

    /// Sets the layer's offset from the knob center.
    pub const fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the layer radius.
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// A composed rotary control.
///
/// Owns the mapping, the clamped bound value, the layer list, and the drag
/// state machine. The bound value is the single piece of state shared with
/// the embedding application; it is written at most once per processed
/// pointer sample, and a committed value is never rolled back.
#[derive(Clone, Debug)]
pub struct KnobSpec {
    /// Active value↔degree strategy.
    pub mapping: KnobMapping,
    /// Layers in paint order.
    pub layers: Vec<KnobLayerSpec>,
    /// Optional background layer, `None` when the caller supplies no
    /// background renderer.
    pub background: Option<KnobLayerSpec>,
    value: ClampedValue,
    gesture: KnobGesture,
}

impl KnobSpec {
    /// Creates a knob with an initial value, clamped to the mapping's range.
    pub fn new(mapping: KnobMapping, initial_value: f64) -> Self {
        let value = ClampedValue::new(initial_value, mapping.value_range());
        Self {
            mapping,
            layers: Vec::new(),
            background: None,
            value,
            gesture: KnobGesture::default(),
        }
    }

    /// Sets the layer list.
    pub fn with_layers(mut self, layers: Vec<KnobLayerSpec>) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the background layer.
    pub fn with_background(mut self, layer: KnobLayerSpec) -> Self {
        self.background = Some(layer);
        self
    }

    /// Sets the rotation center in the host's coordinate space.
    pub fn with_center(mut self, center: Point) -> Self {
        self.gesture.set_center(center);
        self
    }

    /// The current bound value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Writes the bound value directly (host-driven updates), clamped.
    pub fn set_value(&mut self, value: f64) {
        self.value.set(value);
    }

    /// The rotation a single layer should adopt, in degrees.
    ///
    /// Fixed layers keep their declared degree. Layers with a private degree
    /// range receive the value's normalized position re-mapped into that
    /// range. Everything else gets the mapping's degree for the current
    /// value, which may be NaN for a segment mapping between stops; hosts
    /// skip the rotation in that case.
    pub fn layer_degree(&self, layer: &KnobLayerSpec) -> f64 {
        if layer.fixed {
            return layer.degree;
        }
        if let Some((d0, d1)) = layer.degree_range {
            let (v0, v1) = self.mapping.value_range();
            let span = v1 - v0;
            if span == 0.0 {
                return d0;
            }
            let t = (self.value.get() - v0) / span;
            return d0 + t * (d1 - d0);
        }
        self.mapping.degree(self.value.get())
    }

    /// Rotations for every layer, in layer order.
    pub fn layer_degrees(&self) -> Vec<f64> {
        self.layers
            .iter()
            .map(|layer| self.layer_degree(layer))
            .collect()
    }

    /// Drag began at `pointer`; captures gesture state once.
    pub fn drag_began(&mut self, pointer: Point) {
        self.gesture.begin(pointer, self.value.get());
    }

    /// Drag moved to `pointer`.
    ///
    /// Returns the newly committed value, or `None` when the sample left the
    /// bound value unchanged (out-of-range angle, undefined mapping result,
    /// or no movement). This is the single write site for gesture-driven
    /// value changes.
    pub fn drag_updated(&mut self, pointer: Point) -> Option<f64> {
        let candidate = self
            .gesture
            .update(&self.mapping, pointer, self.value.get())?;
        self.value.set(candidate);
        Some(self.value.get())
    }

    /// Drag ended or was cancelled; transient gesture state resets.
    pub fn drag_ended(&mut self) {
        self.gesture.end();
    }
}
