// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical sweep anchors.

use gyre_core::Angle;

/// A canonical reference point of a layout's bounding box from which a ring
/// or arc sweep originates.
///
/// The edge and corner names follow reading direction (`Leading` is the left
/// edge in left-to-right layouts); the engine itself only cares about the
/// angular sweep each anchor selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Upper-leading corner.
    TopLeading,
    /// Midpoint of the top edge.
    Top,
    /// Upper-trailing corner.
    TopTrailing,
    /// Midpoint of the leading edge.
    Leading,
    /// Center of the bounding box.
    Center,
    /// Midpoint of the trailing edge.
    Trailing,
    /// Lower-leading corner.
    BottomLeading,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Lower-trailing corner.
    BottomTrailing,
}

impl Anchor {
    /// All nine anchors, in reading order.
    pub const ALL: [Self; 9] = [
        Self::TopLeading,
        Self::Top,
        Self::TopTrailing,
        Self::Leading,
        Self::Center,
        Self::Trailing,
        Self::BottomLeading,
        Self::Bottom,
        Self::BottomTrailing,
    ];

    /// The canonical `(begin, end)` sweep for this anchor, in degrees.
    ///
    /// This is the single lookup table consulted for both ends of a sweep.
    /// Edge anchors sweep the facing half-plane, corners the facing 90°
    /// quadrant, and the center a full turn. The trailing-edge sweep runs
    /// 270°..450° rather than wrapping; see [`Angle`] for why angles are
    /// kept un-normalized.
    pub const fn sweep_degrees(self) -> (f64, f64) {
        match self {
            Self::Top => (0.0, 180.0),
            Self::Bottom => (180.0, 360.0),
            Self::Leading => (90.0, 270.0),
            Self::Trailing => (270.0, 450.0),
            Self::TopLeading => (90.0, 180.0),
            Self::TopTrailing => (0.0, 90.0),
            Self::BottomLeading => (180.0, 270.0),
            Self::BottomTrailing => (270.0, 360.0),
            Self::Center => (0.0, 360.0),
        }
    }

    /// The canonical sweep as [`Angle`] values.
    pub fn sweep(self) -> (Angle, Angle) {
        let (begin, end) = self.sweep_degrees();
        (Angle::from_degrees(begin), Angle::from_degrees(end))
    }

    /// Whether this is the center anchor, which closes into a full ring when
    /// given the full `[0, 1]` sub-range.
    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn sweep_table_matches_the_canonical_angles() {
        let expected = [
            (Anchor::TopLeading, 90.0, 180.0),
            (Anchor::Top, 0.0, 180.0),
            (Anchor::TopTrailing, 0.0, 90.0),
            (Anchor::Leading, 90.0, 270.0),
            (Anchor::Center, 0.0, 360.0),
            (Anchor::Trailing, 270.0, 450.0),
            (Anchor::BottomLeading, 180.0, 270.0),
            (Anchor::Bottom, 180.0, 360.0),
            (Anchor::BottomTrailing, 270.0, 360.0),
        ];
        for (anchor, begin, end) in expected {
            assert_eq!(anchor.sweep_degrees(), (begin, end), "anchor {anchor:?}");
        }
    }

    #[test]
    fn corner_anchors_sweep_a_quadrant() {
        for anchor in [
            Anchor::TopLeading,
            Anchor::TopTrailing,
            Anchor::BottomLeading,
            Anchor::BottomTrailing,
        ] {
            let (begin, end) = anchor.sweep_degrees();
            assert_eq!(end - begin, 90.0, "anchor {anchor:?}");
        }
    }

    #[test]
    fn only_center_closes_the_ring() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.is_center(), anchor == Anchor::Center);
        }
    }
}
