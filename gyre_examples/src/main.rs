// Copyright 2026 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for the gyre crates.

use kurbo::Point;

use gyre_core::Angle;
use gyre_knob::{KnobLayerSpec, KnobSpec, LinearMapping, SegmentMapping, Stop};
use gyre_layout::{Anchor, ArchimedeanSpiral, ClockIndexSpec, RingDirection, RingLayoutSpec};

fn main() {
    // A half ring of eight slots along the top edge, items facing the center.
    let ring = RingLayoutSpec::new(8, 120.0)
        .with_anchor(Anchor::Top)
        .with_direction(RingDirection::TO_CENTER)
        .with_inset(10.0);
    let placement = ring.place();
    println!("top half-ring, {} slots:", placement.slots.len());
    for slot in &placement.slots {
        println!(
            "  #{:>2} angle={:8.3}deg offset=({:8.3}, {:8.3})",
            slot.index,
            slot.angle.to_degrees(),
            slot.offset.x,
            slot.offset.y,
        );
    }

    // A clock dial with twelve hour markers.
    let hours: Vec<u8> = (1..=12).collect();
    let clock = ClockIndexSpec::new(hours).expect("twelve markers");
    println!("\nclock dial:");
    let dial = clock.place(100.0);
    for slot in &dial.slots {
        println!(
            "  {:>2}h at {:7.1}deg",
            clock.markers()[slot.index],
            slot.angle.to_degrees(),
        );
    }

    // Chord-equidistant spiral points.
    let spiral = ArchimedeanSpiral::new(20.0, 12.0, 15.0);
    let points = spiral.points(Angle::from_degrees(90.0), 24);
    println!("\nspiral ({} points):", points.len());
    for (i, p) in points.iter().enumerate().step_by(6) {
        let xy = p.to_cartesian();
        println!(
            "  #{i:>2} r={:7.2} theta={:8.2}deg -> ({:8.2}, {:8.2})",
            p.radius,
            p.angle.to_degrees(),
            xy.x,
            xy.y,
        );
    }

    // A linear volume knob driven by a simulated clockwise drag through the
    // lower quadrants.
    let mut volume = KnobSpec::new(LinearMapping::new((0.0, 1.0), (-225.0, 225.0)).into(), 0.5)
        .with_center(Point::new(100.0, 100.0))
        .with_layers(vec![KnobLayerSpec::pinned(0.0), KnobLayerSpec::rotating()]);
    println!("\nvolume knob: value={:.3}", volume.value());
    volume.drag_began(Point::new(100.0, 160.0));
    for pointer in [
        Point::new(80.0, 155.0),
        Point::new(55.0, 140.0),
        Point::new(45.0, 110.0),
    ] {
        if let Some(v) = volume.drag_updated(pointer) {
            println!("  drag -> value={v:.3} layers={:?}", volume.layer_degrees());
        }
    }
    volume.drag_ended();

    // A stepped mode selector with three detents.
    let modes = SegmentMapping::new([
        Stop::new(0.0, -180.0),
        Stop::new(0.5, -90.0),
        Stop::new(1.0, 0.0),
    ]);
    let mut selector = KnobSpec::new(modes.into(), 0.5).with_center(Point::new(0.0, 0.0));
    println!("\nmode selector: value={:.1}", selector.value());
    selector.drag_began(Point::new(0.0, 10.0));
    if let Some(v) = selector.drag_updated(Point::new(10.0, 3.0)) {
        println!("  snapped to detent value={v:.1}");
    }
    selector.drag_ended();
}
