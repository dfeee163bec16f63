// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cantor_odometer` crate.
//!
//! These drive an `OdometerSystem` the way a renderer loop would: move the
//! pointer, emit a frame, and check the frame against the coordinate model.

use cantor_axis::{AxisMetrics, Orientation};
use cantor_display::{ColorToken, DrawOp};
use cantor_odometer::{ConfigError, OdometerConfig, OdometerSystem, SuccessorTable, successor};
use kurbo::{Point, Rect};

fn default_system() -> OdometerSystem {
    OdometerSystem::new(Point::new(50.0, 50.0), OdometerConfig::default()).unwrap()
}

#[test]
fn default_frame_counts() {
    let mut sys = default_system();
    sys.update(Point::new(300.0, 300.0));
    let frame = sys.emit_frame();

    // 256 cells + 254 nested segments on the primary, 256 cells on the secondary.
    assert_eq!(sys.primary().rect_count(), 510);
    assert_eq!(sys.secondary().rect_count(), 256);
    assert_eq!(frame.len(), 510 + 256 + 1 + 1 + 100 + 2);
    assert_eq!(frame.count(ColorToken::Orbit), 100);

    // Selected cells: one finest and seven ancestors on the primary, one on
    // the secondary, plus the marker.
    assert_eq!(frame.count(ColorToken::Selected), 8 + 1 + 1);
}

#[test]
fn orbit_markers_stay_inside_the_square() {
    let mut sys = default_system();
    // Closed square: coordinate 0 on the secondary axis sits on the bottom edge.
    let square = Rect::new(50.0, 50.0, 750.0, 750.0);
    for x in [49.0, 50.0, 123.4, 400.0, 749.9, 900.0] {
        sys.update(Point::new(x, 400.0));
        for rect in sys.emit_frame().rects(ColorToken::Orbit) {
            let c = rect.center();
            assert!(
                (square.x0..=square.x1).contains(&c.x) && (square.y0..=square.y1).contains(&c.y),
                "{rect:?} outside the square"
            );
        }
    }
}

#[test]
fn orbit_grid_is_the_self_product_of_the_truncated_orbit() {
    let mut sys = default_system();
    sys.update(Point::new(50.0 + 700.0 * 37.0 / 256.0 + 0.5, 0.0));
    let start = sys.selection().0;
    assert_eq!(start, 37);

    let table = sys.successors();
    let orbit: Vec<u32> = table.orbit(start).take(10).collect();
    let points = sys.orbit_points();
    assert_eq!(points.len(), 100);
    for (j, &c) in orbit.iter().enumerate() {
        let row: Vec<u32> = table.orbit(c).take(10).collect();
        for (k, &d) in row.iter().enumerate() {
            assert_eq!(points[j * 10 + k], (c, d));
        }
    }
    // Row starts walk the orbit itself.
    assert!(points.iter().step_by(10).map(|p| p.0).eq(orbit.iter().copied()));
}

#[test]
fn pointer_sweep_is_monotone_and_covers_every_cell() {
    let config = OdometerConfig {
        depth: 4,
        size: 160.0,
        ..Default::default()
    };
    let mut sys = OdometerSystem::new(Point::ZERO, config).unwrap();
    let mut seen_h = Vec::new();
    let mut seen_v = Vec::new();
    for i in -10..=170 {
        let p = f64::from(i);
        sys.update(Point::new(p, p));
        let (h, v) = sys.selection();
        if seen_h.last() != Some(&h) {
            seen_h.push(h);
        }
        if seen_v.last() != Some(&v) {
            seen_v.push(v);
        }
    }
    assert_eq!(seen_h, (0..16).collect::<Vec<_>>());
    assert_eq!(seen_v, (0..16).rev().collect::<Vec<_>>());
}

#[test]
fn marker_tracks_cell_edges() {
    let config = OdometerConfig {
        depth: 3,
        size: 80.0,
        ..Default::default()
    };
    let mut sys = OdometerSystem::new(Point::new(10.0, 20.0), config).unwrap();
    for h in 0..8_u32 {
        for v in 0..8_u32 {
            let px = 10.0 + f64::from(h) * 10.0 + 1.0;
            let py = 20.0 + 80.0 - f64::from(v) * 10.0 - 1.0;
            sys.update(Point::new(px, py));
            assert_eq!(sys.selection(), (h, v));
            let expected = Point::new(10.0 + f64::from(h) * 10.0, 20.0 + 80.0 - f64::from(v) * 10.0);
            assert_eq!(sys.point_for(h, v), expected);
        }
    }
}

#[test]
fn successor_cycles_exhaustively_for_small_depths() {
    for depth in 1..=12_u32 {
        let cells = 1_u32 << depth;
        let table = SuccessorTable::new(depth).unwrap();
        let mut x = 0;
        let mut steps = 0;
        loop {
            x = table.successor(x);
            steps += 1;
            if x == 0 {
                break;
            }
            assert!(steps < cells, "depth {depth}: cycle longer than {cells}");
        }
        assert_eq!(steps, cells, "depth {depth}");
        assert_eq!(table.as_slice()[0], successor(0, depth));
    }
}

#[test]
fn deepest_supported_system_builds() {
    let config = OdometerConfig {
        depth: cantor_axis::MAX_DEPTH,
        ..Default::default()
    };
    let sys = OdometerSystem::new(Point::ZERO, config).unwrap();
    assert_eq!(sys.successors().len(), 1 << cantor_axis::MAX_DEPTH);
    assert_eq!(sys.primary().finest().len(), 1 << cantor_axis::MAX_DEPTH);
}

#[test]
fn construction_errors_surface() {
    let err = OdometerSystem::new(
        Point::ZERO,
        OdometerConfig {
            depth: 0,
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::ZeroDepth);

    let err = OdometerSystem::new(
        Point::ZERO,
        OdometerConfig {
            size: f64::NAN,
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLength(v) if v.is_nan()));
}

#[test]
fn secondary_axis_draws_from_the_far_end() {
    let sys = OdometerSystem::new(
        Point::new(100.0, 0.0),
        OdometerConfig {
            depth: 2,
            size: 40.0,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(sys.secondary().orientation(), Orientation::Reversed);
    let ops = sys.secondary().emit_geometry();
    let first = match &ops[0] {
        DrawOp::FillRect { rect, .. } => *rect,
        other => panic!("unexpected op {other:?}"),
    };
    // Cell 0 hugs the bottom of the square.
    assert_eq!(first.y1, 40.0);
    assert_eq!(first.x1, 96.0);
}

#[test]
fn axis_strips_fit_the_band_at_every_depth() {
    for depth in [1, 2, 3, 8, 12, 16] {
        let config = OdometerConfig {
            depth,
            ..Default::default()
        };
        let band = config.axis_band;
        let sys = OdometerSystem::new(Point::new(50.0, 50.0), config).unwrap();
        let metrics = *sys.primary().metrics();
        assert_eq!(metrics, AxisMetrics::from_band(band, depth));
        assert_eq!(sys.secondary().metrics(), &metrics);

        // Everything the primary axis draws stays within the band below it.
        let top = sys.primary().origin().y;
        let bottom = sys
            .primary()
            .emit_geometry()
            .iter()
            .filter_map(DrawOp::bounds)
            .map(|r| r.y1)
            .fold(top, f64::max);
        assert!(bottom - top <= band, "depth {depth}: stack {}", bottom - top);
    }
}

#[test]
fn reconfigured_depth_resizes_the_strips() {
    let mut sys = default_system();
    assert_eq!(sys.primary().metrics().nested_thickness, 3.0);
    let shallow = OdometerConfig {
        depth: 3,
        ..sys.config().clone()
    };
    sys.reconfigure(shallow).unwrap();
    assert_eq!(sys.primary().metrics().nested_thickness, 16.0);
}
