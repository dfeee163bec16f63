// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis basics.
//!
//! Subdivides a short axis, prints every level, and maps a few pointer
//! offsets to coordinates in both orientations.
//!
//! Run:
//! - `cargo run -p cantor_demos --example axis_basics`

use cantor_axis::{Axis, AxisFlags, AxisMetrics, ConfigError, Orientation};

fn main() -> Result<(), ConfigError> {
    let flags = AxisFlags::VISIBLE | AxisFlags::NESTED_LEVELS;
    let mut forward = Axis::new(80.0, 3, Orientation::Forward, flags, AxisMetrics::default())?;
    let mut reversed = Axis::new(
        80.0,
        3,
        Orientation::Reversed,
        AxisFlags::VISIBLE,
        AxisMetrics::default(),
    )?;

    for (k, level) in forward.levels().iter().enumerate() {
        let spans: Vec<String> = level
            .iter()
            .map(|s| format!("[{:.2}, {:.2}]", s.start, s.end))
            .collect();
        println!("level {k}: {}", spans.join(" "));
    }

    for offset in [-5.0, 0.0, 9.9, 10.0, 55.0, 79.9, 80.0, 95.0] {
        forward.update_selection(offset);
        reversed.update_selection(offset);
        println!(
            "offset {offset:>5}: forward {} {}  reversed {} {}",
            forward.selected(),
            forward.selected_text(),
            reversed.selected(),
            reversed.selected_text(),
        );
    }

    forward.update_selection(55.0);
    println!("forward geometry: {} rects", forward.emit_geometry().len());
    Ok(())
}
