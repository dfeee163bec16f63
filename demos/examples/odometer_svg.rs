// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odometer frame as SVG.
//!
//! Builds the default system, moves the pointer into the square, and prints
//! the emitted frame as an SVG document on stdout.
//!
//! Run:
//! - `cargo run -p cantor_demos --example odometer_svg > odometer.svg`

use cantor_demos::to_svg;
use cantor_odometer::{OdometerConfig, OdometerSystem};
use kurbo::Point;

fn main() {
    let config = OdometerConfig::default();
    let palette = config.palette;
    let canvas = config.size + 100.0;
    let mut system = match OdometerSystem::new(Point::new(50.0, 50.0), config) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    system.update(Point::new(412.0, 233.0));
    let (h, v) = system.selection();
    eprintln!("selection: ({h}, {v})");
    eprintln!("primary:   {}", system.primary().selected_text());
    eprintln!("secondary: {}", system.secondary().selected_text());

    let frame = system.emit_frame();
    eprintln!("{} draw ops", frame.len());
    print!("{}", to_svg(&frame, &palette, canvas, canvas));
}
