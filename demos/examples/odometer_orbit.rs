// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odometer orbit.
//!
//! Walks the successor cycle at a small depth, printing each coordinate with
//! its binary address, then jumps ahead with `advance`.
//!
//! Run:
//! - `cargo run -p cantor_demos --example odometer_orbit`

use cantor_axis::binary_address;
use cantor_odometer::{ConfigError, SuccessorTable, advance, reverse_bits};

fn main() -> Result<(), ConfigError> {
    let depth = 4;
    let table = SuccessorTable::new(depth)?;

    println!("orbit of 0 at depth {depth}:");
    for (step, x) in table.orbit(0).take(table.len() + 1).enumerate() {
        println!(
            "  {step:>2}: {x:>2}  {}  (counter {})",
            binary_address(x, depth),
            reverse_bits(x, depth),
        );
    }

    let start = 5;
    for n in [1_u64, 3, 16, 1000] {
        println!(
            "advance({start}, {n}) = {} (table: {})",
            advance(start, n, depth),
            table.advance(start, n),
        );
    }
    Ok(())
}
