// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cantor Axis: one dimension of a Cantor-set subdivision.
//!
//! An [`Axis`] splits a length into `2^N` cells by removing a small gap from the
//! middle of every segment, `N` times over. Every intermediate level is kept, so
//! the coarser ancestors of a cell can be drawn next to it.
//!
//! - Map offsets to cell coordinates and back with
//!   [`Axis::position_to_coordinate`] and [`Axis::coordinate_to_position`].
//! - Format a coordinate as the binary address of its Cantor-set point with
//!   [`Axis::coordinate_to_binary_text`].
//! - Track a pointer with [`Axis::update_selection`]; out-of-range offsets clamp
//!   to the nearest end.
//! - Describe the axis as rectangles with [`Axis::emit_geometry`].
//!
//! An axis is either [`Orientation::Forward`] (coordinates grow along x) or
//! [`Orientation::Reversed`] (coordinate 0 at the far end along y), which lets
//! two axes frame a square with a shared origin corner.
//!
//! # Example
//!
//! ```rust
//! use cantor_axis::{Axis, AxisFlags, AxisMetrics, Orientation};
//!
//! let mut axis = Axis::new(
//!     80.0,
//!     3,
//!     Orientation::Forward,
//!     AxisFlags::VISIBLE | AxisFlags::NESTED_LEVELS,
//!     AxisMetrics::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(axis.position_to_coordinate(40.0), 4);
//! assert_eq!(axis.coordinate_to_position(4), 40.0);
//!
//! axis.update_selection(55.0);
//! assert_eq!(axis.selected(), 5);
//! assert_eq!(axis.selected_text(), "(1, 0, 1, ...)");
//!
//! // 8 cells plus the 4 + 2 segments of the nested levels.
//! assert_eq!(axis.emit_geometry().len(), 14);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod axis;
pub mod error;
pub mod level;

pub use axis::{Axis, AxisFlags, AxisMetrics, Orientation, binary_address};
pub use error::{ConfigError, MAX_DEPTH, validate_depth, validate_length, validate_metric};
pub use level::{Segment, SubdivisionLevel, subdivide};
