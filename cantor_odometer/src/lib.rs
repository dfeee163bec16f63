// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cantor Odometer: the binary adding machine on a Cantor-set grid.
//!
//! ## Overview
//!
//! Two [`Axis`](cantor_axis::Axis) values frame a square: a forward *primary*
//! axis along the bottom edge and a reversed *secondary* axis along the left
//! edge. A pointer selects a cell on each. The odometer successor, precomputed
//! in a [`SuccessorTable`], moves the primary selection along its orbit, and
//! [`OdometerSystem::emit_frame`] describes everything as a
//! [`DisplayList`](cantor_display::DisplayList) for an external renderer.
//!
//! ## The successor
//!
//! A coordinate is an `N`-bit string read with the leading bit as the ones
//! place. [`successor`] adds one and carries toward the trailing bit, so every
//! coordinate lies on a single cycle of length `2^N`:
//!
//! ```rust
//! use cantor_odometer::SuccessorTable;
//!
//! let table = SuccessorTable::new(3).unwrap();
//! let orbit: Vec<u32> = table.orbit(0).take(8).collect();
//! assert_eq!(orbit, [0, 4, 2, 6, 1, 5, 3, 7]);
//! assert_eq!(table.successor(7), 0);
//! ```
//!
//! ## Workflow
//!
//! 1) Build an [`OdometerSystem`] from an origin and an [`OdometerConfig`].
//! 2) On every pointer event, call [`OdometerSystem::update`].
//! 3) On every frame, call [`OdometerSystem::emit_frame`] and hand the list to
//!    the renderer. Emitting never mutates the system.
//! 4) When the window changes, call [`OdometerSystem::reposition`] or
//!    [`OdometerSystem::resize`].
//!
//! ```rust
//! use cantor_display::ColorToken;
//! use cantor_odometer::{OdometerConfig, OdometerSystem};
//! use kurbo::Point;
//!
//! let mut system = OdometerSystem::new(Point::new(50.0, 50.0), OdometerConfig::default()).unwrap();
//! system.update(Point::new(400.0, 300.0));
//!
//! let frame = system.emit_frame();
//! assert_eq!(frame.count(ColorToken::Orbit), 100);
//! assert_eq!(frame.count(ColorToken::Text), 2);
//! ```
//!
//! ## Limits
//!
//! Depth is validated against [`MAX_DEPTH`](cantor_axis::MAX_DEPTH). The free
//! functions [`successor`], [`predecessor`] and [`advance`] work on any depth
//! up to [`MAX_OPERATOR_DEPTH`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod successor;
pub mod system;

pub use cantor_axis::ConfigError;
pub use config::OdometerConfig;
pub use successor::{
    MAX_OPERATOR_DEPTH, Orbit, SuccessorTable, advance, predecessor, reverse_bits, successor,
};
pub use system::OdometerSystem;
