// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors and the validated depth range.

use core::fmt;

/// Largest depth accepted by [`Axis::new`](crate::Axis::new).
///
/// Each axis stores `2^(N+1) - 1` segments of 16 bytes and the odometer
/// stores `2^N` `u32` successors, so memory grows exponentially with depth.
/// At 20 the level table of one axis is 32 MiB; an odometer system holds two
/// axes and one table, about 68 MiB in total.
pub const MAX_DEPTH: u32 = 20;

/// Error returned when an axis or odometer is built from invalid parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Depth was zero.
    ZeroDepth,
    /// Depth exceeded the supported maximum.
    DepthTooLarge {
        /// Requested depth.
        depth: u32,
        /// Largest supported depth.
        max: u32,
    },
    /// Axis length or square size was not a finite positive number.
    InvalidLength(f64),
    /// A thickness, spacing or gap was negative or not finite.
    InvalidMetric {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Marker size was not a finite positive number.
    InvalidPointSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDepth => write!(f, "depth must be at least 1"),
            Self::DepthTooLarge { depth, max } => {
                write!(f, "depth {depth} exceeds the maximum of {max}")
            }
            Self::InvalidLength(v) => write!(f, "length must be finite and positive, got {v}"),
            Self::InvalidMetric { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            Self::InvalidPointSize(v) => {
                write!(f, "point size must be finite and positive, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Check that `depth` is in `1..=MAX_DEPTH`.
pub fn validate_depth(depth: u32) -> Result<(), ConfigError> {
    if depth == 0 {
        Err(ConfigError::ZeroDepth)
    } else if depth > MAX_DEPTH {
        Err(ConfigError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        })
    } else {
        Ok(())
    }
}

/// Check that `length` is finite and strictly positive.
pub fn validate_length(length: f64) -> Result<(), ConfigError> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength(length))
    }
}

/// Check that a size-like value named `name` is finite and non-negative.
pub fn validate_metric(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMetric { name, value })
    }
}
