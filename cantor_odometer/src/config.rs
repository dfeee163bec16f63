// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for [`OdometerSystem`](crate::OdometerSystem).

use cantor_axis::{AxisMetrics, ConfigError, validate_depth, validate_length, validate_metric};
use cantor_display::Palette;

/// Parameters of an [`OdometerSystem`](crate::OdometerSystem).
///
/// Changing any of them at runtime goes through
/// [`OdometerSystem::reconfigure`](crate::OdometerSystem::reconfigure).
#[derive(Clone, Debug, PartialEq)]
pub struct OdometerConfig {
    /// Subdivision depth `N`; both axes have `2^N` cells.
    pub depth: u32,
    /// Side of the square framed by the two axes.
    pub size: f64,
    /// Distance between the square and each axis.
    pub axis_spacing: f64,
    /// Height of the band each axis draws into. Strip sizes are derived from
    /// it for the configured depth; see [`OdometerConfig::metrics`].
    pub axis_band: f64,
    /// Length of the truncated orbit; the frame holds its square of markers.
    pub orbit_iterations: u32,
    /// Side of the selection and orbit markers.
    pub point_size: f64,
    /// Default colors for renderers.
    pub palette: Palette,
}

impl Default for OdometerConfig {
    fn default() -> Self {
        Self {
            depth: 8,
            size: 700.0,
            axis_spacing: 4.0,
            axis_band: 60.0,
            orbit_iterations: 10,
            point_size: 6.0,
            palette: Palette::default(),
        }
    }
}

impl OdometerConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_depth(self.depth)?;
        validate_length(self.size)?;
        validate_metric("axis_spacing", self.axis_spacing)?;
        validate_metric("axis_band", self.axis_band)?;
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(ConfigError::InvalidPointSize(self.point_size));
        }
        Ok(())
    }

    /// Strip sizes and subdivision gap shared by both axes.
    pub fn metrics(&self) -> AxisMetrics {
        AxisMetrics::from_band(self.axis_band, self.depth)
    }

    /// Number of cells per axis, `2^N`. Only meaningful for a valid depth.
    pub fn cell_count(&self) -> u32 {
        1 << self.depth
    }
}
