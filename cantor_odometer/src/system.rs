// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two axes framing a square, driven by one pointer.

use alloc::vec::Vec;

use cantor_axis::{Axis, AxisFlags, ConfigError, Orientation};
use cantor_display::{ColorToken, DisplayList, HAlign, VAlign};
use kurbo::{Line, Point, Rect, Size};

use crate::config::OdometerConfig;
use crate::successor::SuccessorTable;

/// The odometer visualization.
///
/// The square has its top-left corner at `origin` and side `size`. The
/// *primary* axis runs forward along the bottom edge, with nested levels
/// stacked below it. The *secondary* axis runs reversed up the left edge, so
/// coordinate 0 of both axes meets at the bottom-left corner.
///
/// Call [`OdometerSystem::update`] with each pointer position and
/// [`OdometerSystem::emit_frame`] to describe the result.
#[derive(Clone, Debug)]
pub struct OdometerSystem {
    config: OdometerConfig,
    origin: Point,
    primary: Axis,
    secondary: Axis,
    successors: SuccessorTable,
}

impl OdometerSystem {
    /// Build both axes and the successor table.
    pub fn new(origin: Point, config: OdometerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (primary, secondary) = build_axes(origin, &config)?;
        let successors = SuccessorTable::new(config.depth)?;
        tracing::debug!(
            depth = config.depth,
            size = config.size,
            orbit_iterations = config.orbit_iterations,
            "built odometer system"
        );
        Ok(Self {
            config,
            origin,
            primary,
            secondary,
            successors,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &OdometerConfig {
        &self.config
    }

    /// Top-left corner of the square.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The forward axis along the bottom edge.
    pub fn primary(&self) -> &Axis {
        &self.primary
    }

    /// The reversed axis along the left edge.
    pub fn secondary(&self) -> &Axis {
        &self.secondary
    }

    /// The precomputed successor table.
    pub fn successors(&self) -> &SuccessorTable {
        &self.successors
    }

    /// Selected coordinates as `(primary, secondary)`.
    pub fn selection(&self) -> (u32, u32) {
        (self.primary.selected(), self.secondary.selected())
    }

    /// Move the square. Axes follow; no geometry is rebuilt.
    pub fn reposition(&mut self, origin: Point) {
        self.origin = origin;
        self.primary.set_origin(primary_origin(origin, &self.config));
        self.secondary.set_origin(secondary_origin(origin, &self.config));
    }

    /// Update both selections from a pointer position in frame coordinates.
    pub fn update(&mut self, pointer: Point) {
        self.primary.update_from_point(pointer);
        self.secondary.update_from_point(pointer);
    }

    /// Replace the configuration, rebuilding what depends on it.
    ///
    /// The successor table is rebuilt only when the depth changes. Selections
    /// are kept, clamped to the new coordinate range. On error the system is
    /// left unchanged.
    pub fn reconfigure(&mut self, config: OdometerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let (mut primary, mut secondary) = build_axes(self.origin, &config)?;
        let successors = if config.depth == self.successors.depth() {
            None
        } else {
            Some(SuccessorTable::new(config.depth)?)
        };
        primary.set_selected(self.primary.selected());
        secondary.set_selected(self.secondary.selected());
        tracing::debug!(
            depth = config.depth,
            size = config.size,
            table_rebuilt = successors.is_some(),
            "reconfigured odometer system"
        );
        self.primary = primary;
        self.secondary = secondary;
        if let Some(successors) = successors {
            self.successors = successors;
        }
        self.config = config;
        Ok(())
    }

    /// Change the side of the square.
    pub fn resize(&mut self, size: f64) -> Result<(), ConfigError> {
        let config = OdometerConfig {
            size,
            ..self.config.clone()
        };
        self.reconfigure(config)
    }

    /// The truncated orbit grid as `(c_j, d_k)` coordinate pairs.
    ///
    /// `c_j` is the primary selection advanced `j` times; `d_k` is `c_j`
    /// advanced `k` times, for `j, k` in `0..orbit_iterations`. The inner walk
    /// restarts from `c_j` on every row, so the grid is the product of the
    /// truncated orbit with itself, shifted along the diagonal.
    pub fn orbit_points(&self) -> Vec<(u32, u32)> {
        let n = self.config.orbit_iterations as usize;
        let mut out = Vec::with_capacity(n * n);
        for c in self.successors.orbit(self.primary.selected()).take(n) {
            out.extend(self.successors.orbit(c).take(n).map(|d| (c, d)));
        }
        out
    }

    /// Describe the current state as a display list.
    ///
    /// In drawing order: primary axis rects, secondary axis rects, the
    /// anti-diagonal of the square, the selection marker, the orbit markers, then
    /// the primary label at the bottom-right corner and the secondary label at
    /// the top-left corner.
    pub fn emit_frame(&self) -> DisplayList {
        let n = self.config.orbit_iterations as usize;
        let mut out = DisplayList::with_capacity(
            self.primary.rect_count() + self.secondary.rect_count() + n * n + 4,
        );
        self.emit_frame_into(&mut out);
        out
    }

    /// Append the frame to `out`; see [`OdometerSystem::emit_frame`].
    pub fn emit_frame_into(&self, out: &mut DisplayList) {
        let Point { x, y } = self.origin;
        let size = self.config.size;

        self.primary.extend_geometry(out);
        self.secondary.extend_geometry(out);

        out.line(Line::new((x, y + size), (x + size, y)), ColorToken::Diagonal);

        out.fill_rect(
            self.marker(self.primary.selected(), self.secondary.selected()),
            ColorToken::Selected,
        );

        for (c, d) in self.orbit_points() {
            out.fill_rect(self.marker(c, d), ColorToken::Orbit);
        }

        out.text(
            self.primary.selected_text(),
            Point::new(x + size, y + size),
            HAlign::Right,
            VAlign::Bottom,
        );
        out.text(
            self.secondary.selected_text(),
            Point::new(x, y),
            HAlign::Left,
            VAlign::Top,
        );
    }

    /// Screen position of the coordinate pair `(h, v)` inside the square.
    pub fn point_for(&self, h: u32, v: u32) -> Point {
        Point::new(
            self.origin.x + self.primary.coordinate_to_position(i64::from(h)),
            self.origin.y + self.secondary.coordinate_to_position(i64::from(v)),
        )
    }

    fn marker(&self, h: u32, v: u32) -> Rect {
        let side = self.config.point_size;
        Rect::from_center_size(self.point_for(h, v), Size::new(side, side))
    }
}

fn primary_origin(origin: Point, config: &OdometerConfig) -> Point {
    Point::new(origin.x, origin.y + config.size + config.axis_spacing)
}

fn secondary_origin(origin: Point, config: &OdometerConfig) -> Point {
    Point::new(origin.x - config.axis_spacing, origin.y)
}

fn build_axes(origin: Point, config: &OdometerConfig) -> Result<(Axis, Axis), ConfigError> {
    let metrics = config.metrics();
    let primary = Axis::new(
        config.size,
        config.depth,
        Orientation::Forward,
        AxisFlags::VISIBLE | AxisFlags::NESTED_LEVELS,
        metrics,
    )?
    .with_origin(primary_origin(origin, config));
    let secondary = Axis::new(
        config.size,
        config.depth,
        Orientation::Reversed,
        AxisFlags::VISIBLE,
        metrics,
    )?
    .with_origin(secondary_origin(origin, config));
    Ok((primary, secondary))
}
