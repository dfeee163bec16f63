// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Axis`] type: one subdivided dimension with a pointer-driven selection.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use bitflags::bitflags;
use cantor_display::{ColorToken, DrawOp};
use kurbo::{Point, Rect};

use crate::error::{ConfigError, validate_depth, validate_length, validate_metric};
use crate::level::{Segment, SubdivisionLevel, subdivide};

/// Direction in which coordinates increase along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Coordinates grow with the x offset. The axis is drawn as a horizontal
    /// strip below its origin.
    #[default]
    Forward,
    /// Coordinates grow toward the origin along y: coordinate 0 sits at the far
    /// end. The axis is drawn as a vertical strip left of its origin.
    Reversed,
}

bitflags! {
    /// Axis display flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AxisFlags: u8 {
        /// The axis emits geometry.
        const VISIBLE       = 0b0000_0001;
        /// The axis also emits one strip per coarser level, highlighting the
        /// ancestors of the selection.
        const NESTED_LEVELS = 0b0000_0010;
    }
}

impl Default for AxisFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Sizes used when emitting axis geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisMetrics {
    /// Thickness of the finest-level strip, perpendicular to the axis.
    pub thickness: f64,
    /// Thickness of each nested-level strip.
    pub nested_thickness: f64,
    /// Space between stacked strips.
    pub spacing: f64,
    /// Gap removed from the middle of every segment when subdividing.
    pub gap: f64,
}

impl AxisMetrics {
    /// Metrics for an axis that occupies a band of `height` units at `depth`.
    ///
    /// Five thirteenths of the band go to the finest strip, the rest is shared
    /// by the `depth - 1` nested strips and their spacing. Spacing shrinks
    /// below 2 when a nested share gets thinner than that, so the whole stack
    /// (see [`AxisMetrics::stack_height`]) never exceeds `height`.
    pub fn from_band(height: f64, depth: u32) -> Self {
        let nested_levels = f64::from(depth.saturating_sub(1).max(1));
        let share = 8.0 / 13.0 * height / nested_levels;
        let spacing = share.min(2.0);
        Self {
            thickness: libm::floor(5.0 / 13.0 * height),
            nested_thickness: libm::floor(share - spacing).max(0.0),
            spacing,
            gap: 1.0,
        }
    }

    /// Extent perpendicular to the axis of the finest strip plus the nested
    /// strips drawn for an axis of `depth`.
    pub fn stack_height(&self, depth: u32) -> f64 {
        let nested = f64::from(depth.saturating_sub(1));
        self.thickness + nested * (self.spacing + self.nested_thickness)
    }

    /// Check that every field is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_metric("thickness", self.thickness)?;
        validate_metric("nested_thickness", self.nested_thickness)?;
        validate_metric("spacing", self.spacing)?;
        validate_metric("gap", self.gap)
    }
}

impl Default for AxisMetrics {
    /// The metrics of a 60-unit band at depth 8.
    fn default() -> Self {
        Self {
            thickness: 23.0,
            nested_thickness: 3.0,
            spacing: 2.0,
            gap: 1.0,
        }
    }
}

/// One dimension of the visualization.
///
/// An axis splits `length` into `2^depth` cells through `depth` rounds of
/// middle-gap subdivision and keeps every intermediate level. It maps offsets
/// to cell coordinates and back, and tracks one selected coordinate.
#[derive(Clone, Debug)]
pub struct Axis {
    length: f64,
    depth: u32,
    orientation: Orientation,
    flags: AxisFlags,
    metrics: AxisMetrics,
    origin: Point,
    levels: Vec<SubdivisionLevel>,
    selected: u32,
}

impl Axis {
    /// Build an axis and its level table.
    ///
    /// Fails if `depth` is outside `1..=MAX_DEPTH`, if `length` is not a finite
    /// positive number, or if a metric is negative.
    pub fn new(
        length: f64,
        depth: u32,
        orientation: Orientation,
        flags: AxisFlags,
        metrics: AxisMetrics,
    ) -> Result<Self, ConfigError> {
        validate_depth(depth)?;
        validate_length(length)?;
        metrics.validate()?;
        Ok(Self {
            length,
            depth,
            orientation,
            flags,
            metrics,
            origin: Point::ZERO,
            levels: subdivide(length, depth, metrics.gap),
            selected: 0,
        })
    }

    /// Builder-style origin setter.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Length along the axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of subdivision rounds `N`.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of finest-level cells, `2^N`.
    pub fn cell_count(&self) -> u32 {
        1 << self.depth
    }

    /// Largest valid coordinate, `2^N - 1`.
    pub fn max_coordinate(&self) -> u32 {
        self.cell_count() - 1
    }

    /// Orientation of the axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Display flags.
    pub fn flags(&self) -> AxisFlags {
        self.flags
    }

    /// Replace the display flags. Levels are unaffected.
    pub fn set_flags(&mut self, flags: AxisFlags) {
        self.flags = flags;
    }

    /// Emission metrics.
    pub fn metrics(&self) -> &AxisMetrics {
        &self.metrics
    }

    /// Position of the axis origin in frame coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the axis. Only affects emitted geometry and pointer offsets.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// All levels, `0..=N`.
    pub fn levels(&self) -> &[SubdivisionLevel] {
        &self.levels
    }

    /// Level at depth `k`, if `k <= N`.
    pub fn level(&self, k: u32) -> Option<&SubdivisionLevel> {
        self.levels.get(k as usize)
    }

    /// The finest level, with one segment per coordinate.
    pub fn finest(&self) -> &SubdivisionLevel {
        &self.levels[self.depth as usize]
    }

    /// Segment of the finest level for `coord`.
    pub fn segment(&self, coord: u32) -> Option<&Segment> {
        self.finest().get(coord as usize)
    }

    /// Currently selected coordinate.
    pub fn selected(&self) -> u32 {
        self.selected
    }

    /// Select `coord`, clamped to the valid range.
    pub fn set_selected(&mut self, coord: u32) {
        self.selected = coord.min(self.max_coordinate());
    }

    /// Map an offset from the axis origin to a cell coordinate.
    ///
    /// Forward: `floor(p / length * 2^N)`. Reversed: `floor((1 - p / length) * 2^N)`.
    /// Offsets outside `[0, length)` produce coordinates outside `[0, 2^N)`;
    /// callers that need a valid coordinate go through [`Axis::update_selection`].
    pub fn position_to_coordinate(&self, p: f64) -> i64 {
        let t = p / self.length;
        let t = match self.orientation {
            Orientation::Forward => t,
            Orientation::Reversed => 1.0 - t,
        };
        floor_to_i64(t * f64::from(self.cell_count()))
    }

    /// Map a coordinate to the offset of its cell edge.
    ///
    /// Forward: `floor(c / 2^N * length)`. Reversed: `floor((1 - c / 2^N) * length)`.
    /// When `length` is a multiple of `2^N` this is an exact inverse of
    /// [`Axis::position_to_coordinate`] on valid coordinates; otherwise the
    /// round trip lands within one cell.
    pub fn coordinate_to_position(&self, c: i64) -> f64 {
        let t = c as f64 / f64::from(self.cell_count());
        let t = match self.orientation {
            Orientation::Forward => t,
            Orientation::Reversed => 1.0 - t,
        };
        libm::floor(t * self.length)
    }

    /// Offset of the selected cell.
    pub fn selected_position(&self) -> f64 {
        self.coordinate_to_position(i64::from(self.selected))
    }

    /// Address of `coord` as a Cantor-set point, e.g. `(1, 0, 1, ...)`.
    pub fn coordinate_to_binary_text(&self, coord: u32) -> String {
        binary_address(coord, self.depth)
    }

    /// Zero-padded `N`-digit binary of `coord`, most significant first.
    pub fn coordinate_to_bits(&self, coord: u32) -> String {
        let mut s = String::with_capacity(self.depth as usize);
        let _ = write!(s, "{:0width$b}", coord, width = self.depth as usize);
        s
    }

    /// Address of the current selection.
    pub fn selected_text(&self) -> String {
        self.coordinate_to_binary_text(self.selected)
    }

    /// Update the selection from an offset measured from the axis origin.
    ///
    /// Offsets before the origin select the coordinate at the near end, offsets
    /// at or past `length` select the far end. For a forward axis that is `0`
    /// and `2^N - 1`; a reversed axis swaps them.
    pub fn update_selection(&mut self, offset: f64) {
        let max = self.max_coordinate();
        let (near, far) = match self.orientation {
            Orientation::Forward => (0, max),
            Orientation::Reversed => (max, 0),
        };
        let selected = if offset < 0.0 {
            near
        } else if offset >= self.length {
            far
        } else {
            // A reversed axis maps offset 0 to 2^N; keep the selection in range.
            let c = self.position_to_coordinate(offset).clamp(0, i64::from(max));
            u32::try_from(c).unwrap_or(max)
        };
        if selected != self.selected {
            tracing::trace!(
                orientation = ?self.orientation,
                from = self.selected,
                to = selected,
                "axis selection changed"
            );
        }
        self.selected = selected;
    }

    /// Update the selection from a point in frame coordinates.
    ///
    /// The offset is measured along x for a forward axis and along y for a
    /// reversed axis.
    pub fn update_from_point(&mut self, point: Point) {
        let offset = match self.orientation {
            Orientation::Forward => point.x - self.origin.x,
            Orientation::Reversed => point.y - self.origin.y,
        };
        self.update_selection(offset);
    }

    /// Rectangles for this axis in frame coordinates.
    ///
    /// See [`Axis::extend_geometry`].
    pub fn emit_geometry(&self) -> Vec<DrawOp> {
        let mut out = Vec::with_capacity(self.rect_count());
        self.extend_geometry(&mut out);
        out
    }

    /// Number of rects [`Axis::extend_geometry`] emits with the current flags.
    pub fn rect_count(&self) -> usize {
        if !self.flags.contains(AxisFlags::VISIBLE) {
            return 0;
        }
        let finest = 1_usize << self.depth;
        if self.flags.contains(AxisFlags::NESTED_LEVELS) {
            // Levels 1..N-1 hold 2 + 4 + ... + 2^(N-1) segments.
            finest + finest - 2
        } else {
            finest
        }
    }

    /// Append the rectangles for this axis to `out`.
    ///
    /// Emits nothing unless the axis is [`AxisFlags::VISIBLE`]. Otherwise one
    /// rect per finest-level cell, highlighted when it is the selection, and,
    /// with [`AxisFlags::NESTED_LEVELS`], one rect per segment of every level
    /// from `N - 1` down to `1`, highlighted when it is an ancestor of the
    /// selection. Nested strips stack away from the finest strip, one per level.
    pub fn extend_geometry<E: Extend<DrawOp>>(&self, out: &mut E) {
        if !self.flags.contains(AxisFlags::VISIBLE) {
            return;
        }
        let m = self.metrics;
        out.extend(self.finest().iter().enumerate().map(|(i, seg)| DrawOp::FillRect {
            rect: self.strip_rect(seg, 0.0, m.thickness),
            color: highlight(i, self.selected),
        }));

        if !self.flags.contains(AxisFlags::NESTED_LEVELS) {
            return;
        }
        for j in 1..self.depth {
            let level = &self.levels[(self.depth - j) as usize];
            let offset =
                m.thickness + m.spacing + f64::from(j - 1) * (m.spacing + m.nested_thickness);
            let ancestor = self.selected >> j;
            out.extend(level.iter().enumerate().map(|(i, seg)| DrawOp::FillRect {
                rect: self.strip_rect(seg, offset, m.nested_thickness),
                color: highlight(i, ancestor),
            }));
        }
    }

    /// Rect for `seg` in a strip that starts `offset` away from the origin
    /// perpendicular to the axis and is `thickness` deep.
    fn strip_rect(&self, seg: &Segment, offset: f64, thickness: f64) -> Rect {
        let o = self.origin;
        match self.orientation {
            Orientation::Forward => Rect::new(
                o.x + seg.start,
                o.y + offset,
                o.x + seg.end,
                o.y + offset + thickness,
            ),
            Orientation::Reversed => Rect::new(
                o.x - offset - thickness,
                o.y + self.length - seg.end,
                o.x - offset,
                o.y + self.length - seg.start,
            ),
        }
    }
}

/// Format `coord` as `(b_{N-1}, ..., b_0, ...)`, most significant bit first.
pub fn binary_address(coord: u32, depth: u32) -> String {
    let mut t = String::with_capacity(3 * depth as usize + 5);
    t.push('(');
    for i in (0..depth).rev() {
        t.push(if (coord >> i) & 1 == 1 { '1' } else { '0' });
        t.push_str(", ");
    }
    t.push_str("...)");
    t
}

fn highlight(index: usize, selected: u32) -> ColorToken {
    if usize::try_from(selected).is_ok_and(|s| s == index) {
        ColorToken::Selected
    } else {
        ColorToken::Grid
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate; out-of-range input is a documented precondition violation"
)]
fn floor_to_i64(v: f64) -> i64 {
    libm::floor(v) as i64
}
