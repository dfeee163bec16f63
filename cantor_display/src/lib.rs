// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cantor Display: a small, backend-agnostic display list.
//!
//! The engine crates never draw. They describe a frame as a flat list of
//! [`DrawOp`]s, and an external renderer turns that list into pixels.
//!
//! - [`DrawOp::FillRect`]: a filled, axis-aligned rectangle.
//! - [`DrawOp::Line`]: a stroked line segment.
//! - [`DrawOp::Text`]: a text label placed relative to an anchor point.
//!
//! Colors are symbolic [`ColorToken`]s; the renderer owns the mapping to
//! concrete colors. [`Palette`] provides the default mapping as
//! [`peniko::Color`] values for renderers that want one.
//!
//! # Example
//!
//! ```rust
//! use cantor_display::{ColorToken, DisplayList, HAlign, VAlign};
//! use kurbo::{Line, Point, Rect};
//!
//! let mut list = DisplayList::new();
//! list.fill_rect(Rect::new(0.0, 0.0, 10.0, 4.0), ColorToken::Grid);
//! list.line(Line::new((0.0, 10.0), (10.0, 0.0)), ColorToken::Diagonal);
//! list.text("(1, 0, ...)", Point::new(10.0, 10.0), HAlign::Right, VAlign::Bottom);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.count(ColorToken::Grid), 1);
//! assert_eq!(list.bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::Color;

/// Symbolic color of a draw operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Unselected subdivision cells.
    Grid,
    /// The current selection: highlighted cells and the selection marker.
    Selected,
    /// The reference diagonal.
    Diagonal,
    /// Orbit markers.
    Orbit,
    /// Text labels.
    Text,
}

/// Horizontal placement of a label relative to its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    /// The anchor is the left edge of the text.
    #[default]
    Left,
    /// The anchor is the horizontal center of the text.
    Center,
    /// The anchor is the right edge of the text.
    Right,
}

/// Vertical placement of a label relative to its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum VAlign {
    /// The anchor is the top of the text.
    #[default]
    Top,
    /// The anchor is the vertical middle of the text.
    Middle,
    /// The anchor is the bottom of the text.
    Bottom,
}

/// A single drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in frame coordinates.
        rect: Rect,
        /// Fill color.
        color: ColorToken,
    },
    /// Stroke a line segment.
    Line {
        /// Segment in frame coordinates.
        line: Line,
        /// Stroke color.
        color: ColorToken,
    },
    /// Draw a text label.
    Text {
        /// Label contents.
        text: String,
        /// Anchor point in frame coordinates.
        anchor: Point,
        /// Horizontal placement relative to `anchor`.
        h_align: HAlign,
        /// Vertical placement relative to `anchor`.
        v_align: VAlign,
        /// Text color.
        color: ColorToken,
    },
}

impl DrawOp {
    /// The color token of this op.
    pub fn color(&self) -> ColorToken {
        match self {
            Self::FillRect { color, .. } | Self::Line { color, .. } | Self::Text { color, .. } => {
                *color
            }
        }
    }

    /// Bounding box of the geometry, or `None` for text (its extent depends on the font).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::FillRect { rect, .. } => Some(*rect),
            Self::Line { line, .. } => Some(Rect::from_points(line.p0, line.p1)),
            Self::Text { .. } => None,
        }
    }
}

/// An ordered list of [`DrawOp`]s. Later ops draw on top of earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create an empty list with room for `capacity` ops.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Append an op.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Append a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: ColorToken) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    /// Append a line segment.
    pub fn line(&mut self, line: Line, color: ColorToken) {
        self.ops.push(DrawOp::Line { line, color });
    }

    /// Append a text label drawn with [`ColorToken::Text`].
    pub fn text(&mut self, text: impl Into<String>, anchor: Point, h_align: HAlign, v_align: VAlign) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            anchor,
            h_align,
            v_align,
            color: ColorToken::Text,
        });
    }

    /// The recorded ops in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consume the list, returning the ops.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if no ops were recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Remove all ops, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Iterate over the ops in drawing order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    /// Number of ops drawn with `color`.
    pub fn count(&self, color: ColorToken) -> usize {
        self.ops.iter().filter(|op| op.color() == color).count()
    }

    /// Filled rectangles drawn with `color`, in drawing order.
    pub fn rects(&self, color: ColorToken) -> impl Iterator<Item = Rect> + '_ {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::FillRect { rect, color: c } if *c == color => Some(*rect),
            _ => None,
        })
    }

    /// Union of all rect and line bounds. Returns `None` if there are none.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.ops.iter().filter_map(DrawOp::bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

impl Extend<DrawOp> for DisplayList {
    fn extend<I: IntoIterator<Item = DrawOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl From<Vec<DrawOp>> for DisplayList {
    fn from(ops: Vec<DrawOp>) -> Self {
        Self { ops }
    }
}

impl IntoIterator for DisplayList {
    type Item = DrawOp;
    type IntoIter = alloc::vec::IntoIter<DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawOp;
    type IntoIter = core::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Default token → color mapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Unselected cells.
    pub grid: Color,
    /// Selection highlight and marker.
    pub selected: Color,
    /// Reference diagonal.
    pub diagonal: Color,
    /// Orbit markers.
    pub orbit: Color,
    /// Labels.
    pub text: Color,
}

impl Palette {
    /// Resolve a token to its color.
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Grid => self.grid,
            ColorToken::Selected => self.selected,
            ColorToken::Diagonal => self.diagonal,
            ColorToken::Orbit => self.orbit,
            ColorToken::Text => self.text,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color::from_rgb8(0xdb, 0xdb, 0xdb),
            selected: Color::from_rgb8(0xf4, 0x42, 0xc5),
            diagonal: Color::from_rgb8(0x00, 0x80, 0x00),
            orbit: Color::from_rgb8(0x42, 0x86, 0xf4),
            text: Color::BLACK,
        }
    }
}
