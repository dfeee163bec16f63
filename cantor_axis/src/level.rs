// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments and the recursive middle-gap subdivision.

use alloc::vec;
use alloc::vec::Vec;

/// A closed interval `[start, end]` along an axis, measured from the axis origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Offset of the near edge.
    pub start: f64,
    /// Offset of the far edge.
    pub end: f64,
}

impl Segment {
    /// Create a segment from its two edges.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the segment.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Split into two children separated by `gap`.
    ///
    /// The children are `[s, s + (w - gap)/2]` and `[s + (w + gap)/2, e]`.
    /// A segment narrower than `gap` splits into two zero-width children at its
    /// edges.
    pub fn split(&self, gap: f64) -> (Self, Self) {
        let w = self.width();
        if gap >= w {
            return (
                Self::new(self.start, self.start),
                Self::new(self.end, self.end),
            );
        }
        (
            Self::new(self.start, self.start + (w - gap) / 2.0),
            Self::new(self.start + (w + gap) / 2.0, self.end),
        )
    }
}

/// All segments at one depth, ordered left to right.
///
/// Depth `k` holds `2^k` segments; segment `i` is the ancestor at that depth of
/// every finest-level cell whose coordinate shifted right by `N - k` equals `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct SubdivisionLevel {
    segments: Vec<Segment>,
}

impl SubdivisionLevel {
    /// The segments, left to right.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the level has no segments. Never the case for built levels.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Iterate the segments left to right.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    fn split(&self, gap: f64) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() * 2);
        for seg in &self.segments {
            let (a, b) = seg.split(gap);
            segments.push(a);
            segments.push(b);
        }
        Self { segments }
    }
}

/// Build levels `0..=depth` for an axis of the given length.
///
/// Level 0 is the single segment `[0, length]`.
pub fn subdivide(length: f64, depth: u32, gap: f64) -> Vec<SubdivisionLevel> {
    let mut levels = Vec::with_capacity(depth as usize + 1);
    levels.push(SubdivisionLevel {
        segments: vec![Segment::new(0.0, length)],
    });
    for k in 0..depth as usize {
        let next = levels[k].split(gap);
        levels.push(next);
    }
    levels
}
