// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The odometer successor operator and its precomputed table.
//!
//! Coordinates are read as `N`-digit binary numbers whose *most* significant
//! displayed bit is the ones place. Adding one flips that bit, and a carry moves
//! toward bit 0, the finest subdivision. Equivalently, the successor is
//! "reverse the bits, add one modulo `2^N`, reverse back", which makes it a
//! single cycle through all `2^N` coordinates.

use alloc::vec::Vec;

use cantor_axis::{ConfigError, validate_depth};

/// Largest depth the free functions in this module accept.
pub const MAX_OPERATOR_DEPTH: u32 = u32::BITS;

/// Odometer successor of `x` over `depth` bits.
///
/// Requires `1 <= depth <= 32` and `x < 2^depth`; bits above `depth` pass
/// through unchanged.
///
/// ```
/// use cantor_odometer::successor;
/// assert_eq!(successor(0b000, 3), 0b100);
/// assert_eq!(successor(0b100, 3), 0b010);
/// assert_eq!(successor(0b111, 3), 0b000);
/// ```
pub fn successor(mut x: u32, depth: u32) -> u32 {
    debug_assert!((1..=MAX_OPERATOR_DEPTH).contains(&depth), "depth {depth} out of range");
    let mut mask = 1_u32 << (depth - 1);
    while mask != 0 {
        let carry = x & mask;
        x ^= mask;
        if carry == 0 {
            return x;
        }
        mask = carry >> 1;
    }
    // Every bit was set and has been cleared: wrap to zero.
    x
}

/// Odometer predecessor of `x` over `depth` bits; the inverse of [`successor`].
///
/// Same preconditions as [`successor`].
pub fn predecessor(mut x: u32, depth: u32) -> u32 {
    debug_assert!((1..=MAX_OPERATOR_DEPTH).contains(&depth), "depth {depth} out of range");
    let mut mask = 1_u32 << (depth - 1);
    while mask != 0 {
        let bit = x & mask;
        x ^= mask;
        if bit != 0 {
            return x;
        }
        mask >>= 1;
    }
    x
}

/// Reverse the low `depth` bits of `x`.
pub fn reverse_bits(x: u32, depth: u32) -> u32 {
    debug_assert!((1..=MAX_OPERATOR_DEPTH).contains(&depth), "depth {depth} out of range");
    x.reverse_bits() >> (u32::BITS - depth)
}

/// Apply [`successor`] `n` times in constant time.
pub fn advance(x: u32, n: u64, depth: u32) -> u32 {
    debug_assert!((1..=MAX_OPERATOR_DEPTH).contains(&depth), "depth {depth} out of range");
    let mask = u64::MAX >> (u64::BITS - depth);
    let counter = (u64::from(reverse_bits(x, depth)) + (n & mask)) & mask;
    // `counter` fits in `depth` bits.
    reverse_bits(u32::try_from(counter).unwrap_or_default(), depth)
}

/// Successors of every coordinate at a fixed depth.
///
/// Built once per depth; lookups are a single index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessorTable {
    depth: u32,
    next: Vec<u32>,
}

impl SuccessorTable {
    /// Build the table for `depth`, which must be in `1..=MAX_DEPTH`.
    pub fn new(depth: u32) -> Result<Self, ConfigError> {
        validate_depth(depth)?;
        let next: Vec<u32> = (0..1_u32 << depth).map(|x| successor(x, depth)).collect();
        tracing::debug!(depth, cells = next.len(), "built successor table");
        Ok(Self { depth, next })
    }

    /// Depth the table was built for.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of coordinates, `2^N`.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Always false; a table covers at least two coordinates.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// The table itself, indexed by coordinate.
    pub fn as_slice(&self) -> &[u32] {
        &self.next
    }

    /// Successor of `coord`, or `None` if it is out of range.
    pub fn get(&self, coord: u32) -> Option<u32> {
        self.next.get(coord as usize).copied()
    }

    /// Successor of `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord >= 2^N`.
    pub fn successor(&self, coord: u32) -> u32 {
        self.next[coord as usize]
    }

    /// Apply the successor `n` times.
    pub fn advance(&self, coord: u32, n: u64) -> u32 {
        advance(coord, n, self.depth)
    }

    /// The forward orbit of `start`: `start`, its successor, and so on forever.
    ///
    /// Use [`Iterator::take`] to truncate it.
    ///
    /// # Panics
    ///
    /// The iterator panics if `start >= 2^N`.
    pub fn orbit(&self, start: u32) -> Orbit<'_> {
        Orbit {
            table: self,
            next: start,
        }
    }
}

/// Iterator over a forward orbit; see [`SuccessorTable::orbit`].
#[derive(Clone, Debug)]
pub struct Orbit<'a> {
    table: &'a SuccessorTable,
    next: u32,
}

impl Iterator for Orbit<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next;
        self.next = self.table.successor(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn depth_three_cycle() {
        let table = SuccessorTable::new(3).unwrap();
        assert_eq!(table.successor(0), 4);
        let orbit: Vec<u32> = table.orbit(0).take(9).collect();
        assert_eq!(orbit, vec![0, 4, 2, 6, 1, 5, 3, 7, 0]);
    }

    #[test]
    fn single_cycle_through_every_coordinate() {
        for depth in 1..=10 {
            let table = SuccessorTable::new(depth).unwrap();
            let cells = table.len();
            for start in [0, 1, (cells as u32) - 1] {
                let mut seen = vec![false; cells];
                let mut x = start;
                for step in 0..cells {
                    assert!(!seen[x as usize], "depth {depth}: revisited {x} at step {step}");
                    seen[x as usize] = true;
                    x = table.successor(x);
                }
                assert_eq!(x, start, "depth {depth}: orbit of {start} did not close");
            }
        }
    }

    #[test]
    fn table_is_a_bijection() {
        for depth in 1..=8 {
            let table = SuccessorTable::new(depth).unwrap();
            let mut hit = vec![0_u8; table.len()];
            for &y in table.as_slice() {
                hit[y as usize] += 1;
            }
            assert!(hit.iter().all(|&n| n == 1), "depth {depth}");
        }
    }

    #[test]
    fn predecessor_inverts_successor() {
        for depth in 1..=8 {
            for x in 0..1_u32 << depth {
                assert_eq!(predecessor(successor(x, depth), depth), x);
                assert_eq!(successor(predecessor(x, depth), depth), x);
            }
        }
        assert_eq!(predecessor(0, 3), 7);
    }

    #[test]
    fn advance_matches_repeated_successor() {
        let table = SuccessorTable::new(6).unwrap();
        for start in [0_u32, 1, 17, 63] {
            let mut x = start;
            for n in 0..200_u64 {
                assert_eq!(table.advance(start, n), x, "start {start}, n {n}");
                x = table.successor(x);
            }
        }
    }

    #[test]
    fn full_width_operator() {
        assert_eq!(successor(0, 32), 1 << 31);
        assert_eq!(successor(u32::MAX, 32), 0);
        assert_eq!(predecessor(0, 32), u32::MAX);
        assert_eq!(advance(0, 1, 32), 1 << 31);
        assert_eq!(reverse_bits(1, 32), 1 << 31);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "depth 0 out of range")]
    fn advance_checks_depth_in_debug_builds() {
        advance(3, 1, 0);
    }

    #[test]
    fn rejects_invalid_depth() {
        assert_eq!(SuccessorTable::new(0), Err(ConfigError::ZeroDepth));
        assert!(SuccessorTable::new(cantor_axis::MAX_DEPTH + 1).is_err());
        let table = SuccessorTable::new(2).unwrap();
        assert_eq!(table.get(4), None);
        assert_eq!(table.get(3), Some(0));
    }
}
