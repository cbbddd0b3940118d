// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Location codes: implicit node addressing for the quadtree.
//!
//! The root has code `1`. Each level appends two bits selecting one of the
//! four children, so the parent of `L` is `L >> 2`, its children are
//! `(L << 2) | 0..=3`, and the depth is the index of the leading sentinel bit
//! divided by two.

use core::fmt::Debug;
use core::hash::Hash;

/// Unsigned integer usable as a node location code.
///
/// Implemented for `u16`, `u32` and `u64`. A wider code allows a deeper tree;
/// see [`LocCode::MAX_DEPTH`].
pub trait LocCode: Copy + Eq + Hash + Debug {
    /// Code of the root node.
    const ROOT: Self;

    /// Deepest level whose codes still fit in this type.
    const MAX_DEPTH: u32;

    /// Code of child `index` (`0..4`).
    ///
    /// # Panics
    ///
    /// Panics if `self` is `0`, which is never a valid node code.
    fn child(self, index: usize) -> Self;

    /// Code of the parent node. The root's parent is `0`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `0`.
    fn parent(self) -> Self;

    /// Depth of the node, with the root at depth `0`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `0`.
    fn depth(self) -> u32;
}

macro_rules! impl_loc_code {
    ($($t:ty),*) => {$(
        impl LocCode for $t {
            const ROOT: Self = 1;
            const MAX_DEPTH: u32 = (Self::BITS - 1) / 2;

            #[allow(
                clippy::cast_possible_truncation,
                reason = "The child index is masked to two bits before the cast."
            )]
            #[inline]
            fn child(self, index: usize) -> Self {
                assert!(self != 0, "location code 0 has no children");
                debug_assert!(index < 4, "child index out of range: {index}");
                debug_assert!(
                    self.leading_zeros() >= 2,
                    "location code {self:#x} has no room for another level"
                );
                (self << 2) | (index & 0b11) as Self
            }

            #[inline]
            fn parent(self) -> Self {
                assert!(self != 0, "location code 0 has no parent");
                self >> 2
            }

            #[inline]
            fn depth(self) -> u32 {
                assert!(self != 0, "location code 0 has no depth");
                self.ilog2() / 2
            }
        }
    )*};
}

impl_loc_code!(u16, u32, u64);
