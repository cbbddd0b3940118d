// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::fmt::Debug;

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether `other` lies entirely within this AABB.
    ///
    /// Edges are inclusive: a box always contains itself.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Determines whether this AABB shares any area with another.
    ///
    /// Unlike [`contains`][Self::contains], edges are exclusive here: two AABBs
    /// that only touch along an edge or at a corner do not overlap. This keeps
    /// sibling quadrants from bleeding into each other's queries.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_quadtree::Aabb2D;
    ///
    /// let aabb1 = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
    /// let aabb2 = Aabb2D::new(5.0, 5.0, 15.0, 15.0);
    /// assert!(aabb1.overlaps(&aabb2));
    ///
    /// let aabb1 = Aabb2D::new(0.0, 0.0, 10.0, 10.0);
    /// let aabb2 = Aabb2D::new(10.0, 0.0, 20.0, 10.0);
    /// assert!(!aabb1.overlaps(&aabb2));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Create an AABB from origin and size.
    #[inline]
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: T::add(x, w),
            max_y: T::add(y, h),
        }
    }

    /// The center of the AABB.
    #[inline]
    pub fn center(&self) -> (T, T) {
        (
            T::mid(self.min_x, self.max_x),
            T::mid(self.min_y, self.max_y),
        )
    }

    /// Split the AABB at its center into four quadrants.
    ///
    /// The order is `[min/min, max_x/min_y, min_x/max_y, max/max]`, i.e.
    /// top-left, top-right, bottom-left, bottom-right with y pointing down.
    #[inline]
    pub fn quadrants(&self) -> [Self; 4] {
        let (cx, cy) = self.center();
        [
            Self::new(self.min_x, self.min_y, cx, cy),
            Self::new(cx, self.min_y, self.max_x, cy),
            Self::new(self.min_x, cy, cx, self.max_y),
            Self::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}

/// Numeric scalar abstraction for 2D AABBs.
///
/// Only what subdivision needs: the midpoint of two coordinates, plus addition
/// to build boxes from origin and size.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Midpoint between a and b (used as the split line).
    fn mid(a: Self, b: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }
}
