// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and object contracts used by [`QuadTree`][crate::QuadTree].

use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::types::{Aabb2D, Scalar};

/// A spatial region the tree can partition.
///
/// The tree never inspects coordinates directly; everything it knows about
/// space goes through these three capabilities.
pub trait Region: Sized {
    /// Whether `other` lies entirely within `self`.
    fn contains(&self, other: &Self) -> bool;

    /// Whether `self` and `other` share any area.
    fn overlaps(&self, other: &Self) -> bool;

    /// Partition `self` into exactly four child regions.
    ///
    /// The order is up to the implementation but must be fixed: index `i` of
    /// the result always becomes child `i` of the node being split.
    fn subdivide(&self) -> [Self; 4];
}

/// An object that can be stored in the tree.
///
/// The tree stores the handle itself (a reference, an index, an `Rc`, ...)
/// and asks it for its bounds whenever the object has to be placed.
pub trait Bounded<R> {
    /// The object's bounding region.
    fn bounds(&self) -> R;
}

impl<T: Scalar> Region for Aabb2D<T> {
    #[inline]
    fn contains(&self, other: &Self) -> bool {
        Self::contains(self, other)
    }

    #[inline]
    fn overlaps(&self, other: &Self) -> bool {
        Self::overlaps(self, other)
    }

    #[inline]
    fn subdivide(&self) -> [Self; 4] {
        self.quadrants()
    }
}

impl<T: Copy> Bounded<Self> for Aabb2D<T> {
    #[inline]
    fn bounds(&self) -> Self {
        *self
    }
}

impl<R, O: Bounded<R> + ?Sized> Bounded<R> for &O {
    #[inline]
    fn bounds(&self) -> R {
        (**self).bounds()
    }
}

impl<R, O: Bounded<R> + ?Sized> Bounded<R> for Rc<O> {
    #[inline]
    fn bounds(&self) -> R {
        (**self).bounds()
    }
}

impl<R, O: Bounded<R> + ?Sized> Bounded<R> for Arc<O> {
    #[inline]
    fn bounds(&self) -> R {
        (**self).bounds()
    }
}

#[cfg(feature = "kurbo")]
impl Region for kurbo::Rect {
    fn contains(&self, other: &Self) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    fn subdivide(&self) -> [Self; 4] {
        let c = self.center();
        [
            Self::new(self.x0, self.y0, c.x, c.y),
            Self::new(c.x, self.y0, self.x1, c.y),
            Self::new(self.x0, c.y, c.x, self.y1),
            Self::new(c.x, c.y, self.x1, self.y1),
        ]
    }
}

/// Find the child region that fully contains `bounds`.
///
/// Returns `None` when `bounds` straddles a split line (or lies outside all
/// four children). A degenerate box sitting exactly on a split line may be
/// contained by several children; the lowest index wins.
#[inline]
pub fn classify<R: Region>(bounds: &R, children: &[R; 4]) -> Option<usize> {
    children.iter().position(|child| child.contains(bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_picks_containing_child() {
        let children = Aabb2D::<f64>::new(0.0, 0.0, 100.0, 100.0).subdivide();
        assert_eq!(
            classify(&Aabb2D::new(10.0, 10.0, 11.0, 11.0), &children),
            Some(0)
        );
        assert_eq!(
            classify(&Aabb2D::new(60.0, 10.0, 61.0, 11.0), &children),
            Some(1)
        );
        assert_eq!(
            classify(&Aabb2D::new(10.0, 60.0, 11.0, 61.0), &children),
            Some(2)
        );
        assert_eq!(
            classify(&Aabb2D::new(90.0, 90.0, 91.0, 91.0), &children),
            Some(3)
        );
    }

    #[test]
    fn classify_straddling_is_none() {
        let children = Aabb2D::<f64>::new(0.0, 0.0, 100.0, 100.0).subdivide();
        assert_eq!(
            classify(&Aabb2D::new(45.0, 0.0, 55.0, 100.0), &children),
            None
        );
        assert_eq!(
            classify(&Aabb2D::new(200.0, 200.0, 201.0, 201.0), &children),
            None
        );
    }

    #[test]
    fn classify_degenerate_on_center_takes_first() {
        let children = Aabb2D::<i64>::new(0, 0, 100, 100).subdivide();
        assert_eq!(classify(&Aabb2D::new(50, 50, 50, 50), &children), Some(0));
        assert_eq!(classify(&Aabb2D::new(50, 60, 50, 70), &children), Some(2));
    }

    #[test]
    fn handles_forward_bounds() {
        let b = Aabb2D::<i64>::new(1, 2, 3, 4);
        let r = &b;
        let rc = Rc::new(b);
        let arc = Arc::new(b);
        assert_eq!(Bounded::<Aabb2D<i64>>::bounds(&r), b);
        assert_eq!(Bounded::<Aabb2D<i64>>::bounds(&rc), b);
        assert_eq!(Bounded::<Aabb2D<i64>>::bounds(&arc), b);
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_rect_region() {
        use kurbo::Rect;

        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let children = root.subdivide();
        assert_eq!(children[3], Rect::new(50.0, 50.0, 100.0, 100.0));
        assert!(Region::contains(&root, &children[1]));
        assert!(!Region::overlaps(&children[0], &children[3]));
        assert_eq!(
            classify(&Rect::new(60.0, 60.0, 70.0, 70.0), &children),
            Some(3)
        );
    }
}
