// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad + narrow phase over kurbo shapes.
//!
//! This example shows how to combine:
//! - `understory_quadtree` over `kurbo::Rect` for broad-phase culling,
//! - kurbo geometry for the precise test on each candidate.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_kurbo`

use std::rc::Rc;

use kurbo::{Circle, Point, Rect, Shape};
use understory_quadtree::{Bounded, QuadTree};

/// Scene shapes, shared with the rest of the app through `Rc`.
#[derive(Debug)]
enum Item {
    Rect(Rect),
    Circle(Circle),
}

impl Bounded<Rect> for Item {
    fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Circle(c) => c.bounding_box(),
        }
    }
}

impl Item {
    fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Rect(r) => r.contains(pt),
            Self::Circle(c) => c.contains(pt),
        }
    }
}

fn main() {
    let scene: Vec<Rc<Item>> = vec![
        Rc::new(Item::Rect(Rect::new(20.0, 40.0, 120.0, 140.0))),
        Rc::new(Item::Circle(Circle::new((300.0, 300.0), 40.0))),
        Rc::new(Item::Circle(Circle::new((90.0, 90.0), 30.0))),
        Rc::new(Item::Rect(Rect::new(480.0, 10.0, 500.0, 30.0))),
    ];

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 512.0, 512.0));
    for item in &scene {
        tree.insert(Rc::clone(item));
    }

    for pt in [Point::new(100.0, 100.0), Point::new(70.0, 130.0), Point::new(330.0, 270.0)] {
        // A tiny probe region around the point.
        let probe = Rect::from_center_size(pt, (0.5, 0.5));
        let candidates = tree.query(&probe);
        let hits: Vec<_> = candidates.iter().filter(|item| item.contains(pt)).collect();
        println!(
            "{pt:?}: {} candidates, {} precise hits: {hits:?}",
            candidates.len(),
            hits.len()
        );
    }
}
