// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a small quadtree, query it, and dump its structure with `visit`.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_visit`
//! - `RUST_LOG=understory_quadtree=trace cargo run -p understory_examples --example quadtree_visit`
//!   to also see every split.

use tracing_subscriber::EnvFilter;
use understory_quadtree::{Aabb2D, Bounded, LocCode, QuadTree, QuadTreeConfig};

/// A game entity owned by the caller; the tree only borrows it.
#[derive(Debug)]
struct Entity {
    name: String,
    bounds: Aabb2D<f32>,
}

impl Bounded<Aabb2D<f32>> for Entity {
    fn bounds(&self) -> Aabb2D<f32> {
        self.bounds
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut entities = Vec::new();
    for i in 0..12_u8 {
        let x = f32::from(i % 4) * 24.0 + 4.0;
        let y = f32::from(i / 4) * 24.0 + 4.0;
        entities.push(Entity {
            name: format!("crate-{i}"),
            bounds: Aabb2D::from_xywh(x, y, 6.0, 6.0),
        });
    }
    // Crosses both split lines of the root, so it stays at the root forever.
    entities.push(Entity {
        name: "bridge".to_string(),
        bounds: Aabb2D::new(40.0, 10.0, 70.0, 90.0),
    });

    let config = QuadTreeConfig::default().with_max_objects(2).with_max_depth(3);
    let root = Aabb2D::new(0.0, 0.0, 128.0, 128.0);
    let mut tree: QuadTree<&Entity, Aabb2D<f32>> =
        QuadTree::with_config(root, config).expect("depth 3 fits 32-bit location codes");
    for entity in &entities {
        tree.insert(entity);
    }
    println!("{tree:?}");

    // Broad phase, then the precise test the tree leaves to the caller.
    let view = Aabb2D::new(0.0, 0.0, 30.0, 30.0);
    let candidates = tree.query(&view);
    let visible: Vec<&str> = candidates
        .iter()
        .filter(|e| e.bounds.overlaps(&view))
        .map(|e| e.name.as_str())
        .collect();
    println!(
        "view {view:?}: {} candidates, visible {visible:?}",
        candidates.len()
    );

    tree.visit(|bounds, code, is_object| {
        let indent = "  ".repeat(code.depth() as usize);
        let kind = if is_object { "object" } else { "node" };
        println!(
            "{indent}{kind} {code:#b} [{}, {}]-[{}, {}]",
            bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
        );
    });
}
