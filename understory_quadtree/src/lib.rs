// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a hashed linear quadtree for 2D broad-phase queries.
//!
//! The tree covers a fixed root region and indexes objects by their
//! axis-aligned bounds.
//!
//! - Insert objects; nodes split lazily into four children once they hold more
//!   than a configured number of objects, down to a configured depth.
//! - Query a region and get every object held by a node overlapping it.
//! - Walk all nodes and objects for visualization with [`QuadTree::visit`].
//!
//! Nodes are addressed by integer [location codes][LocCode] and kept in a
//! flat `hashbrown` map: the root is `1`, the children of `L` are
//! `(L << 2) | 0..=3`, and depth falls out of the code's bit length. There are
//! no parent or child pointers.
//!
//! The tree is generic over the region type (anything implementing
//! [`Region`]) and over the stored object handle (anything implementing
//! [`Bounded`]). [`Aabb2D`] is provided for `f32`, `f64` and `i64`
//! coordinates, and `kurbo::Rect` is supported with the `kurbo` feature.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Aabb2D, Bounded, QuadTree};
//!
//! struct Sprite {
//!     name: &'static str,
//!     bounds: Aabb2D<f32>,
//! }
//!
//! impl Bounded<Aabb2D<f32>> for Sprite {
//!     fn bounds(&self) -> Aabb2D<f32> {
//!         self.bounds
//!     }
//! }
//!
//! let sprites = [
//!     Sprite { name: "tree", bounds: Aabb2D::from_xywh(10.0, 10.0, 4.0, 8.0) },
//!     Sprite { name: "rock", bounds: Aabb2D::from_xywh(300.0, 200.0, 6.0, 6.0) },
//! ];
//!
//! // The tree borrows the sprites; it never owns or copies them.
//! let mut tree = QuadTree::new(Aabb2D::new(0.0, 0.0, 512.0, 512.0));
//! for sprite in &sprites {
//!     tree.insert(sprite);
//! }
//!
//! let hits = tree.query(&Aabb2D::new(0.0, 0.0, 64.0, 64.0));
//! assert!(hits.iter().any(|s| s.name == "tree"));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` to `tracing`, `thiserror` and `kurbo`.
//! - `libm`: no_std math for `kurbo`.
//! - `kurbo`: implements [`Region`] for `kurbo::Rect`.
//!
//! ## Behavior notes
//!
//! - Splitting happens one level per insertion. Objects that fit a child move
//!   down when their node splits; objects that straddle a split line stay put
//!   for good.
//! - Queries are conservative. Every object whose node overlaps the query
//!   region is returned, so callers should run their own precise test.
//! - Only insertion mutates the tree; there is no removal or rebalancing.
//! - Corrupted node tables (a split node missing a child) are reported through
//!   `tracing` and abort with a panic.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod code;
mod config;
mod error;
mod region;
mod store;
mod tree;
mod types;

pub use code::LocCode;
pub use config::QuadTreeConfig;
pub use error::ConfigError;
pub use region::{Bounded, Region, classify};
pub use store::Node;
pub use tree::QuadTree;
pub use types::{Aabb2D, Scalar};
