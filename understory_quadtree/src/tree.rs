// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree: lazy-split insertion and broad-phase queries.

use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::SmallVec;

use crate::code::LocCode;
use crate::config::QuadTreeConfig;
use crate::error::ConfigError;
use crate::region::{Bounded, Region, classify};
use crate::store::{Node, NodeStore};

/// A hashed linear quadtree over a fixed root region.
///
/// Nodes live in a flat hash map keyed by [location code][LocCode]; there are
/// no parent or child pointers. A node is split into four children the first
/// time it holds more than [`QuadTreeConfig::max_objects`] objects, and only
/// one level is split per insertion. Objects that straddle a split line stay
/// in the node where they were classified and are never pushed further down.
///
/// `O` is the stored handle (for example `&Thing`, `Rc<Thing>` or a plain
/// `Copy` value) and must report its bounds through [`Bounded`]. `C` picks the
/// location code width, which bounds the maximum depth.
///
/// ## Example
///
/// ```rust
/// use understory_quadtree::{Aabb2D, QuadTree, QuadTreeConfig};
///
/// let config = QuadTreeConfig::default().with_max_objects(2).with_max_depth(3);
/// let mut tree: QuadTree<Aabb2D<f64>, Aabb2D<f64>> =
///     QuadTree::with_config(Aabb2D::new(0.0, 0.0, 100.0, 100.0), config).unwrap();
///
/// tree.insert(Aabb2D::from_xywh(10.0, 10.0, 1.0, 1.0));
/// tree.insert(Aabb2D::from_xywh(10.0, 20.0, 1.0, 1.0));
/// tree.insert(Aabb2D::from_xywh(90.0, 90.0, 1.0, 1.0));
///
/// let near_origin = tree.query(&Aabb2D::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(near_origin.len(), 2);
/// ```
pub struct QuadTree<O, R, C: LocCode = u32> {
    config: QuadTreeConfig,
    nodes: NodeStore<C, R, O>,
    len: usize,
}

impl<O, R, C: LocCode> Debug for QuadTree<O, R, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<O, R: Region> QuadTree<O, R> {
    /// Create a tree covering `bounds` with the default configuration and
    /// 32-bit location codes.
    ///
    /// Use [`with_config`][Self::with_config] for other code widths.
    pub fn new(bounds: R) -> Self {
        Self {
            config: QuadTreeConfig::default(),
            nodes: NodeStore::new(bounds),
            len: 0,
        }
    }
}

impl<O, R: Region, C: LocCode> QuadTree<O, R, C> {
    /// Create a tree covering `bounds` with explicit size parameters.
    ///
    /// Fails if `config.max_depth` cannot be addressed with codes of type `C`.
    pub fn with_config(bounds: R, config: QuadTreeConfig) -> Result<Self, ConfigError> {
        config.validate::<C>()?;
        Ok(Self {
            config,
            nodes: NodeStore::new(bounds),
            len: 0,
        })
    }

    /// The size parameters this tree was built with.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// The root region.
    pub fn bounds(&self) -> &R {
        self.nodes.root().bounds()
    }

    /// Number of objects inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inspect the node stored under `code`, if it has been created.
    pub fn node(&self, code: C) -> Option<&Node<R, O>> {
        self.nodes.get(code)
    }

    /// Insert an object.
    ///
    /// The object descends through split nodes as long as one child fully
    /// contains it, and is appended to the first node where that fails or
    /// that has not been split yet. If this pushes an unsplit node over
    /// capacity and the node is not deeper than the maximum depth, the node is
    /// split.
    pub fn insert(&mut self, object: O)
    where
        O: Bounded<R>,
    {
        let bounds = object.bounds();
        let mut code = C::ROOT;
        loop {
            let node = self.nodes.expect_mut(code);
            let children = node.bounds().subdivide();
            let quadrant = classify(&bounds, &children);
            if node.has_children()
                && let Some(index) = quadrant
            {
                code = code.child(index);
                continue;
            }

            node.push(object);
            self.len += 1;
            // A split node only receives straddlers, which a second split would keep in place.
            if !node.has_children()
                && node.len() > self.config.max_objects
                && code.depth() <= self.config.max_depth
            {
                self.split(code, children);
            }
            return;
        }
    }

    /// Split the node at `code` and push every object that fits one child down a level.
    fn split(&mut self, code: C, children: [R; 4])
    where
        O: Bounded<R>,
    {
        let objects = self.nodes.expect_mut(code).begin_split();

        let mut retained: SmallVec<[O; 8]> = SmallVec::new();
        let mut moved: [SmallVec<[O; 8]>; 4] = Default::default();
        for object in objects {
            match classify(&object.bounds(), &children) {
                Some(index) => moved[index].push(object),
                None => retained.push(object),
            }
        }

        tracing::trace!(
            ?code,
            depth = code.depth(),
            moved = moved.iter().map(SmallVec::len).sum::<usize>(),
            retained = retained.len(),
            "split quadtree node"
        );

        for (index, (bounds, objects)) in children.into_iter().zip(moved).enumerate() {
            self.nodes
                .create(code.child(index), bounds)
                .set_objects(objects);
        }
        self.nodes.expect_mut(code).set_objects(retained);
    }

    /// Collect every object held by a node whose region overlaps `region`.
    ///
    /// This is a broad phase: objects are not tested individually, so the
    /// result may contain objects whose own bounds miss `region`, but never
    /// omits one that overlaps it. Nodes are visited depth-first, parents
    /// before children, children in index order.
    pub fn query(&self, region: &R) -> Vec<O>
    where
        O: Clone,
    {
        let mut out = Vec::new();
        self.visit_query(region, |o| out.push(o.clone()));
        out
    }

    /// Visit the objects [`query`][Self::query] would return, without allocating.
    pub fn visit_query<F: FnMut(&O)>(&self, region: &R, mut f: F) {
        self.collect_overlapping(C::ROOT, region, &mut f);
    }

    fn collect_overlapping<F: FnMut(&O)>(&self, code: C, region: &R, f: &mut F) {
        let Some(node) = self.nodes.get(code) else {
            return;
        };
        if !node.bounds().overlaps(region) {
            return;
        }
        node.objects().iter().for_each(&mut *f);
        // Children exist exactly when the node has been split.
        if node.has_children() {
            for index in 0..4 {
                self.collect_overlapping(code.child(index), region, f);
            }
        }
    }

    /// Containment-based alternative to [`query`][Self::query].
    ///
    /// Children are searched before their parent. Once a child's region fully
    /// contains `region`, its later siblings are skipped and the parent's own
    /// objects are left out, so straddling objects held by ancestors of the
    /// tightest enclosing node are not reported.
    pub fn query_contained(&self, region: &R) -> Vec<O>
    where
        O: Clone,
    {
        let mut out = Vec::new();
        self.visit_query_contained(region, |o| out.push(o.clone()));
        out
    }

    /// Visit the objects [`query_contained`][Self::query_contained] would return.
    pub fn visit_query_contained<F: FnMut(&O)>(&self, region: &R, mut f: F) {
        self.collect_contained(C::ROOT, region, &mut f);
    }

    /// Returns whether the node's region fully contains `region`.
    fn collect_contained<F: FnMut(&O)>(&self, code: C, region: &R, f: &mut F) -> bool {
        let Some(node) = self.nodes.get(code) else {
            return false;
        };
        if !node.bounds().overlaps(region) {
            return false;
        }
        let mut covered = false;
        if node.has_children() {
            for index in 0..4 {
                if self.collect_contained(code.child(index), region, f) {
                    covered = true;
                    break;
                }
            }
        }
        if !covered {
            node.objects().iter().for_each(&mut *f);
        }
        node.bounds().contains(region)
    }

    /// Walk every node for visualization or debugging.
    ///
    /// For each node, `f(bounds, code, false)` is called once with the node's
    /// region, then `f(bounds, code, true)` once per object it holds, then the
    /// children are walked in index order.
    pub fn visit<F: FnMut(&R, C, bool)>(&self, mut f: F)
    where
        O: Bounded<R>,
    {
        self.walk(C::ROOT, &mut f);
    }

    fn walk<F: FnMut(&R, C, bool)>(&self, code: C, f: &mut F)
    where
        O: Bounded<R>,
    {
        let Some(node) = self.nodes.get(code) else {
            return;
        };
        f(node.bounds(), code, false);
        for object in node.objects() {
            f(&object.bounds(), code, true);
        }
        if node.has_children() {
            for index in 0..4 {
                self.walk(code.child(index), f);
            }
        }
    }
}
