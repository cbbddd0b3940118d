// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat node table keyed by location code.

use core::fmt::Debug;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use smallvec::SmallVec;

use crate::code::LocCode;

/// A node of the tree.
///
/// Nodes never move or disappear once created; their identity is the location
/// code they are stored under.
#[derive(Clone, Debug)]
pub struct Node<R, O> {
    bounds: R,
    objects: SmallVec<[O; 8]>,
    has_children: bool,
}

impl<R, O> Node<R, O> {
    fn new(bounds: R) -> Self {
        Self {
            bounds,
            objects: SmallVec::new(),
            has_children: false,
        }
    }

    /// The region this node covers.
    pub fn bounds(&self) -> &R {
        &self.bounds
    }

    /// Objects held directly by this node, in insertion order.
    pub fn objects(&self) -> &[O] {
        &self.objects
    }

    /// Whether this node has been split into four children.
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub(crate) fn push(&mut self, object: O) {
        self.objects.push(object);
    }

    pub(crate) fn len(&self) -> usize {
        self.objects.len()
    }

    /// Mark the node as split and hand its objects to the caller for redistribution.
    pub(crate) fn begin_split(&mut self) -> SmallVec<[O; 8]> {
        self.has_children = true;
        core::mem::take(&mut self.objects)
    }

    pub(crate) fn set_objects(&mut self, objects: SmallVec<[O; 8]>) {
        self.objects = objects;
    }
}

/// Mapping from location code to node.
pub(crate) struct NodeStore<C, R, O> {
    nodes: HashMap<C, Node<R, O>>,
}

impl<C: LocCode, R, O> Debug for NodeStore<C, R, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let split = self.nodes.values().filter(|n| n.has_children).count();
        f.debug_struct("NodeStore")
            .field("nodes", &self.nodes.len())
            .field("split", &split)
            .field("objects", &self.object_count())
            .finish_non_exhaustive()
    }
}

impl<C: LocCode, R, O> NodeStore<C, R, O> {
    /// Create a store holding only the root node.
    pub(crate) fn new(root_bounds: R) -> Self {
        let mut store = Self {
            nodes: HashMap::new(),
        };
        store.create(C::ROOT, root_bounds);
        store
    }

    /// Look up a node. A miss is the normal outcome for unsplit children.
    #[inline]
    pub(crate) fn get(&self, code: C) -> Option<&Node<R, O>> {
        self.nodes.get(&code)
    }

    /// Look up a node that the tree structure says must exist.
    #[track_caller]
    pub(crate) fn expect_mut(&mut self, code: C) -> &mut Node<R, O> {
        match self.nodes.get_mut(&code) {
            Some(node) => node,
            None => invariant_violated("node missing from the table", code),
        }
    }

    /// Insert a fresh, empty node.
    #[track_caller]
    pub(crate) fn create(&mut self, code: C, bounds: R) -> &mut Node<R, O> {
        match self.nodes.entry(code) {
            Entry::Vacant(slot) => slot.insert(Node::new(bounds)),
            Entry::Occupied(_) => invariant_violated("node created twice", code),
        }
    }

    pub(crate) fn root(&self) -> &Node<R, O> {
        self.get(C::ROOT)
            .unwrap_or_else(|| invariant_violated("root node missing", C::ROOT))
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn object_count(&self) -> usize {
        self.nodes.values().map(Node::len).sum()
    }
}

/// Report a corrupted node table and abort the operation.
#[cold]
#[track_caller]
fn invariant_violated<C: Debug>(what: &str, code: C) -> ! {
    tracing::error!(?code, "quadtree invariant violated: {what}");
    panic!("quadtree invariant violated: {what} (code {code:?})");
}
