// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when building a tree.

use thiserror::Error;

/// A [`QuadTreeConfig`][crate::QuadTreeConfig] that cannot be honored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Splitting down to `max_depth` would create nodes whose location codes
    /// do not fit in the chosen code type.
    #[error("max depth {max_depth} exceeds the limit of {limit} for this location code width")]
    DepthOverflow {
        /// The requested maximum split depth.
        max_depth: u32,
        /// The largest maximum split depth the code type supports.
        limit: u32,
    },
}
