// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters.

use crate::code::LocCode;
use crate::error::ConfigError;

/// Size parameters fixed when a [`QuadTree`][crate::QuadTree] is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Number of objects a node holds before it is split.
    pub max_objects: usize,
    /// Nodes deeper than this never split. Children of a node at this depth
    /// may still be created, so the tree reaches at most `max_depth + 1`.
    pub max_depth: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects: 8,
            max_depth: 5,
        }
    }
}

impl QuadTreeConfig {
    /// Set the per-node object capacity.
    #[must_use]
    pub const fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    /// Set the maximum split depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The largest `max_depth` that location codes of type `C` can represent.
    pub const fn depth_limit<C: LocCode>() -> u32 {
        C::MAX_DEPTH - 1
    }

    /// Check that the configuration can be represented with codes of type `C`.
    pub fn validate<C: LocCode>(&self) -> Result<(), ConfigError> {
        let limit = Self::depth_limit::<C>();
        if self.max_depth > limit {
            return Err(ConfigError::DepthOverflow {
                max_depth: self.max_depth,
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = QuadTreeConfig::default();
        assert_eq!(config.max_objects, 8);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.validate::<u16>(), Ok(()));
        assert_eq!(config.validate::<u32>(), Ok(()));
    }

    #[test]
    fn depth_limit_follows_code_width() {
        assert_eq!(QuadTreeConfig::depth_limit::<u16>(), 6);
        assert_eq!(QuadTreeConfig::depth_limit::<u32>(), 14);
        assert_eq!(QuadTreeConfig::depth_limit::<u64>(), 30);

        let deep = QuadTreeConfig::default().with_max_depth(15);
        assert_eq!(
            deep.validate::<u32>(),
            Err(ConfigError::DepthOverflow {
                max_depth: 15,
                limit: 14,
            })
        );
        assert_eq!(deep.validate::<u64>(), Ok(()));
    }

    #[test]
    fn builder_sets_fields() {
        let config = QuadTreeConfig::default()
            .with_max_objects(2)
            .with_max_depth(3);
        assert_eq!(
            config,
            QuadTreeConfig {
                max_objects: 2,
                max_depth: 3,
            }
        );
    }
}
