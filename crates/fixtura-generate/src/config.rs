use rand::{Rng, RngCore};

use crate::registry::PrimitiveRegistry;

const NESTED_SIZE_MIN: usize = 2;
const NESTED_SIZE_MAX: usize = 5;

/// Default recursion ceiling for one generation call tree.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Fixed parameters for one generation call tree.
///
/// A configuration is built once per session and only ever borrowed by the
/// engine afterwards; sizes are never re-rolled while a tree is being
/// generated, so every nested array in the same tree has the same length.
#[derive(Debug)]
pub struct SessionConfig {
    /// Element count for every array encountered while recursing. Must be
    /// positive.
    pub nested_collection_size: usize,
    /// Element count for the array/set entry points.
    pub root_collection_size: usize,
    /// Recursion ceiling; generation fails when a tree runs deeper.
    pub max_depth: usize,
    /// Primitive generators backing every leaf.
    pub registry: PrimitiveRegistry,
}

impl SessionConfig {
    /// Configuration over `registry` with a nested collection size drawn
    /// once from `rng` in `[2, 5]`.
    pub fn new(registry: PrimitiveRegistry, rng: &mut dyn RngCore) -> Self {
        Self {
            nested_collection_size: rng.random_range(NESTED_SIZE_MIN..=NESTED_SIZE_MAX),
            root_collection_size: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            registry,
        }
    }
}
