use std::collections::HashMap;
use std::fmt;

use fixtura_core::PrimitiveKind;
use rand::RngCore;

use crate::defaults::default_generators;
use crate::errors::GenerationError;
use crate::value::Value;

/// Zero-argument value producer for one primitive kind.
///
/// The random source is injected so sessions can be seeded for reproducible
/// runs.
pub type PrimitiveFn = Box<dyn Fn(&mut dyn RngCore) -> Value + Send + Sync>;

/// Validated, immutable mapping from primitive kind to value producer.
///
/// To customize generation, start from [`default_generators`], override
/// individual entries, and rebuild through [`PrimitiveRegistry::from_generators`]
/// so completeness is validated again.
pub struct PrimitiveRegistry {
    generators: HashMap<PrimitiveKind, PrimitiveFn>,
}

impl PrimitiveRegistry {
    /// Build a registry from an explicit mapping.
    ///
    /// Fails when the mapping does not cover every [`PrimitiveKind`]; the
    /// error lists each missing kind so overrides cannot silently drop
    /// coverage.
    pub fn from_generators(
        generators: HashMap<PrimitiveKind, PrimitiveFn>,
    ) -> Result<Self, GenerationError> {
        let missing: Vec<PrimitiveKind> = PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| !generators.contains_key(kind))
            .collect();
        if !missing.is_empty() {
            return Err(GenerationError::IncompleteRegistry(missing));
        }
        Ok(Self { generators })
    }

    /// Registry carrying the default policy for every kind.
    pub fn with_defaults() -> Self {
        Self {
            generators: default_generators(),
        }
    }

    /// Produce a value for `kind`.
    ///
    /// Presence of `kind` is re-checked on every call, not only at
    /// construction, and reported as [`GenerationError::MissingGenerator`]
    /// when absent.
    pub fn generate(
        &self,
        kind: PrimitiveKind,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let generator = self
            .generators
            .get(&kind)
            .ok_or(GenerationError::MissingGenerator(kind))?;
        Ok(generator(rng))
    }

    /// Kinds handled by this registry, in declaration order.
    pub fn kinds(&self) -> Vec<PrimitiveKind> {
        PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| self.generators.contains_key(kind))
            .collect()
    }
}

impl Default for PrimitiveRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for PrimitiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
