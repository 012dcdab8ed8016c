use std::borrow::Cow;
use std::collections::BTreeSet;

use fixtura_core::{DescriptorProvider, TypeDescriptor, validate_descriptor};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{DEFAULT_MAX_DEPTH, SessionConfig};
use crate::engine::GenerationEngine;
use crate::errors::GenerationError;
use crate::registry::PrimitiveRegistry;
use crate::value::Value;

/// Fluent entry point for one generation session.
///
/// A `Fixture` is a move-style builder: every `generate*` method consumes
/// it, so no configuration setter is reachable once generation has started.
/// Sessions never share state; concurrent generation only needs separate
/// `Fixture` values over the same (read-only) descriptor.
///
/// ```
/// use fixtura_core::{PrimitiveKind, TypeDescriptor};
/// use fixtura_generate::Fixture;
///
/// let descriptor = TypeDescriptor::Primitive {
///     name: PrimitiveKind::Number,
/// };
/// let value = Fixture::of(&descriptor).with_seed(7).generate()?;
/// assert!(value.as_i64().is_some());
/// # Ok::<(), fixtura_generate::GenerationError>(())
/// ```
#[derive(Debug)]
pub struct Fixture<'a> {
    descriptor: Cow<'a, TypeDescriptor>,
    registry: Option<PrimitiveRegistry>,
    nested_collection_size: Option<usize>,
    root_collection_size: usize,
    max_depth: usize,
    seed: Option<u64>,
}

impl<'a> Fixture<'a> {
    /// Start a session over an explicit descriptor.
    pub fn of(descriptor: &'a TypeDescriptor) -> Self {
        Self::with_descriptor(Cow::Borrowed(descriptor))
    }

    /// Start a session by resolving the root descriptor from `provider`.
    ///
    /// The resolved descriptor is validated before the session is handed
    /// out; a provider returning a malformed tree fails here rather than
    /// midway through generation.
    pub fn from_provider(
        provider: &dyn DescriptorProvider,
    ) -> Result<Fixture<'static>, GenerationError> {
        let descriptor = provider.root_descriptor()?;
        validate_descriptor(&descriptor)?;
        Ok(Fixture::with_descriptor(Cow::Owned(descriptor)))
    }

    fn with_descriptor(descriptor: Cow<'a, TypeDescriptor>) -> Self {
        Self {
            descriptor,
            registry: None,
            nested_collection_size: None,
            root_collection_size: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
        }
    }

    /// Replace the default primitive registry for this session.
    pub fn with_generators(mut self, registry: PrimitiveRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Element count for arrays encountered while recursing.
    ///
    /// Without an explicit size, one value in `[2, 5]` is drawn when the
    /// session starts and reused for every nested array in the tree.
    pub fn with_nested_collection_size(mut self, size: usize) -> Self {
        self.nested_collection_size = Some(size);
        self
    }

    /// Element count for [`generate_array`](Self::generate_array) and
    /// [`generate_set`](Self::generate_set). Defaults to 0.
    pub fn with_root_collection_size(mut self, size: usize) -> Self {
        self.root_collection_size = size;
        self
    }

    /// Recursion ceiling for pathologically deep descriptors.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Seed the session RNG for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a single value.
    pub fn generate(self) -> Result<Value, GenerationError> {
        let (descriptor, config, mut rng) = self.into_session()?;
        GenerationEngine::new(&config).generate(descriptor.as_ref(), &mut rng)
    }

    /// Generate `root_collection_size` independent values in draw order.
    pub fn generate_array(self) -> Result<Vec<Value>, GenerationError> {
        let (descriptor, config, mut rng) = self.into_session()?;
        GenerationEngine::new(&config).generate_array(descriptor.as_ref(), &mut rng)
    }

    /// Generate `root_collection_size` values deduplicated into a set.
    pub fn generate_set(self) -> Result<BTreeSet<Value>, GenerationError> {
        let (descriptor, config, mut rng) = self.into_session()?;
        GenerationEngine::new(&config).generate_set(descriptor.as_ref(), &mut rng)
    }

    fn into_session(
        self,
    ) -> Result<(Cow<'a, TypeDescriptor>, SessionConfig, ChaCha8Rng), GenerationError> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        let registry = self.registry.unwrap_or_default();
        let mut config = SessionConfig::new(registry, &mut rng);
        if let Some(size) = self.nested_collection_size {
            if size == 0 {
                return Err(GenerationError::InvalidConfig(
                    "nested collection size must be positive".to_string(),
                ));
            }
            config.nested_collection_size = size;
        }
        config.root_collection_size = self.root_collection_size;
        config.max_depth = self.max_depth;

        debug!(
            seed = ?self.seed,
            nested = config.nested_collection_size,
            root = config.root_collection_size,
            "session configured"
        );

        Ok((self.descriptor, config, rng))
    }
}
