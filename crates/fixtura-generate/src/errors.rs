use thiserror::Error;

use fixtura_core::PrimitiveKind;

/// Errors emitted by the generation engine and its registry.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The registry mapping does not cover every primitive kind.
    #[error("primitive registry does not handle kinds: {0:?}")]
    IncompleteRegistry(Vec<PrimitiveKind>),
    /// A kind has no registered generator at call time.
    #[error("no generator registered for primitive kind {0}")]
    MissingGenerator(PrimitiveKind),
    /// The descriptor kind has no defined handling.
    #[error("unsupported descriptor kind: {0}")]
    UnsupportedKind(String),
    /// The descriptor kind is recognized but deliberately unimplemented.
    #[error("descriptor kind {0} is not implemented")]
    NotImplemented(&'static str),
    /// The descriptor violates an invariant the engine relies on.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
    /// The session configuration is unusable.
    #[error("invalid session configuration: {0}")]
    InvalidConfig(String),
    /// Recursion ran deeper than the configured limit.
    #[error("descriptor recursion exceeded depth limit {limit}")]
    DepthExceeded { limit: usize },
    /// Provider or validation failure from the core crate.
    #[error(transparent)]
    Descriptor(#[from] fixtura_core::Error),
}
