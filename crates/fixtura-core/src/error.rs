use thiserror::Error;

/// Core error type shared across Fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The descriptor violates internal invariants.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
    /// A descriptor provider failed to resolve a type.
    #[error("descriptor provider error: {0}")]
    Provider(String),
}

/// Convenience alias for results returned by Fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;
