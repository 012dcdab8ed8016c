//! Recursive fixture generation engine for Fixtura.
//!
//! This crate consumes descriptor trees from `fixtura-core` and produces
//! synthetic values mirroring their shape, delegating primitive leaves to a
//! validated generator registry driven by an injected random source.

pub mod config;
pub mod defaults;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod session;
pub mod value;

pub use config::SessionConfig;
pub use defaults::default_generators;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use registry::{PrimitiveFn, PrimitiveRegistry};
pub use session::Fixture;
pub use value::Value;
