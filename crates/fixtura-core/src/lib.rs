//! Core contracts for Fixtura.
//!
//! This crate defines the type descriptor model consumed by the generation
//! engine, the provider seam that supplies root descriptors at runtime, and
//! validation helpers shared across crates.

pub mod descriptor;
pub mod error;
pub mod provider;
pub mod validation;

pub use descriptor::{
    EnumMember, LiteralValue, PrimitiveKind, Property, TupleElement, TypeDescriptor,
};
pub use error::{Error, Result};
pub use provider::DescriptorProvider;
pub use validation::validate_descriptor;

/// Current contract version for serialized descriptor artifacts.
pub const DESCRIPTOR_VERSION: &str = "0.1";
