use std::collections::{BTreeMap, BTreeSet};

use fixtura_core::{PrimitiveKind, Property, TypeDescriptor};
use rand::{Rng, RngCore};
use tracing::warn;

use crate::config::SessionConfig;
use crate::errors::GenerationError;
use crate::value::Value;

/// Recursive interpreter turning descriptors into values.
///
/// The engine borrows its configuration for the lifetime of one call tree.
/// A failing child descriptor aborts the entire call; no partial value is
/// ever returned.
#[derive(Debug)]
pub struct GenerationEngine<'a> {
    config: &'a SessionConfig,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Generate a single value mirroring `descriptor`.
    pub fn generate(
        &self,
        descriptor: &TypeDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        self.check_config()?;
        self.generate_node(descriptor, 0, rng)
    }

    /// Generate `root_collection_size` independent values in draw order.
    pub fn generate_array(
        &self,
        descriptor: &TypeDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Value>, GenerationError> {
        self.check_config()?;
        let mut values = Vec::with_capacity(self.config.root_collection_size);
        for _ in 0..self.config.root_collection_size {
            values.push(self.generate_node(descriptor, 0, rng)?);
        }
        Ok(values)
    }

    /// Same draws as [`generate_array`](Self::generate_array), collected
    /// into a set.
    ///
    /// The result may hold fewer than `root_collection_size` entries when
    /// draws collide; duplicates are expected for low-cardinality
    /// descriptors.
    pub fn generate_set(
        &self,
        descriptor: &TypeDescriptor,
        rng: &mut dyn RngCore,
    ) -> Result<BTreeSet<Value>, GenerationError> {
        self.check_config()?;
        let mut values = BTreeSet::new();
        for _ in 0..self.config.root_collection_size {
            values.insert(self.generate_node(descriptor, 0, rng)?);
        }
        Ok(values)
    }

    fn check_config(&self) -> Result<(), GenerationError> {
        if self.config.nested_collection_size == 0 {
            return Err(GenerationError::InvalidConfig(
                "nested collection size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn generate_node(
        &self,
        descriptor: &TypeDescriptor,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        if depth > self.config.max_depth {
            return Err(GenerationError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        match descriptor {
            TypeDescriptor::Primitive { name } => self.config.registry.generate(*name, rng),
            TypeDescriptor::Interface { properties }
            | TypeDescriptor::Class { properties }
            | TypeDescriptor::ObjectLiteral {
                members: properties,
            } => self.generate_record(properties, depth, rng),
            TypeDescriptor::Enum { values } => {
                if values.is_empty() {
                    return Err(GenerationError::InvalidDescriptor(
                        "enum declares no values".to_string(),
                    ));
                }
                let member = &values[rng.random_range(0..values.len())];
                Ok(Value::from_literal(&member.value))
            }
            TypeDescriptor::Union { types } => {
                if types.is_empty() {
                    return Err(GenerationError::InvalidDescriptor(
                        "union declares no member types".to_string(),
                    ));
                }
                // The result takes the shape of the chosen branch only,
                // never a merge of members.
                let branch = &types[rng.random_range(0..types.len())];
                self.generate_node(branch, depth + 1, rng)
            }
            TypeDescriptor::Intersection { .. } => {
                Err(GenerationError::NotImplemented("intersection"))
            }
            TypeDescriptor::Tuple { elements } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.generate_node(&element.ty, depth + 1, rng)?);
                }
                Ok(Value::Array(items))
            }
            TypeDescriptor::Array { element_type } => {
                let mut items = Vec::with_capacity(self.config.nested_collection_size);
                for _ in 0..self.config.nested_collection_size {
                    items.push(self.generate_node(element_type, depth + 1, rng)?);
                }
                Ok(Value::Array(items))
            }
            TypeDescriptor::Null => Ok(Value::Null),
            TypeDescriptor::Undefined => Ok(Value::Undefined),
            TypeDescriptor::Literal { value } => Ok(Value::from_literal(value)),
            TypeDescriptor::Opaque { name } => {
                warn!(
                    leaf = name.as_deref().unwrap_or("<unnamed>"),
                    "unclassifiable leaf, falling back to default generation"
                );
                self.config.registry.generate(PrimitiveKind::Default, rng)
            }
            TypeDescriptor::Unsupported { name } => {
                Err(GenerationError::UnsupportedKind(name.clone()))
            }
        }
    }

    fn generate_record(
        &self,
        properties: &[Property],
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let mut fields = BTreeMap::new();
        for property in properties {
            let value = self.generate_node(&property.ty, depth + 1, rng)?;
            fields.insert(property.name.clone(), value);
        }
        Ok(Value::Record(fields))
    }
}
