use std::collections::BTreeSet;

use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};

/// Validate internal consistency of a descriptor tree.
///
/// This checks:
/// - duplicate property names within one interface/class/object literal
/// - enums declaring no values
/// - unions declaring no member types
pub fn validate_descriptor(descriptor: &TypeDescriptor) -> Result<()> {
    match descriptor {
        TypeDescriptor::Interface { properties }
        | TypeDescriptor::Class { properties }
        | TypeDescriptor::ObjectLiteral {
            members: properties,
        } => {
            let mut seen = BTreeSet::new();
            for property in properties {
                if !seen.insert(property.name.as_str()) {
                    return Err(Error::InvalidDescriptor(format!(
                        "duplicate property name: {}",
                        property.name
                    )));
                }
                validate_descriptor(&property.ty)?;
            }
            Ok(())
        }
        TypeDescriptor::Enum { values } => {
            if values.is_empty() {
                return Err(Error::InvalidDescriptor(
                    "enum declares no values".to_string(),
                ));
            }
            Ok(())
        }
        TypeDescriptor::Union { types } => {
            if types.is_empty() {
                return Err(Error::InvalidDescriptor(
                    "union declares no member types".to_string(),
                ));
            }
            for member in types {
                validate_descriptor(member)?;
            }
            Ok(())
        }
        TypeDescriptor::Intersection { types } => {
            for member in types {
                validate_descriptor(member)?;
            }
            Ok(())
        }
        TypeDescriptor::Tuple { elements } => {
            for element in elements {
                validate_descriptor(&element.ty)?;
            }
            Ok(())
        }
        TypeDescriptor::Array { element_type } => validate_descriptor(element_type),
        TypeDescriptor::Primitive { .. }
        | TypeDescriptor::Null
        | TypeDescriptor::Undefined
        | TypeDescriptor::Literal { .. }
        | TypeDescriptor::Opaque { .. }
        | TypeDescriptor::Unsupported { .. } => Ok(()),
    }
}
