use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base value categories a primitive leaf can resolve to.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    String,
    Number,
    BigInteger,
    Boolean,
    Date,
    Symbol,
    /// Fallback applied when a leaf cannot be classified further.
    Default,
}

impl PrimitiveKind {
    /// Every kind a primitive generator registry must handle.
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::String,
        PrimitiveKind::Number,
        PrimitiveKind::BigInteger,
        PrimitiveKind::Boolean,
        PrimitiveKind::Date,
        PrimitiveKind::Symbol,
        PrimitiveKind::Default,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "String",
            PrimitiveKind::Number => "Number",
            PrimitiveKind::BigInteger => "BigInteger",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Date => "Date",
            PrimitiveKind::Symbol => "Symbol",
            PrimitiveKind::Default => "Default",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal type's exact value.
///
/// Covers string, integer, and boolean literals; non-integer numeric
/// literals are not modeled so generated values stay totally ordered and
/// hashable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(untagged)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// A named property of an interface, class, or object literal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// A positional element of a tuple.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TupleElement {
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

/// A declared enum member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EnumMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: LiteralValue,
}

/// Tagged description of a type's runtime shape.
///
/// Descriptors form an owned, read-only tree: children of composite kinds
/// are themselves descriptors, and every node has exactly one kind.
/// Providers map whatever reflection mechanism they wrap onto this closed
/// set; forms outside it (function types, mapped types, multi-parameter
/// generics) must be reported as [`TypeDescriptor::Unsupported`] so the
/// engine can fail explicitly instead of guessing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A primitive leaf, resolved through the generator registry.
    Primitive { name: PrimitiveKind },
    Interface { properties: Vec<Property> },
    Class { properties: Vec<Property> },
    ObjectLiteral { members: Vec<Property> },
    Enum { values: Vec<EnumMember> },
    Union { types: Vec<TypeDescriptor> },
    /// Present in the model but deliberately rejected by the engine.
    Intersection { types: Vec<TypeDescriptor> },
    Tuple { elements: Vec<TupleElement> },
    Array { element_type: Box<TypeDescriptor> },
    Null,
    Undefined,
    Literal { value: LiteralValue },
    /// A leaf the provider could not classify further.
    Opaque {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// A kind outside the closed set, carried by name for diagnostics.
    Unsupported { name: String },
}

impl TypeDescriptor {
    /// Serialized tag for this node's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive { .. } => "primitive",
            TypeDescriptor::Interface { .. } => "interface",
            TypeDescriptor::Class { .. } => "class",
            TypeDescriptor::ObjectLiteral { .. } => "object_literal",
            TypeDescriptor::Enum { .. } => "enum",
            TypeDescriptor::Union { .. } => "union",
            TypeDescriptor::Intersection { .. } => "intersection",
            TypeDescriptor::Tuple { .. } => "tuple",
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Null => "null",
            TypeDescriptor::Undefined => "undefined",
            TypeDescriptor::Literal { .. } => "literal",
            TypeDescriptor::Opaque { .. } => "opaque",
            TypeDescriptor::Unsupported { .. } => "unsupported",
        }
    }

    /// Array descriptor over `element`.
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            element_type: Box::new(element),
        }
    }
}
