//! # Message & Enum Descriptors
//!
//! Defines [`Descriptor`], [`FieldDefinition`], [`FieldType`],
//! [`Cardinality`], [`EnumDescriptor`], and [`EnumMember`] — the immutable
//! schema nodes that drive typed message construction.
//!
//! Descriptors are constructed once (rejecting duplicate names) and then
//! only read. Nested message and enum references are held as `Arc`, so a
//! descriptor tree of arbitrary depth is cheap to share and safe for
//! concurrent reads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// Cardinality
// ---------------------------------------------------------------------------

/// Whether a field holds one value or an ordered sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Exactly one value; a later assignment overwrites an earlier one.
    Singular,
    /// An ordered sequence of values; assignments append.
    Repeated,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "singular"),
            Self::Repeated => write!(f, "repeated"),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Closed set of field type tags.
///
/// `Float` is the narrow floating-point type and is handled as a distinct
/// tag (not folded into a generic numeric case) because construction must
/// narrow explicitly rather than default to `Double`.
///
/// Every `match` on `FieldType` in this workspace is exhaustive. Adding a
/// tag here is a compile error until every dispatch site handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// 64-bit floating point.
    Double,
    /// 32-bit floating point. Distinguished narrow numeric type.
    Float,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
    /// Opaque byte payload.
    Bytes,
    /// Enumerated type; carries the enum's descriptor.
    Enum(Arc<EnumDescriptor>),
    /// Nested message type; carries the nested message's descriptor.
    Message(Arc<Descriptor>),
}

impl FieldType {
    /// Short human-readable tag name, used in diagnostics.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(e) => write!(f, "enum {}", e.name()),
            Self::Message(m) => write!(f, "message {}", m.name()),
            other => write!(f, "{}", other.tag_name()),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldDefinition
// ---------------------------------------------------------------------------

/// One field inside a [`Descriptor`]: name, type tag, and cardinality.
///
/// Field names are lower-snake-case by convention; the resolver on the
/// consumer side normalizes incoming lower-camel-case names before lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    name: String,
    field_type: FieldType,
    cardinality: Cardinality,
}

impl FieldDefinition {
    /// Create a field definition.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            cardinality,
        }
    }

    /// Convenience constructor for a singular field.
    pub fn singular(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(name, field_type, Cardinality::Singular)
    }

    /// Convenience constructor for a repeated field.
    pub fn repeated(name: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(name, field_type, Cardinality::Repeated)
    }

    /// The field's name in schema (lower-snake-case) form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's type tag.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// The field's cardinality.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Whether this field holds an ordered sequence of values.
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Schema node for one message type: an ordered set of fields, unique by
/// name. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    name: String,
    fields: Vec<FieldDefinition>,
    index: HashMap<String, usize>,
}

impl Descriptor {
    /// Create a message descriptor from an ordered field list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] when two fields share a name.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut index = HashMap::with_capacity(fields.len());
        for (pos, field) in fields.iter().enumerate() {
            if index.insert(field.name().to_string(), pos).is_some() {
                return Err(SchemaError::DuplicateField {
                    message: name,
                    field: field.name().to_string(),
                });
            }
        }
        Ok(Self { name, fields, index })
    }

    /// The message type's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field by its exact schema name.
    ///
    /// Callers with a lower-camel-case name must normalize it first; this
    /// lookup is an exact match on the stored name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.index.get(name).map(|&pos| &self.fields[pos])
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the descriptor has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// EnumDescriptor
// ---------------------------------------------------------------------------

/// One member of an enum type: its name and numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumMember {
    name: String,
    number: i32,
}

impl EnumMember {
    /// Create an enum member.
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// The member's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member's numeric value.
    pub fn number(&self) -> i32 {
        self.number
    }
}

/// Schema node for one enum type: an ordered set of members, unique by
/// name. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    name: String,
    members: Vec<EnumMember>,
    index: HashMap<String, usize>,
}

impl EnumDescriptor {
    /// Create an enum descriptor from an ordered member list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateMember`] when two members share a name.
    pub fn new(
        name: impl Into<String>,
        members: Vec<EnumMember>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut index = HashMap::with_capacity(members.len());
        for (pos, member) in members.iter().enumerate() {
            if index.insert(member.name().to_string(), pos).is_some() {
                return Err(SchemaError::DuplicateMember {
                    enum_name: name,
                    member: member.name().to_string(),
                });
            }
        }
        Ok(Self {
            name,
            members,
            index,
        })
    }

    /// The enum type's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a member by exact name.
    pub fn value_by_name(&self, name: &str) -> Option<&EnumMember> {
        self.index.get(name).map(|&pos| &self.members[pos])
    }

    /// Iterate members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &EnumMember> {
        self.members.iter()
    }
}

impl fmt::Display for EnumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
