//! # Typed Messages & Builders
//!
//! Defines [`TypedValue`] (one typed field payload), [`FieldValue`]
//! (singular or repeated), the immutable finalized [`Message`], and the
//! mutable [`MessageBuilder`] that accumulates one message instance.
//!
//! ## Ownership
//!
//! A builder is exclusively owned by the build call that created it and
//! finalized **by value**: [`MessageBuilder::build`] consumes the builder,
//! so the type system rules out setting a field after finalization or
//! finalizing twice. Nested messages are finalized before being attached
//! to a parent field, so a returned [`Message`] is deeply immutable.

use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use protograph_schema::{Descriptor, EnumMember, FieldDefinition};

// ---------------------------------------------------------------------------
// TypedValue
// ---------------------------------------------------------------------------

/// One typed field payload, matching the schema's type tag widths.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Boolean.
    Bool(bool),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 32-bit float (the schema's distinguished narrow float).
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 string.
    Str(String),
    /// Opaque byte payload.
    Bytes(Vec<u8>),
    /// Resolved enum member (name and number).
    Enum(EnumMember),
    /// Finalized nested message.
    Message(Message),
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::I32(i) => serializer.serialize_i32(*i),
            Self::I64(i) => serializer.serialize_i64(*i),
            Self::U32(u) => serializer.serialize_u32(*u),
            Self::U64(u) => serializer.serialize_u64(*u),
            Self::F32(f) => serializer.serialize_f32(*f),
            Self::F64(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_bytes(b),
            Self::Enum(member) => serializer.serialize_str(member.name()),
            Self::Message(message) => message.serialize(serializer),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A field's stored value: one payload for singular fields, an ordered
/// list for repeated fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Singular field payload; a later set overwrites an earlier one.
    Singular(TypedValue),
    /// Repeated field payloads in append order.
    Repeated(Vec<TypedValue>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Singular(value) => value.serialize(serializer),
            Self::Repeated(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A finalized, immutable typed message.
///
/// Holds its descriptor and the fields that were actually set; fields the
/// response never mentioned are simply absent. Field iteration follows
/// descriptor declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    descriptor: Arc<Descriptor>,
    fields: HashMap<String, FieldValue>,
}

impl Message {
    /// An empty message of the given type, with no fields set.
    pub fn empty(descriptor: Arc<Descriptor>) -> Self {
        Self {
            descriptor,
            fields: HashMap::new(),
        }
    }

    /// The message's descriptor.
    pub fn descriptor(&self) -> &Arc<Descriptor> {
        &self.descriptor
    }

    /// Look up a field's value by its schema (lower-snake-case) name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterate set fields in descriptor declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldDefinition, &FieldValue)> {
        self.descriptor
            .fields()
            .filter_map(move |def| self.fields.get(def.name()).map(|value| (def, value)))
    }

    /// Number of fields that were set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Message {
    /// Serializes as a map of set fields in descriptor order — enum
    /// members as their names, nested messages as nested maps.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (def, value) in self.fields() {
            map.serialize_entry(def.name(), value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// MessageBuilder
// ---------------------------------------------------------------------------

/// Mutable accumulator for one message instance.
///
/// Created fresh per message (top-level or nested) and consumed by
/// [`MessageBuilder::build`]. Field setters take the resolved
/// [`FieldDefinition`], so every stored field has a matching definition
/// by construction.
#[derive(Debug)]
pub struct MessageBuilder {
    descriptor: Arc<Descriptor>,
    fields: HashMap<String, FieldValue>,
}

impl MessageBuilder {
    /// A fresh, empty builder for the given message type.
    pub fn new(descriptor: Arc<Descriptor>) -> Self {
        Self {
            descriptor,
            fields: HashMap::new(),
        }
    }

    /// A builder seeded from an existing message, for merge-into-existing
    /// semantics: fields already present carry over and are overwritten
    /// (singular) or appended to (repeated) as the response dictates.
    pub fn from_message(message: &Message) -> Self {
        Self {
            descriptor: message.descriptor.clone(),
            fields: message.fields.clone(),
        }
    }

    /// The builder's message descriptor.
    pub fn descriptor(&self) -> &Arc<Descriptor> {
        &self.descriptor
    }

    /// Set a singular field's value, overwriting any prior assignment.
    pub fn set_field(&mut self, field: &FieldDefinition, value: TypedValue) {
        self.fields
            .insert(field.name().to_string(), FieldValue::Singular(value));
    }

    /// Materialize a repeated field's slot without appending anything.
    ///
    /// A repeated field that received an empty sequence is present but
    /// empty — distinct from a field the response never mentioned. A
    /// slot already holding a value is left untouched.
    pub fn init_repeated(&mut self, field: &FieldDefinition) {
        self.fields
            .entry(field.name().to_string())
            .or_insert_with(|| FieldValue::Repeated(Vec::new()));
    }

    /// Append one entry to a repeated field, preserving append order.
    ///
    /// If the field currently holds a singular value (possible only when
    /// a seed message disagreed with the descriptor's cardinality), the
    /// value is replaced by a one-element list before appending.
    pub fn append_field(&mut self, field: &FieldDefinition, value: TypedValue) {
        let slot = self
            .fields
            .entry(field.name().to_string())
            .or_insert_with(|| FieldValue::Repeated(Vec::new()));
        if let FieldValue::Singular(prior) = slot {
            *slot = FieldValue::Repeated(vec![prior.clone()]);
        }
        if let FieldValue::Repeated(values) = slot {
            values.push(value);
        }
    }

    /// Finalize into an immutable [`Message`], consuming the builder.
    pub fn build(self) -> Message {
        Message {
            descriptor: self.descriptor,
            fields: self.fields,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
