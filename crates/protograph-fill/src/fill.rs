//! # Schema-Directed Fill
//!
//! The recursive core: [`fill_message`] walks a response mapping under a
//! message descriptor, coerces each value to its field's type tag, and
//! finalizes an immutable [`Message`].
//!
//! ## Control flow
//!
//! Per `(name, value)` entry, in the mapping's enumeration order:
//!
//! 1. null values are skipped outright — no descriptor lookup, no
//!    builder mutation;
//! 2. the name is normalized and resolved against the descriptor; an
//!    unresolved name is skipped with no coercion attempt (coercion
//!    reads field-type metadata, so it is never run without a field);
//! 3. a sequence value appends one coerced entry per element to a
//!    repeated field, preserving source order;
//! 4. any other value is coerced and set as the singular field's sole
//!    value, overwriting a prior assignment.
//!
//! Nested message values recurse with a fresh child builder scoped to the
//! field's nested descriptor. The child is finalized before attachment,
//! so the returned top-level message holds no live builders.
//!
//! ## Failure
//!
//! Coercion failures ([`FillError`]) abort the whole call. The builder
//! was moved in, so it is dropped on the error path — the caller's seed
//! message is untouched and no partially built message is observable.

use protograph_schema::{FieldDefinition, FieldType};

use crate::error::FillError;
use crate::message::{Message, MessageBuilder, TypedValue};
use crate::resolver::resolve_field;
use crate::value::{FieldMap, Scalar, SourceValue};

/// Fill `builder` from a response field mapping and finalize it.
///
/// `None` is the terminal no-op path: the builder is finalized
/// immediately, so a caller can always hand over an absent result.
///
/// # Errors
///
/// Any coercion failure aborts the whole call; see [`FillError`].
pub fn fill_message(
    mut builder: MessageBuilder,
    fields: Option<&FieldMap>,
) -> Result<Message, FillError> {
    let Some(fields) = fields else {
        return Ok(builder.build());
    };

    let descriptor = builder.descriptor().clone();
    for (name, value) in fields {
        if value.is_null() {
            tracing::trace!(field = %name, "null response value, skipping");
            continue;
        }
        let Some(field) = resolve_field(&descriptor, name) else {
            tracing::trace!(
                field = %name,
                message_type = %descriptor.name(),
                "response field has no schema counterpart, skipping"
            );
            continue;
        };

        match (value, field.is_repeated()) {
            (SourceValue::Sequence(items), true) => {
                // An empty sequence still marks the field as present.
                builder.init_repeated(field);
                for item in items {
                    let coerced = coerce(field, item)?;
                    builder.append_field(field, coerced);
                }
            }
            (SourceValue::Sequence(_), false) => {
                return Err(type_mismatch(field, "singular value", value));
            }
            (_, true) => {
                return Err(type_mismatch(field, "sequence", value));
            }
            (_, false) => {
                let coerced = coerce(field, value)?;
                builder.set_field(field, coerced);
            }
        }
    }
    Ok(builder.build())
}

/// Fill starting from an existing message (merge-into-existing
/// semantics): fields already set on `seed` carry over, and the response
/// overwrites or extends them.
///
/// # Errors
///
/// Same failure scope as [`fill_message`] — `seed` itself is never
/// mutated, on success or failure.
pub fn fill_from_message(seed: &Message, fields: Option<&FieldMap>) -> Result<Message, FillError> {
    fill_message(MessageBuilder::from_message(seed), fields)
}

/// Coerce one response value to a field's type tag.
///
/// Dispatch is an exhaustive match on [`FieldType`]; a new type tag will
/// not compile until it is handled here.
fn coerce(field: &FieldDefinition, value: &SourceValue) -> Result<TypedValue, FillError> {
    match field.field_type() {
        FieldType::Message(nested) => match value {
            SourceValue::Mapping(entries) => {
                tracing::debug!(
                    field = %field.name(),
                    message_type = %nested.name(),
                    "descending into nested message"
                );
                let child = MessageBuilder::new(nested.clone());
                Ok(TypedValue::Message(fill_message(child, Some(entries))?))
            }
            other => Err(type_mismatch(field, "mapping", other)),
        },
        FieldType::Enum(descriptor) => match value {
            SourceValue::Scalar(Scalar::Str(name)) => descriptor
                .value_by_name(name)
                .cloned()
                .map(TypedValue::Enum)
                .ok_or_else(|| FillError::UnknownEnumMember {
                    field: field.name().to_string(),
                    enum_name: descriptor.name().to_string(),
                    name: name.clone(),
                }),
            other => Err(type_mismatch(field, "enum member name", other)),
        },
        // Float narrows explicitly — including from a textual
        // representation — so nothing silently widens to double.
        FieldType::Float => coerce_float(field, value),
        FieldType::Double => match value {
            SourceValue::Scalar(Scalar::Float(f)) => Ok(TypedValue::F64(*f)),
            SourceValue::Scalar(Scalar::Int(i)) => Ok(TypedValue::F64(*i as f64)),
            SourceValue::Scalar(Scalar::Uint(u)) => Ok(TypedValue::F64(*u as f64)),
            other => Err(type_mismatch(field, "number", other)),
        },
        FieldType::Int32 => match value {
            SourceValue::Scalar(Scalar::Int(i)) => {
                narrow::<i32>(field, *i as i128).map(TypedValue::I32)
            }
            SourceValue::Scalar(Scalar::Uint(u)) => {
                narrow::<i32>(field, *u as i128).map(TypedValue::I32)
            }
            other => Err(type_mismatch(field, "integer", other)),
        },
        FieldType::Int64 => match value {
            SourceValue::Scalar(Scalar::Int(i)) => Ok(TypedValue::I64(*i)),
            SourceValue::Scalar(Scalar::Uint(u)) => {
                narrow::<i64>(field, *u as i128).map(TypedValue::I64)
            }
            other => Err(type_mismatch(field, "integer", other)),
        },
        FieldType::Uint32 => match value {
            SourceValue::Scalar(Scalar::Int(i)) => {
                narrow::<u32>(field, *i as i128).map(TypedValue::U32)
            }
            SourceValue::Scalar(Scalar::Uint(u)) => {
                narrow::<u32>(field, *u as i128).map(TypedValue::U32)
            }
            other => Err(type_mismatch(field, "integer", other)),
        },
        FieldType::Uint64 => match value {
            SourceValue::Scalar(Scalar::Int(i)) => {
                narrow::<u64>(field, *i as i128).map(TypedValue::U64)
            }
            SourceValue::Scalar(Scalar::Uint(u)) => Ok(TypedValue::U64(*u)),
            other => Err(type_mismatch(field, "integer", other)),
        },
        FieldType::Bool => match value {
            SourceValue::Scalar(Scalar::Bool(b)) => Ok(TypedValue::Bool(*b)),
            other => Err(type_mismatch(field, "bool", other)),
        },
        FieldType::String => match value {
            SourceValue::Scalar(Scalar::Str(s)) => Ok(TypedValue::Str(s.clone())),
            other => Err(type_mismatch(field, "string", other)),
        },
        FieldType::Bytes => match value {
            SourceValue::Scalar(Scalar::Bytes(b)) => Ok(TypedValue::Bytes(b.clone())),
            other => Err(type_mismatch(field, "bytes", other)),
        },
    }
}

/// Narrow a value to `f32` for a float-typed field.
///
/// Numeric scalars narrow directly; string scalars parse as
/// locale-invariant decimal (`str::parse`, which accepts only `.` as the
/// decimal separator).
fn coerce_float(field: &FieldDefinition, value: &SourceValue) -> Result<TypedValue, FillError> {
    match value {
        SourceValue::Scalar(Scalar::Float(f)) => Ok(TypedValue::F32(*f as f32)),
        SourceValue::Scalar(Scalar::Int(i)) => Ok(TypedValue::F32(*i as f32)),
        SourceValue::Scalar(Scalar::Uint(u)) => Ok(TypedValue::F32(*u as f32)),
        SourceValue::Scalar(Scalar::Str(s)) => {
            s.parse::<f32>()
                .map(TypedValue::F32)
                .map_err(|_| FillError::InvalidFloat {
                    field: field.name().to_string(),
                    value: s.clone(),
                })
        }
        other => Err(type_mismatch(field, "number or decimal string", other)),
    }
}

/// Integer targets a response value can narrow into.
///
/// The diagnostic label lives on the same type that supplies the bounds
/// (via `TryFrom<i128>`), so the checked width and the reported width
/// cannot drift apart.
trait IntWidth: TryFrom<i128> {
    const WIDTH: &'static str;
}

impl IntWidth for i32 {
    const WIDTH: &'static str = "int32";
}

impl IntWidth for i64 {
    const WIDTH: &'static str = "int64";
}

impl IntWidth for u32 {
    const WIDTH: &'static str = "uint32";
}

impl IntWidth for u64 {
    const WIDTH: &'static str = "uint64";
}

/// Range-check a value against an integer target's own bounds.
fn narrow<T: IntWidth>(field: &FieldDefinition, value: i128) -> Result<T, FillError> {
    T::try_from(value).map_err(|_| FillError::IntegerOutOfRange {
        field: field.name().to_string(),
        value,
        expected: T::WIDTH,
    })
}

fn type_mismatch(field: &FieldDefinition, expected: &'static str, value: &SourceValue) -> FillError {
    FillError::TypeMismatch {
        field: field.name().to_string(),
        expected,
        actual: value.shape_name(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
