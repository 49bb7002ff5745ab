//! # Schema Error Types
//!
//! Structured errors for descriptor construction and registry lookup.
//! Uses `thiserror` for ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from descriptor construction and registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields with the same name inside one message descriptor.
    #[error("duplicate field `{field}` in message `{message}`")]
    DuplicateField { message: String, field: String },

    /// Two members with the same name inside one enum descriptor.
    #[error("duplicate member `{member}` in enum `{enum_name}`")]
    DuplicateMember { enum_name: String, member: String },

    /// A type with this full name is already registered.
    #[error("type `{0}` is already registered")]
    DuplicateType(String),

    /// No type with this full name is registered.
    #[error("unknown type `{0}`")]
    UnknownType(String),
}
