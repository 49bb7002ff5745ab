//! # Fill Error Types
//!
//! Structured errors for schema-directed message construction. Every
//! variant aborts the build call that raised it; there is no partial
//! recovery inside the builder and no process-level failure mode.
//!
//! Skippable conditions — unknown response fields, null values — are not
//! errors and never appear here.

use thiserror::Error;

/// Errors from one message build call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// A value's shape does not fit the field's type tag (e.g. a string
    /// where a message-typed field expects a mapping).
    #[error("field `{field}`: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// An enum-typed field received a name that matches no member.
    #[error("field `{field}`: `{name}` is not a member of enum `{enum_name}`")]
    UnknownEnumMember {
        field: String,
        enum_name: String,
        name: String,
    },

    /// An integer value does not fit the field's width.
    #[error("field `{field}`: integer {value} out of range for {expected}")]
    IntegerOutOfRange {
        field: String,
        value: i128,
        expected: &'static str,
    },

    /// A float-typed field received a string that does not parse as a
    /// decimal number.
    #[error("field `{field}`: cannot parse `{value}` as float")]
    InvalidFloat { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_display() {
        let err = FillError::TypeMismatch {
            field: "address".to_string(),
            expected: "mapping",
            actual: "string",
        };
        let msg = format!("{err}");
        assert!(msg.contains("address"));
        assert!(msg.contains("expected mapping"));
        assert!(msg.contains("got string"));
    }

    #[test]
    fn unknown_enum_member_display() {
        let err = FillError::UnknownEnumMember {
            field: "status".to_string(),
            enum_name: "example.Status".to_string(),
            name: "DELETED".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("DELETED"));
        assert!(msg.contains("example.Status"));
    }

    #[test]
    fn integer_out_of_range_display() {
        let err = FillError::IntegerOutOfRange {
            field: "age".to_string(),
            value: -1,
            expected: "uint32",
        };
        let msg = format!("{err}");
        assert!(msg.contains("-1"));
        assert!(msg.contains("uint32"));
    }

    #[test]
    fn invalid_float_display() {
        let err = FillError::InvalidFloat {
            field: "score".to_string(),
            value: "not-a-number".to_string(),
        };
        assert!(format!("{err}").contains("not-a-number"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants = vec![
            FillError::TypeMismatch {
                field: "a".to_string(),
                expected: "mapping",
                actual: "null",
            },
            FillError::UnknownEnumMember {
                field: "b".to_string(),
                enum_name: "E".to_string(),
                name: "X".to_string(),
            },
            FillError::IntegerOutOfRange {
                field: "c".to_string(),
                value: 0,
                expected: "int32",
            },
            FillError::InvalidFloat {
                field: "d".to_string(),
                value: "x".to_string(),
            },
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
