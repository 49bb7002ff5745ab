//! # Source Values
//!
//! The loosely-typed input to message construction: what a query engine
//! hands back for one selection set. [`SourceValue`] is a closed tagged
//! union over null, scalar, ordered sequence, and ordered mapping — every
//! consumer pattern-matches it exhaustively instead of inspecting runtime
//! types.
//!
//! Mappings are ordered: iteration during construction follows the
//! enumeration order the engine produced, which keeps repeated-field
//! accumulation and error attribution deterministic.

use serde_json::Value as JsonValue;

/// An ordered field-name → value mapping, in engine enumeration order.
pub type FieldMap = Vec<(String, SourceValue)>;

/// A scalar leaf of a query response.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar (magnitude above `i64::MAX`).
    Uint(u64),
    /// Floating-point scalar (wide representation on the wire).
    Float(f64),
    /// UTF-8 string scalar.
    Str(String),
    /// Opaque byte payload.
    Bytes(Vec<u8>),
}

/// One dynamically-shaped response value: the closed union the builder
/// dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    /// Explicit null — skipped during construction, never an error.
    Null,
    /// A scalar leaf.
    Scalar(Scalar),
    /// An ordered sequence of values (repeated-field source).
    Sequence(Vec<SourceValue>),
    /// An ordered mapping (nested-message source).
    Mapping(FieldMap),
}

impl SourceValue {
    /// Whether this value is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the mapping entries, if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&FieldMap> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Short shape name for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(Scalar::Bool(_)) => "bool",
            Self::Scalar(Scalar::Int(_)) => "int",
            Self::Scalar(Scalar::Uint(_)) => "uint",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::Str(_)) => "string",
            Self::Scalar(Scalar::Bytes(_)) => "bytes",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<JsonValue> for SourceValue {
    /// Convert an engine's JSON result into the closed union.
    ///
    /// Numbers map to `Int` when they fit `i64`, to `Uint` when they only
    /// fit `u64`, and to `Float` otherwise. Object entries keep the order
    /// of the underlying JSON map.
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Scalar(Scalar::Uint(u))
                } else {
                    // Finite by construction: serde_json numbers are never NaN/inf.
                    Self::Scalar(Scalar::Float(n.as_f64().unwrap_or(0.0)))
                }
            }
            JsonValue::String(s) => Self::Scalar(Scalar::Str(s)),
            JsonValue::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            JsonValue::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for SourceValue {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for SourceValue {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<u64> for SourceValue {
    fn from(u: u64) -> Self {
        Self::Scalar(Scalar::Uint(u))
    }
}

impl From<f64> for SourceValue {
    fn from(f: f64) -> Self {
        Self::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for SourceValue {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for SourceValue {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Str(s))
    }
}
