//! # protograph-fill — Schema-Directed Message Construction
//!
//! Fills a typed message from a loosely-typed query response mapping,
//! directed by the descriptors in `protograph-schema`.
//!
//! ## Responsibilities
//!
//! - **Field resolution:** normalize response field names from
//!   lower-camel-case to the schema's lower-snake-case and look them up
//!   on the message descriptor ([`resolver`]).
//!
//! - **Recursive construction:** walk the response mapping, coerce each
//!   value to its field's type tag, recurse into nested messages, append
//!   repeated entries in source order, and finalize an immutable
//!   [`Message`] ([`fill`]).
//!
//! - **Result envelope:** pair the finished message with the ordered
//!   execution-error list reported by the query engine ([`result`]).
//!
//! ## Design
//!
//! The response value is a closed tagged union ([`SourceValue`]) and
//! every coercion pattern-matches it — no runtime type inspection.
//! Builders are moved into the build call and finalized by value, so a
//! builder can never be finalized twice, mutated after finalization, or
//! aliased across concurrent builds. On any coercion failure the whole
//! build call fails and the moved-in builder is discarded; the caller
//! never observes a partially built message.
//!
//! Unknown response fields and null values are silently skipped — they
//! are expected whenever the query selects fields outside the schema, and
//! are never an error.

pub mod error;
pub mod fill;
pub mod message;
pub mod resolver;
pub mod result;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::FillError;
pub use fill::{fill_from_message, fill_message};
pub use message::{FieldValue, Message, MessageBuilder, TypedValue};
pub use resolver::{camel_to_snake, resolve_field};
pub use result::{ExecutionError, ExecutionResult};
pub use value::{FieldMap, Scalar, SourceValue};
