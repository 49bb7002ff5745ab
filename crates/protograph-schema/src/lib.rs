//! # protograph-schema — Descriptor Model
//!
//! Read-only schema descriptors for typed message construction. A
//! [`Descriptor`] describes one message type as an ordered set of
//! [`FieldDefinition`]s; an [`EnumDescriptor`] describes one enum type as
//! an ordered set of named members. The [`DescriptorRegistry`] is the
//! schema-provider surface: lookup of either kind of descriptor by full
//! type name.
//!
//! ## Design
//!
//! Field type tags are a closed enum ([`FieldType`]) and every consumer
//! matches it exhaustively — adding a type tag is a compile error until
//! every dispatch site is updated. There is no "unknown type" runtime
//! fallthrough.
//!
//! Descriptors are immutable after construction and shared via `Arc`.
//! Nothing in this crate mutates after construction, so the whole tree is
//! safe for concurrent reads.

pub mod descriptor;
pub mod error;
pub mod registry;

// Re-export primary types.
pub use descriptor::{
    Cardinality, Descriptor, EnumDescriptor, EnumMember, FieldDefinition, FieldType,
};
pub use error::SchemaError;
pub use registry::DescriptorRegistry;
