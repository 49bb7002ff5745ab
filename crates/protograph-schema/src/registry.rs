//! # Descriptor Registry
//!
//! The schema-provider surface: a read-only map from full type name to
//! message or enum descriptor. Built once at startup, then shared.
//!
//! The registry holds `Arc` references, so handing a descriptor to a
//! consumer is a pointer copy. After construction the registry is never
//! mutated and is safe to share across threads behind an `Arc` of its own.

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::{Descriptor, EnumDescriptor};
use crate::error::SchemaError;

/// Read-only lookup of message and enum descriptors by full type name.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    messages: HashMap<String, Arc<Descriptor>>,
    enums: HashMap<String, Arc<EnumDescriptor>>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a message descriptor under its full name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateType`] if a message or enum with
    /// the same full name is already registered.
    pub fn register_message(&mut self, descriptor: Arc<Descriptor>) -> Result<(), SchemaError> {
        let name = descriptor.name().to_string();
        if self.contains(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.messages.insert(name, descriptor);
        Ok(())
    }

    /// Register an enum descriptor under its full name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateType`] if a message or enum with
    /// the same full name is already registered.
    pub fn register_enum(&mut self, descriptor: Arc<EnumDescriptor>) -> Result<(), SchemaError> {
        let name = descriptor.name().to_string();
        if self.contains(&name) {
            return Err(SchemaError::DuplicateType(name));
        }
        self.enums.insert(name, descriptor);
        Ok(())
    }

    /// Look up a message descriptor by full name.
    pub fn message_by_name(&self, name: &str) -> Option<&Arc<Descriptor>> {
        self.messages.get(name)
    }

    /// Look up an enum descriptor by full name.
    pub fn enum_by_name(&self, name: &str) -> Option<&Arc<EnumDescriptor>> {
        self.enums.get(name)
    }

    /// Look up a message descriptor, erroring on absence.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownType`] when no message descriptor is
    /// registered under `name`.
    pub fn require_message(&self, name: &str) -> Result<&Arc<Descriptor>, SchemaError> {
        self.messages
            .get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    /// Whether any type (message or enum) is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.messages.contains_key(name) || self.enums.contains_key(name)
    }

    /// Iterate registered message type names.
    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterate registered enum type names.
    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }

    /// Total number of registered types.
    pub fn len(&self) -> usize {
        self.messages.len() + self.enums.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EnumMember, FieldDefinition, FieldType};

    fn person() -> Arc<Descriptor> {
        Arc::new(
            Descriptor::new(
                "example.Person",
                vec![FieldDefinition::singular("name", FieldType::String)],
            )
            .unwrap(),
        )
    }

    fn status() -> Arc<EnumDescriptor> {
        Arc::new(
            EnumDescriptor::new("example.Status", vec![EnumMember::new("ACTIVE", 1)]).unwrap(),
        )
    }

    #[test]
    fn register_and_lookup_message() {
        let mut registry = DescriptorRegistry::new();
        registry.register_message(person()).unwrap();
        assert!(registry.message_by_name("example.Person").is_some());
        assert!(registry.message_by_name("example.Missing").is_none());
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn register_and_lookup_enum() {
        let mut registry = DescriptorRegistry::new();
        registry.register_enum(status()).unwrap();
        assert!(registry.enum_by_name("example.Status").is_some());
        assert!(registry.enum_by_name("example.Person").is_none());
    }

    #[test]
    fn duplicate_message_rejected() {
        let mut registry = DescriptorRegistry::new();
        registry.register_message(person()).unwrap();
        let err = registry.register_message(person()).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("example.Person".to_string()));
    }

    #[test]
    fn message_and_enum_share_one_namespace() {
        let mut registry = DescriptorRegistry::new();
        registry.register_message(person()).unwrap();
        let clash = Arc::new(EnumDescriptor::new("example.Person", vec![]).unwrap());
        let err = registry.register_enum(clash).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("example.Person".to_string()));
    }

    #[test]
    fn require_message_errors_on_absence() {
        let registry = DescriptorRegistry::new();
        let err = registry.require_message("example.Missing").unwrap_err();
        assert_eq!(err, SchemaError::UnknownType("example.Missing".to_string()));
    }

    #[test]
    fn name_enumeration() {
        let mut registry = DescriptorRegistry::new();
        registry.register_message(person()).unwrap();
        registry.register_enum(status()).unwrap();
        let mut message_names: Vec<&str> = registry.message_names().collect();
        message_names.sort_unstable();
        assert_eq!(message_names, vec!["example.Person"]);
        let enum_names: Vec<&str> = registry.enum_names().collect();
        assert_eq!(enum_names, vec!["example.Status"]);
    }

    #[test]
    fn registry_lookup_is_a_pointer_copy() {
        let descriptor = person();
        let mut registry = DescriptorRegistry::new();
        registry.register_message(descriptor.clone()).unwrap();
        let looked_up = registry.message_by_name("example.Person").unwrap();
        assert!(Arc::ptr_eq(&descriptor, looked_up));
    }
}
