//! # Field Resolution
//!
//! Query responses name fields in lower-camel-case; schema descriptors
//! store them in lower-snake-case. [`camel_to_snake`] applies the fixed
//! naming transformation and [`resolve_field`] looks the transformed name
//! up on a descriptor.
//!
//! Resolution failure is not an error: a response field with no schema
//! counterpart simply contributes nothing to the built message.

use protograph_schema::{Descriptor, FieldDefinition};

/// Transform a lower-camel-case name to lower-snake-case.
///
/// Per-character rule: an uppercase ASCII letter that is not the first
/// character gets an underscore inserted before it, and every uppercase
/// letter is lowercased. Total and deterministic — any input produces a
/// defined output.
///
/// ```
/// use protograph_fill::camel_to_snake;
///
/// assert_eq!(camel_to_snake("id"), "id");
/// assert_eq!(camel_to_snake("userId"), "user_id");
/// assert_eq!(camel_to_snake("HTMLName"), "h_t_m_l_name");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolve a response field name against a message descriptor.
///
/// Returns `None` when the schema has no such field — callers treat this
/// as "skip contribution", never as a failure.
pub fn resolve_field<'a>(descriptor: &'a Descriptor, name: &str) -> Option<&'a FieldDefinition> {
    descriptor.field_by_name(&camel_to_snake(name))
}
