//! # Execution Result Envelope
//!
//! Pairs a finished typed [`Message`] with the ordered execution-error
//! list the query engine reported alongside it. The envelope is a pure
//! pass-through container: construction never inspects the message, and
//! errors here are the *engine's* errors, not build failures (a build
//! failure means no envelope exists at all).

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// One error reported by the query engine during execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionError {
    /// Human-readable description.
    pub message: String,
    /// Path segments locating the failed selection, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

impl ExecutionError {
    /// An error with no path information.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// An error located at a response path.
    pub fn at_path(message: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }
}

/// A typed execution result: the built message plus the engine's errors,
/// in the order the engine reported them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    message: Message,
    errors: Vec<ExecutionError>,
}

impl ExecutionResult {
    /// Wrap a built message and its accompanying error list.
    pub fn new(message: Message, errors: Vec<ExecutionError>) -> Self {
        Self { message, errors }
    }

    /// The typed result message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The engine's errors, in report order. Empty on a clean execution.
    pub fn errors(&self) -> &[ExecutionError] {
        &self.errors
    }

    /// Whether the engine reported no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwrap into the message and error list.
    pub fn into_parts(self) -> (Message, Vec<ExecutionError>) {
        (self.message, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use protograph_schema::{Descriptor, FieldDefinition, FieldType};

    fn empty_message() -> Message {
        let descriptor = Arc::new(
            Descriptor::new(
                "example.Empty",
                vec![FieldDefinition::singular("x", FieldType::Bool)],
            )
            .unwrap(),
        );
        Message::empty(descriptor)
    }

    #[test]
    fn clean_result_has_no_errors() {
        let result = ExecutionResult::new(empty_message(), vec![]);
        assert!(result.is_clean());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn errors_keep_report_order() {
        let errors = vec![
            ExecutionError::new("first"),
            ExecutionError::at_path("second", vec!["user".to_string(), "name".to_string()]),
        ];
        let result = ExecutionResult::new(empty_message(), errors.clone());
        assert!(!result.is_clean());
        assert_eq!(result.errors(), errors.as_slice());
    }

    #[test]
    fn into_parts_returns_both_halves() {
        let result = ExecutionResult::new(empty_message(), vec![ExecutionError::new("boom")]);
        let (message, errors) = result.into_parts();
        assert!(message.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn execution_error_serde_roundtrip() {
        let err = ExecutionError::at_path("bad field", vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&err).unwrap();
        let back: ExecutionError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn pathless_error_omits_path_in_json() {
        let err = ExecutionError::new("bad");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("path"));
    }

    #[test]
    fn result_serializes_message_and_errors() {
        let result = ExecutionResult::new(empty_message(), vec![ExecutionError::new("partial")]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"message":{},"errors":[{"message":"partial"}]}"#);
    }
}
