use std::fmt;

use serde::Serialize;

use crate::types::DbId;

/// A single rejected field and the reason shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_every_field() {
        let err = CoreError::Validation(vec![
            FieldError::new("author", "too long"),
            FieldError::new("title", "Title must not be empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: author: too long; title: Title must not be empty"
        );
    }

    #[test]
    fn not_found_display() {
        let err = CoreError::NotFound {
            entity: "Article",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Article with id 7");
    }
}
