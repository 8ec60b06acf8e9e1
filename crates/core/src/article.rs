//! Article field validation and derived display values.
//!
//! The publish label and short description are recomputed on every call;
//! neither is stored.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldError};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of body characters kept in a short description.
pub const SHORT_DESCRIPTION_LENGTH: usize = 200;

/// Appended to a short description when the body was cut.
pub const ELLIPSIS: &str = "...";

/// `createdAt` display format, e.g. `March 4, 2024, 3:45pm`.
pub const PUBLISH_LABEL_FORMAT: &str = "%B %-d, %Y, %-I:%M%P";

/// Shown next to the title field when it is blank.
pub const TITLE_REQUIRED_MESSAGE: &str = "Title must not be empty";

// ---------------------------------------------------------------------------
// Submitted fields
// ---------------------------------------------------------------------------

/// The user-editable part of an article, as submitted by the create and
/// edit forms. Missing form fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ArticleFields {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
}

impl ArticleFields {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            body: body.into(),
        }
    }

    /// Validate all fields, flattening failures into per-field messages.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(field_errors(&errors)))
    }
}

/// Reject empty and whitespace-only titles.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(TITLE_REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

/// Convert `validator` output into a stable, field-sorted list.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid ({})", e.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Human-readable publish timestamp: `<Month> <D>, <YYYY>, <h>:<mm><am|pm>`.
pub fn publish_label(created_at: &Timestamp) -> String {
    created_at.format(PUBLISH_LABEL_FORMAT).to_string()
}

/// First [`SHORT_DESCRIPTION_LENGTH`] characters of `body`, plus [`ELLIPSIS`]
/// when anything was cut. Counts chars, not bytes or words.
pub fn short_description(body: &str) -> String {
    match body.char_indices().nth(SHORT_DESCRIPTION_LENGTH) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &body[..cut]),
        None => body.to_string(),
    }
}
