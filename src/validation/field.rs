//! Field-Level Validation Errors
//!
//! Validation failures are plain values tagged with the path of the field
//! they concern, accumulated into an ordered list. The registry persists an
//! object only when the list comes back empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dotted path naming the field an error concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPath(String);

impl FieldPath {
    /// Path rooted at a top-level field.
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Descend into a child field.
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Descend into a list index.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a field error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field was absent or empty.
    Required,
    /// The field value is malformed or out of range.
    Invalid,
    /// The field value is shorter than the allowed minimum.
    TooShort,
    /// A collaborator failed while checking the field; the detail carries
    /// the underlying cause.
    Internal,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Invalid => "invalid",
            Self::TooShort => "too_short",
            Self::Internal => "internal",
        }
    }
}

/// A single validation failure, tagged with the field it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub path: FieldPath,
    pub detail: String,
}

impl FieldError {
    /// A required field was missing.
    pub fn required(path: FieldPath) -> Self {
        Self {
            kind: FieldErrorKind::Required,
            path,
            detail: "field is required".to_string(),
        }
    }

    /// A field held an invalid value.
    pub fn invalid(path: FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Invalid,
            path,
            detail: detail.into(),
        }
    }

    /// A field value was below the minimum length.
    pub fn too_short(path: FieldPath, min: usize) -> Self {
        Self {
            kind: FieldErrorKind::TooShort,
            path,
            detail: format!("must be at least {} characters long", min),
        }
    }

    /// A collaborator failed while validating the field.
    pub fn internal(path: FieldPath, err: impl fmt::Display) -> Self {
        Self {
            kind: FieldErrorKind::Internal,
            path,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.detail, self.kind.as_str())
    }
}

/// Ordered list of field errors; empty means the object is valid.
pub type ErrorList = Vec<FieldError>;
