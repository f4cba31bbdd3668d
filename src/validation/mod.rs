//! Validation
//!
//! Field-path-tagged error values and the static authorize-token checks.

pub mod field;
pub mod token;

pub use field::{ErrorList, FieldError, FieldErrorKind, FieldPath};
pub use token::{validate_authorize_token, CODE_CHALLENGE_METHODS, MIN_TOKEN_NAME_LENGTH};
