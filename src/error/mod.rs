//! Registry Error Types
//!
//! Error hierarchy for the seams the registry strategy depends on. Field
//! validation failures are not represented here; those are value-level
//! [`FieldError`](crate::validation::FieldError) entries collected into a
//! list, never raised as errors.

use thiserror::Error;

/// Root error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Client lookup error: {0}")]
    ClientLookup(#[from] ClientLookupError),

    #[error("Scope error: {0}")]
    Scope(#[from] ScopeError),

    #[error("Selector error: {0}")]
    Selector(#[from] SelectorParseError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),
}

impl RegistryError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ClientLookup(_) => "REGISTRY_CLIENT",
            Self::Scope(_) => "REGISTRY_SCOPE",
            Self::Selector(_) => "REGISTRY_SELECTOR",
            Self::Match(_) => "REGISTRY_MATCH",
        }
    }
}

/// Failure to resolve a token's client registration.
#[derive(Error, Debug)]
pub enum ClientLookupError {
    #[error("Client {name:?} not found")]
    NotFound { name: String },

    #[error("Client lookup failed: {message}")]
    Internal { message: String },
}

/// Scope authorization failure.
#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("Client {client:?} may not request unscoped tokens")]
    NoScopesRequested { client: String },

    #[error("Scopes {scopes:?} not permitted for client {client:?}")]
    RestrictionsViolated { client: String, scopes: Vec<String> },
}

/// Selector string could not be parsed.
#[derive(Error, Debug)]
pub enum SelectorParseError {
    #[error("Empty requirement in selector {selector:?}")]
    EmptyRequirement { selector: String },

    #[error("Requirement {requirement:?} has an empty key")]
    EmptyKey { requirement: String },

    #[error("Operator not supported in requirement {requirement:?}")]
    UnsupportedOperator { requirement: String },
}

/// The matcher was handed an object it does not understand.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Not an authorize token: got kind {kind:?}")]
    NotAToken { kind: String },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
