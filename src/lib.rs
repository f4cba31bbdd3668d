//! Authorize-Token Registry
//!
//! Validation and list/watch matching for the OAuth authorize-token resource
//! inside a generic API registry. An authorize token is the intermediate
//! credential tying an OAuth client registration to the scopes a user
//! granted; this crate decides whether a candidate token may be persisted
//! and whether a stored token matches a list/watch filter.
//!
//! # Example
//!
//! ```rust,ignore
//! use authorize_token_registry::{
//!     matcher, AuthorizeToken, AuthorizeTokenStrategy, CreateStrategy,
//!     FieldSelector, InMemoryClientRegistry, LabelSelector, OauthClient,
//!     RequestContext,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let clients = InMemoryClientRegistry::new();
//!     clients.insert(OauthClient::named("web-console").with_literal_scopes(["user:info"]));
//!
//!     let strategy = AuthorizeTokenStrategy::new(clients);
//!     let token = AuthorizeToken::default();
//!     let errors = strategy.validate(&RequestContext::for_user("alice"), &token).await;
//!     println!("validation errors: {errors:?}");
//!
//!     let predicate = matcher(
//!         LabelSelector::everything(),
//!         FieldSelector::parse("clientName=web-console")?,
//!     );
//!     println!("matches: {:?}", predicate.matches(&token));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: the object model (token, client, metadata, request context)
//! - `error`: error hierarchy for the registry's fallible seams
//! - `validation`: field-path-tagged errors and static token checks
//! - `scopes`: scope-restriction authorization against a client's policy
//! - `selectors`: equality-based label and field selector language
//! - `registry`: the strategy contract, client lookup, and the matcher

pub mod error;
pub mod registry;
pub mod scopes;
pub mod selectors;
pub mod types;
pub mod validation;

// Re-export errors
pub use error::{
    ClientLookupError, MatchError, RegistryError, RegistryResult, ScopeError, SelectorParseError,
};

// Re-export types
pub use types::{
    AuthorizeToken, OauthClient, Object, ObjectMeta, RequestContext, ScopeRestriction, UserInfo,
};

// Re-export validation
pub use validation::{
    validate_authorize_token, ErrorList, FieldError, FieldErrorKind, FieldPath,
    CODE_CHALLENGE_METHODS, MIN_TOKEN_NAME_LENGTH,
};

// Re-export scope authorization
pub use scopes::validate_scope_restrictions;

// Re-export selectors
pub use selectors::{FieldSelector, LabelSelector};

// Re-export registry layer
pub use registry::{
    matcher, AuthorizeTokenStrategy, ClientGetter, CreateStrategy, InMemoryClientRegistry,
    MockClientGetter, SelectionPredicate,
};
