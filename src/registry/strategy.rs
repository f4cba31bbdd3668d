//! Registry Strategy
//!
//! The contract the generic registry invokes around object persistence, and
//! its implementation for authorize tokens.

use async_trait::async_trait;
use tracing::debug;

use crate::registry::ClientGetter;
use crate::scopes::validate_scope_restrictions;
use crate::types::{AuthorizeToken, Object, RequestContext};
use crate::validation::{validate_authorize_token, ErrorList, FieldError, FieldPath};

/// Per-resource behavior the generic registry consults when creating and
/// updating objects of one kind.
#[async_trait]
pub trait CreateStrategy: Send + Sync {
    /// The resource kind this strategy governs.
    type Object: Object;

    /// Whether objects of this kind live inside a namespace.
    fn namespace_scoped(&self) -> bool;

    /// Whether an update may create the object when it does not exist.
    fn allow_create_on_update(&self) -> bool;

    /// Whether updates may skip resource-version preconditions.
    fn allow_unconditional_update(&self) -> bool;

    /// Produce a name from a requested base name.
    fn generate_name(&self, base: &str) -> String;

    /// Mutate an incoming object before create validation.
    fn prepare_for_create(&self, obj: &mut Self::Object);

    /// Mutate an incoming object before update validation.
    fn prepare_for_update(&self, obj: &mut Self::Object, old: &Self::Object);

    /// Normalize the object after validation, before persistence.
    fn canonicalize(&self, obj: &mut Self::Object);

    /// Validate a new object. The returned list is empty when the object may
    /// be persisted; failures are accumulated, never raised.
    async fn validate(&self, ctx: &RequestContext, obj: &Self::Object) -> ErrorList;
}

/// Strategy for authorize tokens.
///
/// Tokens are cluster-scoped, immutable once written, and validated against
/// the client registration they reference.
pub struct AuthorizeTokenStrategy<G: ClientGetter> {
    client_getter: G,
}

impl<G: ClientGetter> AuthorizeTokenStrategy<G> {
    /// Create a strategy resolving clients through the given getter.
    pub fn new(client_getter: G) -> Self {
        Self { client_getter }
    }
}

#[async_trait]
impl<G: ClientGetter> CreateStrategy for AuthorizeTokenStrategy<G> {
    type Object = AuthorizeToken;

    // OAuth objects are cluster-scoped.
    fn namespace_scoped(&self) -> bool {
        false
    }

    fn allow_create_on_update(&self) -> bool {
        false
    }

    fn allow_unconditional_update(&self) -> bool {
        false
    }

    fn generate_name(&self, base: &str) -> String {
        base.to_string()
    }

    fn prepare_for_create(&self, _obj: &mut AuthorizeToken) {}

    fn prepare_for_update(&self, _obj: &mut AuthorizeToken, _old: &AuthorizeToken) {}

    fn canonicalize(&self, _obj: &mut AuthorizeToken) {}

    /// Static checks first, then client resolution, then the scope
    /// restriction check. Relational failures land under `clientName` and
    /// never discard the static errors already collected.
    async fn validate(&self, ctx: &RequestContext, token: &AuthorizeToken) -> ErrorList {
        let mut errors = validate_authorize_token(token);

        let client = match self.client_getter.get_client(ctx, &token.client_name).await {
            Ok(client) => client,
            Err(err) => {
                debug!(client = %token.client_name, error = %err, "client resolution failed");
                errors.push(FieldError::internal(FieldPath::new("clientName"), err));
                return errors;
            }
        };

        if let Err(err) = validate_scope_restrictions(&client, &token.scopes) {
            errors.push(FieldError::internal(FieldPath::new("clientName"), err));
        }

        errors
    }
}
