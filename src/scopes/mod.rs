//! Scope-Restriction Authorization
//!
//! Checks a token's requested scopes against the allowed-scope policy of the
//! client it was issued for.

use tracing::debug;

use crate::error::ScopeError;
use crate::types::OauthClient;

/// Validate requested scopes against a client's restrictions.
///
/// Unscoped requests are rejected. A client with no declared restrictions
/// accepts any scope. Otherwise every scope must satisfy at least one
/// restriction, and all offending scopes are reported together.
pub fn validate_scope_restrictions(
    client: &OauthClient,
    scopes: &[String],
) -> Result<(), ScopeError> {
    if scopes.is_empty() {
        return Err(ScopeError::NoScopesRequested {
            client: client.metadata.name.clone(),
        });
    }

    if client.scope_restrictions.is_empty() {
        return Ok(());
    }

    let denied: Vec<String> = scopes
        .iter()
        .filter(|scope| {
            !client
                .scope_restrictions
                .iter()
                .any(|restriction| restriction.allows(scope))
        })
        .cloned()
        .collect();

    if denied.is_empty() {
        Ok(())
    } else {
        debug!(
            client = %client.metadata.name,
            denied = ?denied,
            "scope restrictions violated"
        );
        Err(ScopeError::RestrictionsViolated {
            client: client.metadata.name.clone(),
            scopes: denied,
        })
    }
}
