//! OAuth Client Resource
//!
//! The client registration record a token is validated against.

use serde::{Deserialize, Serialize};

use crate::types::ObjectMeta;

/// An OAuth client registration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OauthClient {
    /// Common object metadata. The name is the client identifier tokens
    /// reference via `client_name`.
    pub metadata: ObjectMeta,
    /// Redirect URIs the client may use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<String>,
    /// Whether the client prefers challenge-based authentication prompts.
    #[serde(default)]
    pub respond_with_challenges: bool,
    /// Restrictions on the scopes tokens for this client may request.
    /// Empty means the client is unrestricted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope_restrictions: Vec<ScopeRestriction>,
}

impl OauthClient {
    /// Create a client with the given name and no restrictions.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::named(name),
            ..Self::default()
        }
    }

    /// Restrict the client to exactly the given scopes, builder-style.
    pub fn with_literal_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_restrictions.push(ScopeRestriction {
            exact_values: scopes.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// A single scope restriction: a requested scope satisfies it when the scope
/// equals one of the listed values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeRestriction {
    /// Literal scope values this restriction permits.
    pub exact_values: Vec<String>,
}

impl ScopeRestriction {
    /// Whether the given scope satisfies this restriction.
    pub fn allows(&self, scope: &str) -> bool {
        self.exact_values.iter().any(|v| v == scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_client_has_no_restrictions() {
        let client = OauthClient::named("cli");
        assert!(client.scope_restrictions.is_empty());
    }

    #[test]
    fn test_literal_scope_restriction() {
        let client = OauthClient::named("web").with_literal_scopes(["user:info", "user:list"]);
        let restriction = &client.scope_restrictions[0];
        assert!(restriction.allows("user:info"));
        assert!(!restriction.allows("user:full"));
    }
}
