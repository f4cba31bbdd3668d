//! Authorize-Token Resource
//!
//! The OAuth authorize token: the intermediate credential tying a client
//! registration to the scopes granted by a user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::ObjectMeta;

/// An OAuth authorize token.
///
/// The object name carries the opaque authorization code; the remaining
/// fields record who requested it and what was granted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeToken {
    /// Common object metadata.
    pub metadata: ObjectMeta,
    /// Name of the client registration the token was issued for.
    pub client_name: String,
    /// Requested scopes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Lifetime in seconds from creation.
    pub expires_in: i64,
    /// Redirect URI associated with the grant.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub redirect_uri: String,
    /// Opaque state round-tripped from the authorization request.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    /// Name of the user who approved the grant.
    pub user_name: String,
    /// UID of the user who approved the grant.
    pub user_uid: String,
    /// PKCE code challenge, when the client used PKCE.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code_challenge: String,
    /// PKCE challenge method (`plain` or `S256`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code_challenge_method: String,
}

impl AuthorizeToken {
    /// Project the fields a field selector may match against.
    pub fn selectable_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("metadata.name".to_string(), self.metadata.name.clone()),
            ("clientName".to_string(), self.client_name.clone()),
            ("userName".to_string(), self.user_name.clone()),
            ("userUID".to_string(), self.user_uid.clone()),
        ])
    }
}
