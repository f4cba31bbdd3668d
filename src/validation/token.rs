//! Authorize-Token Static Validation
//!
//! Structural checks that need nothing beyond the token itself. Relational
//! checks (client resolution, scope restrictions) live in the strategy.

use crate::types::AuthorizeToken;
use crate::validation::{ErrorList, FieldError, FieldPath};

/// Token names double as authorization codes, so short names are rejected
/// outright rather than left to chance.
pub const MIN_TOKEN_NAME_LENGTH: usize = 32;

/// PKCE challenge methods a token may carry.
pub const CODE_CHALLENGE_METHODS: &[&str] = &["plain", "S256"];

/// Validate a new authorize token. Returns every failure found, in field
/// order; an empty list means the token is structurally valid.
pub fn validate_authorize_token(token: &AuthorizeToken) -> ErrorList {
    let mut errors = ErrorList::new();

    let name_path = FieldPath::new("metadata").child("name");
    if token.metadata.name.is_empty() {
        errors.push(FieldError::required(name_path));
    } else if token.metadata.name.len() < MIN_TOKEN_NAME_LENGTH {
        errors.push(FieldError::too_short(name_path, MIN_TOKEN_NAME_LENGTH));
    }

    if token.client_name.is_empty() {
        errors.push(FieldError::required(FieldPath::new("clientName")));
    }
    if token.user_name.is_empty() {
        errors.push(FieldError::required(FieldPath::new("userName")));
    }
    if token.user_uid.is_empty() {
        errors.push(FieldError::required(FieldPath::new("userUID")));
    }

    if token.expires_in <= 0 {
        errors.push(FieldError::invalid(
            FieldPath::new("expiresIn"),
            "must be greater than zero",
        ));
    }

    let scopes_path = FieldPath::new("scopes");
    for (i, scope) in token.scopes.iter().enumerate() {
        if scope.is_empty() {
            errors.push(FieldError::invalid(
                scopes_path.index(i),
                "scope may not be empty",
            ));
        } else if !scope.chars().all(is_valid_scope_char) {
            errors.push(FieldError::invalid(
                scopes_path.index(i),
                format!("scope {:?} contains invalid characters", scope),
            ));
        }
    }

    errors.extend(validate_code_challenge(token));

    errors
}

/// PKCE fields must be set together, and the method must be a supported one.
fn validate_code_challenge(token: &AuthorizeToken) -> ErrorList {
    let mut errors = ErrorList::new();

    let challenge_set = !token.code_challenge.is_empty();
    let method_set = !token.code_challenge_method.is_empty();

    match (challenge_set, method_set) {
        (true, false) => {
            errors.push(FieldError::required(FieldPath::new("codeChallengeMethod")));
        }
        (false, true) => {
            errors.push(FieldError::required(FieldPath::new("codeChallenge")));
        }
        (true, true) => {
            if !CODE_CHALLENGE_METHODS.contains(&token.code_challenge_method.as_str()) {
                errors.push(FieldError::invalid(
                    FieldPath::new("codeChallengeMethod"),
                    format!(
                        "{:?} is not a supported method (expected one of {:?})",
                        token.code_challenge_method, CODE_CHALLENGE_METHODS
                    ),
                ));
            }
        }
        (false, false) => {}
    }

    errors
}

fn is_valid_scope_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '_' | '-' | '/' | '*' | '!')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectMeta;

    fn valid_token() -> AuthorizeToken {
        AuthorizeToken {
            metadata: ObjectMeta::named("a".repeat(MIN_TOKEN_NAME_LENGTH)),
            client_name: "web-console".to_string(),
            user_name: "alice".to_string(),
            user_uid: "u-1".to_string(),
            scopes: vec!["user:info".to_string()],
            expires_in: 300,
            ..AuthorizeToken::default()
        }
    }

    #[test]
    fn test_valid_token_passes() {
        assert!(validate_authorize_token(&valid_token()).is_empty());
    }

    #[test]
    fn test_missing_name_is_required() {
        let mut token = valid_token();
        token.metadata.name.clear();

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "metadata.name");
    }

    #[test]
    fn test_short_name_rejected() {
        let mut token = valid_token();
        token.metadata.name = "short".to_string();

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, crate::validation::FieldErrorKind::TooShort);
    }

    #[test]
    fn test_required_fields_reported_in_order() {
        let mut token = valid_token();
        token.client_name.clear();
        token.user_name.clear();
        token.user_uid.clear();

        let errors = validate_authorize_token(&token);
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["clientName", "userName", "userUID"]);
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let mut token = valid_token();
        token.expires_in = 0;

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "expiresIn");
    }

    #[test]
    fn test_bad_scope_characters_rejected() {
        let mut token = valid_token();
        token.scopes = vec!["ok:scope".to_string(), "bad scope".to_string()];

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "scopes[1]");
    }

    #[test]
    fn test_challenge_without_method_rejected() {
        let mut token = valid_token();
        token.code_challenge = "challenge-value".to_string();

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "codeChallengeMethod");
    }

    #[test]
    fn test_unsupported_challenge_method_rejected() {
        let mut token = valid_token();
        token.code_challenge = "challenge-value".to_string();
        token.code_challenge_method = "S512".to_string();

        let errors = validate_authorize_token(&token);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "codeChallengeMethod");
    }

    #[test]
    fn test_s256_method_accepted() {
        let mut token = valid_token();
        token.code_challenge = "challenge-value".to_string();
        token.code_challenge_method = "S256".to_string();

        assert!(validate_authorize_token(&token).is_empty());
    }
}
