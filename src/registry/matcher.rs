//! List/Watch Matching
//!
//! The predicate the host's list/watch machinery applies to decide whether
//! an object belongs in a filtered result set.

use crate::error::MatchError;
use crate::selectors::{FieldSelector, LabelSelector};
use crate::types::{AuthorizeToken, Object};

/// A compiled pair of selectors applied to authorize tokens.
pub struct SelectionPredicate {
    label: LabelSelector,
    field: FieldSelector,
}

impl SelectionPredicate {
    /// Test a type-erased object. True only when both the label selector and
    /// the field selector match; a non-token object is a host-side misuse
    /// and reported as an error rather than a non-match.
    pub fn matches(&self, obj: &dyn Object) -> Result<bool, MatchError> {
        let token = obj
            .as_any()
            .downcast_ref::<AuthorizeToken>()
            .ok_or_else(|| MatchError::NotAToken {
                kind: obj.kind().to_string(),
            })?;

        Ok(self.label.matches(&token.metadata.labels)
            && self.field.matches(&token.selectable_fields()))
    }
}

/// Build the list/watch predicate for authorize tokens from a label selector
/// and a field selector.
pub fn matcher(label: LabelSelector, field: FieldSelector) -> SelectionPredicate {
    SelectionPredicate { label, field }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OauthClient, ObjectMeta};

    fn token() -> AuthorizeToken {
        AuthorizeToken {
            metadata: ObjectMeta::named("code-abc").with_label("env", "prod"),
            client_name: "web-console".to_string(),
            user_name: "alice".to_string(),
            user_uid: "u-1".to_string(),
            ..AuthorizeToken::default()
        }
    }

    #[test]
    fn test_everything_matches_any_token() {
        let predicate = matcher(LabelSelector::everything(), FieldSelector::everything());
        assert!(predicate.matches(&token()).unwrap());
    }

    #[test]
    fn test_both_selectors_must_match() {
        let labels_hit = LabelSelector::parse("env=prod").unwrap();
        let labels_miss = LabelSelector::parse("env=dev").unwrap();
        let fields_hit = FieldSelector::parse("clientName=web-console").unwrap();
        let fields_miss = FieldSelector::parse("clientName=cli").unwrap();

        let token = token();
        assert!(matcher(labels_hit.clone(), fields_hit.clone())
            .matches(&token)
            .unwrap());
        assert!(!matcher(labels_miss, fields_hit).matches(&token).unwrap());
        assert!(!matcher(labels_hit, fields_miss).matches(&token).unwrap());
    }

    #[test]
    fn test_field_selector_on_user_name() {
        let predicate = matcher(
            LabelSelector::everything(),
            FieldSelector::parse("userName=alice,metadata.name=code-abc").unwrap(),
        );
        assert!(predicate.matches(&token()).unwrap());

        let predicate = matcher(
            LabelSelector::everything(),
            FieldSelector::parse("userName=bob").unwrap(),
        );
        assert!(!predicate.matches(&token()).unwrap());
    }

    #[test]
    fn test_non_token_object_is_an_error() {
        let predicate = matcher(LabelSelector::everything(), FieldSelector::everything());
        let client = OauthClient::named("web-console");

        let err = predicate.matches(&client).unwrap_err();
        assert!(matches!(err, MatchError::NotAToken { kind } if kind == "OauthClient"));
    }
}
