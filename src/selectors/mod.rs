//! Label and Field Selectors
//!
//! Equality-based predicate expressions used by list/watch operations to
//! filter resources. A selector is a comma-separated list of requirements:
//! `key=value`, `key==value`, `key!=value`, and (for labels only) a bare
//! `key` meaning the key must exist. The empty selector matches everything.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::SelectorParseError;

/// A single parsed requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Requirement {
    key: String,
    op: Operator,
    value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Operator {
    Equals,
    NotEquals,
    Exists,
}

impl Requirement {
    fn matches(&self, set: &BTreeMap<String, String>) -> bool {
        match self.op {
            Operator::Equals => set.get(&self.key).is_some_and(|v| *v == self.value),
            Operator::NotEquals => set.get(&self.key).is_none_or(|v| *v != self.value),
            Operator::Exists => set.contains_key(&self.key),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Operator::Equals => write!(f, "{}={}", self.key, self.value),
            Operator::NotEquals => write!(f, "{}!={}", self.key, self.value),
            Operator::Exists => f.write_str(&self.key),
        }
    }
}

fn parse_requirements(
    selector: &str,
    allow_exists: bool,
) -> Result<Vec<Requirement>, SelectorParseError> {
    let mut requirements = Vec::new();

    for raw in selector.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            // "a=b," has a trailing empty requirement; only whole-empty
            // selectors are allowed to be vacuous.
            if selector.trim().is_empty() {
                continue;
            }
            return Err(SelectorParseError::EmptyRequirement {
                selector: selector.to_string(),
            });
        }

        let (key, op, value) = if let Some((key, value)) = raw.split_once("!=") {
            (key, Operator::NotEquals, value)
        } else if let Some((key, value)) = raw.split_once("==") {
            (key, Operator::Equals, value)
        } else if let Some((key, value)) = raw.split_once('=') {
            (key, Operator::Equals, value)
        } else if allow_exists {
            (raw, Operator::Exists, "")
        } else {
            return Err(SelectorParseError::UnsupportedOperator {
                requirement: raw.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(SelectorParseError::EmptyKey {
                requirement: raw.to_string(),
            });
        }

        requirements.push(Requirement {
            key: key.to_string(),
            op,
            value: value.trim().to_string(),
        });
    }

    Ok(requirements)
}

/// A parsed label selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSelector {
    requirements: Vec<Requirement>,
}

impl LabelSelector {
    /// The selector that matches every object.
    pub fn everything() -> Self {
        Self::default()
    }

    /// Parse a selector string, e.g. `env=prod,tier!=frontend,audited`.
    pub fn parse(selector: &str) -> Result<Self, SelectorParseError> {
        Ok(Self {
            requirements: parse_requirements(selector, true)?,
        })
    }

    /// Whether the selector places no constraints.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Test a label map against every requirement.
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }
}

/// A parsed field selector. Unlike labels, fields support only equality
/// operators; every object presents a value for each selectable field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    requirements: Vec<Requirement>,
}

impl FieldSelector {
    /// The selector that matches every object.
    pub fn everything() -> Self {
        Self::default()
    }

    /// Parse a selector string, e.g. `clientName=web-console,userName!=bot`.
    pub fn parse(selector: &str) -> Result<Self, SelectorParseError> {
        Ok(Self {
            requirements: parse_requirements(selector, false)?,
        })
    }

    /// Whether the selector places no constraints.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Test a projected field set against every requirement.
    pub fn matches(&self, fields: &BTreeMap<String, String>) -> bool {
        self.requirements.iter().all(|r| r.matches(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_selector_matches_everything() {
        let selector = LabelSelector::parse("").unwrap();
        assert!(selector.is_empty());
        assert!(selector.matches(&set(&[])));
        assert!(selector.matches(&set(&[("a", "b")])));
    }

    #[test]
    fn test_equality_and_double_equals() {
        let selector = LabelSelector::parse("env=prod").unwrap();
        assert!(selector.matches(&set(&[("env", "prod")])));
        assert!(!selector.matches(&set(&[("env", "dev")])));
        assert!(!selector.matches(&set(&[])));

        let selector = LabelSelector::parse("env==prod").unwrap();
        assert!(selector.matches(&set(&[("env", "prod")])));
    }

    #[test]
    fn test_inequality_matches_absent_key() {
        let selector = LabelSelector::parse("env!=prod").unwrap();
        assert!(selector.matches(&set(&[("env", "dev")])));
        assert!(selector.matches(&set(&[])));
        assert!(!selector.matches(&set(&[("env", "prod")])));
    }

    #[test]
    fn test_exists_requirement() {
        let selector = LabelSelector::parse("audited").unwrap();
        assert!(selector.matches(&set(&[("audited", "")])));
        assert!(!selector.matches(&set(&[("other", "x")])));
    }

    #[test]
    fn test_conjunction_of_requirements() {
        let selector = LabelSelector::parse("env=prod, tier!=frontend").unwrap();
        assert!(selector.matches(&set(&[("env", "prod"), ("tier", "backend")])));
        assert!(!selector.matches(&set(&[("env", "prod"), ("tier", "frontend")])));
    }

    #[test]
    fn test_field_selector_rejects_exists() {
        let err = FieldSelector::parse("clientName").unwrap_err();
        assert!(matches!(
            err,
            crate::error::SelectorParseError::UnsupportedOperator { .. }
        ));
    }

    #[test]
    fn test_field_selector_equality() {
        let selector = FieldSelector::parse("clientName=web,userName!=bot").unwrap();
        assert!(selector.matches(&set(&[("clientName", "web"), ("userName", "alice")])));
        assert!(!selector.matches(&set(&[("clientName", "web"), ("userName", "bot")])));
    }

    #[test]
    fn test_trailing_comma_rejected() {
        let err = LabelSelector::parse("env=prod,").unwrap_err();
        assert!(matches!(
            err,
            crate::error::SelectorParseError::EmptyRequirement { .. }
        ));
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = LabelSelector::parse("=prod").unwrap_err();
        assert!(matches!(
            err,
            crate::error::SelectorParseError::EmptyKey { .. }
        ));
    }

    #[test]
    fn test_requirement_display_round_trip() {
        let selector = LabelSelector::parse("env=prod,tier!=frontend,audited").unwrap();
        let rendered: Vec<String> =
            selector.requirements.iter().map(|r| r.to_string()).collect();
        assert_eq!(rendered, vec!["env=prod", "tier!=frontend", "audited"]);
    }
}
