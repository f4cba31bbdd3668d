//! Common Object Metadata
//!
//! The shared metadata carried by every registry object, plus the per-request
//! context handed to validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata common to all registry objects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Object name. For authorize tokens this is the opaque code itself.
    pub name: String,
    /// Labels, matched by label selectors.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Annotations, opaque to the registry.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// When the object was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

impl ObjectMeta {
    /// Create metadata with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a label, builder-style.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

/// Identity of the user a request acts as.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Per-request context passed through the registry call path.
///
/// The strategy does not inspect it beyond forwarding it to collaborators,
/// matching how the host threads its request context through.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    /// The acting user, when the request is authenticated.
    pub user: Option<UserInfo>,
}

impl RequestContext {
    /// Context with no associated user.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context acting as the given user.
    pub fn for_user(name: impl Into<String>) -> Self {
        Self {
            user: Some(UserInfo {
                name: name.into(),
                uid: None,
            }),
        }
    }
}
