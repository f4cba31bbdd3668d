//! Registry Object Model
//!
//! Resource definitions and the common metadata shared by all of them.

use std::any::Any;

pub mod client;
pub mod meta;
pub mod token;

pub use client::{OauthClient, ScopeRestriction};
pub use meta::{ObjectMeta, RequestContext, UserInfo};
pub use token::AuthorizeToken;

/// A type-erased registry object.
///
/// The list/watch path hands the matcher "some object"; this trait lets the
/// matcher read common metadata and recover the concrete resource, reporting
/// a wrong-kind misuse when the downcast fails.
pub trait Object: Any + Send + Sync {
    /// The resource kind name, used in wrong-kind errors.
    fn kind(&self) -> &'static str;

    /// Common object metadata.
    fn metadata(&self) -> &ObjectMeta;

    /// Downcast support.
    fn as_any(&self) -> &dyn Any;
}

impl Object for AuthorizeToken {
    fn kind(&self) -> &'static str {
        "AuthorizeToken"
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Object for OauthClient {
    fn kind(&self) -> &'static str {
        "OauthClient"
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
