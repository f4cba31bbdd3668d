//! Registry Layer
//!
//! The strategy contract, client lookup, and the list/watch matcher for the
//! authorize-token resource.

pub mod clients;
pub mod matcher;
pub mod strategy;

pub use clients::{ClientGetter, InMemoryClientRegistry, MockClientGetter};
pub use matcher::{matcher, SelectionPredicate};
pub use strategy::{AuthorizeTokenStrategy, CreateStrategy};
