//! Client Lookup
//!
//! Resolution of a token's `clientName` to the client registration record,
//! injected into the strategy as a trait so hosts can back it with their own
//! storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::error::ClientLookupError;
use crate::types::{OauthClient, RequestContext};

/// Client lookup interface.
#[async_trait]
pub trait ClientGetter: Send + Sync {
    /// Resolve a client registration by name.
    async fn get_client(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<OauthClient, ClientLookupError>;
}

/// In-memory client registry.
pub struct InMemoryClientRegistry {
    clients: Mutex<HashMap<String, OauthClient>>,
}

impl InMemoryClientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Register or replace a client, keyed by its metadata name.
    pub fn insert(&self, client: OauthClient) {
        self.clients
            .lock()
            .unwrap()
            .insert(client.metadata.name.clone(), client);
    }

    /// Remove a client. Returns whether it existed.
    pub fn remove(&self, name: &str) -> bool {
        self.clients.lock().unwrap().remove(name).is_some()
    }
}

impl Default for InMemoryClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientGetter for InMemoryClientRegistry {
    async fn get_client(
        &self,
        _ctx: &RequestContext,
        name: &str,
    ) -> Result<OauthClient, ClientLookupError> {
        let clients = self.clients.lock().unwrap();
        clients.get(name).cloned().ok_or_else(|| {
            debug!(client = name, "client not found");
            ClientLookupError::NotFound {
                name: name.to_string(),
            }
        })
    }
}

/// Mock client getter for testing.
#[derive(Default)]
pub struct MockClientGetter {
    clients: Mutex<HashMap<String, OauthClient>>,
    lookup_history: Mutex<Vec<String>>,
    next_error: Mutex<Option<ClientLookupError>>,
}

impl MockClientGetter {
    /// Create a new mock client getter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a client.
    pub fn add_client(&self, client: OauthClient) -> &Self {
        self.clients
            .lock()
            .unwrap()
            .insert(client.metadata.name.clone(), client);
        self
    }

    /// Fail the next lookup with the given error.
    pub fn set_next_error(&self, error: ClientLookupError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Names the getter has been asked to resolve, in order.
    pub fn get_lookup_history(&self) -> Vec<String> {
        self.lookup_history.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientGetter for MockClientGetter {
    async fn get_client(
        &self,
        _ctx: &RequestContext,
        name: &str,
    ) -> Result<OauthClient, ClientLookupError> {
        self.lookup_history.lock().unwrap().push(name.to_string());

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        self.clients
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| ClientLookupError::NotFound {
                name: name.to_string(),
            })
    }
}
