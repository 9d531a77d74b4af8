use std::sync::Arc;
use std::time::Duration;

use hub_objects::{BlobClient, InMemoryBlobClient, ObjectStorageGateway};
use hub_page::{ProfileResolver, ViewAttribution};
use hub_store::{HubStore, InMemoryHubStore};

use crate::config::ServerConfig;
use crate::identity::{HeaderIdentity, IdentityProvider};

/// Application state: every capability a handler touches, constructed
/// explicitly in one place and passed down. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: Arc<dyn HubStore>,
    pub resolver: Arc<ProfileResolver>,
    pub attribution: Arc<ViewAttribution>,
    pub gateway: Arc<ObjectStorageGateway>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn HubStore>,
        blob: Arc<dyn BlobClient>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let resolver = Arc::new(ProfileResolver::new(store.clone()));
        let attribution = Arc::new(ViewAttribution::new(store.clone()));
        let gateway = Arc::new(
            ObjectStorageGateway::new(blob)
                .with_grant_ttl(Duration::from_secs(config.grant_ttl_secs)),
        );
        Self {
            config,
            store,
            resolver,
            attribution,
            gateway,
            identity,
        }
    }

    /// Fully in-memory wiring for tests and local development. Returns
    /// the concrete backends so callers can seed them.
    pub fn in_memory(
        config: ServerConfig,
    ) -> (Self, Arc<InMemoryHubStore>, Arc<InMemoryBlobClient>) {
        let store = Arc::new(InMemoryHubStore::new());
        let blob = Arc::new(InMemoryBlobClient::new());
        let state = Self::new(
            config,
            store.clone(),
            blob.clone(),
            Arc::new(HeaderIdentity),
        );
        (state, store, blob)
    }
}
