//! Mock FireflyClient for unit testing
//!
//! This module provides a mock implementation of FireflyClientTrait that can
//! be used in unit tests without requiring a reachable Firefly API.
//!
//! The mock stores integrations in memory and honors the same idempotency
//! contract as the real client: creating an existing integration and
//! deleting an absent one both succeed without mutating anything. Each
//! operation is counted so tests can assert how many calls a flow issued,
//! and the whole mock can be switched into an unavailable mode where every
//! operation fails the way an unexpected status code would.

use crate::error::FireflyError;
use crate::firefly_trait::FireflyClientTrait;
use crate::models::K8sIntegrationRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock FireflyClient for testing
#[derive(Clone)]
pub struct MockFireflyClient {
    base_url: String,
    // In-memory store keyed by cluster id
    integrations: Arc<Mutex<HashMap<String, K8sIntegrationRequest>>>,
    // Per-operation call counters
    exists_calls: Arc<Mutex<u32>>,
    create_calls: Arc<Mutex<u32>>,
    delete_calls: Arc<Mutex<u32>>,
    // When set, every operation fails with an Api error
    unavailable: Arc<Mutex<bool>>,
}

impl MockFireflyClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            integrations: Arc::new(Mutex::new(HashMap::new())),
            exists_calls: Arc::new(Mutex::new(0)),
            create_calls: Arc::new(Mutex::new(0)),
            delete_calls: Arc::new(Mutex::new(0)),
            unavailable: Arc::new(Mutex::new(false)),
        }
    }

    /// Add an integration to the mock store (for test setup)
    pub fn add_integration(&self, integration: K8sIntegrationRequest) {
        self.integrations
            .lock()
            .unwrap()
            .insert(integration.cluster_id.clone(), integration);
    }

    /// Whether an integration is currently in the mock store
    pub fn has_integration(&self, cluster_id: &str) -> bool {
        self.integrations.lock().unwrap().contains_key(cluster_id)
    }

    /// Get a stored integration (for asserting on create bodies)
    pub fn integration(&self, cluster_id: &str) -> Option<K8sIntegrationRequest> {
        self.integrations.lock().unwrap().get(cluster_id).cloned()
    }

    /// Make every subsequent operation fail with an Api error
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    /// Number of existence checks issued so far
    pub fn exists_calls(&self) -> u32 {
        *self.exists_calls.lock().unwrap()
    }

    /// Number of create calls issued so far
    pub fn create_calls(&self) -> u32 {
        *self.create_calls.lock().unwrap()
    }

    /// Number of delete calls issued so far
    pub fn delete_calls(&self) -> u32 {
        *self.delete_calls.lock().unwrap()
    }

    fn check_available(&self, operation: &str) -> Result<(), FireflyError> {
        if *self.unavailable.lock().unwrap() {
            return Err(FireflyError::Api(format!(
                "{} failed: 503 Service Unavailable - mock is unavailable",
                operation
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FireflyClientTrait for MockFireflyClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn k8s_integration_exists(&self, cluster_id: &str) -> Result<bool, FireflyError> {
        *self.exists_calls.lock().unwrap() += 1;
        self.check_available("exists")?;
        Ok(self.integrations.lock().unwrap().contains_key(cluster_id))
    }

    async fn create_k8s_integration(
        &self,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), FireflyError> {
        *self.create_calls.lock().unwrap() += 1;
        self.check_available("create")?;

        let mut integrations = self.integrations.lock().unwrap();
        // An existing record is the remote's 409; absorbed, original kept
        if integrations.contains_key(cluster_id) {
            return Ok(());
        }
        integrations.insert(
            cluster_id.to_string(),
            K8sIntegrationRequest::new(cluster_id, access_key, is_prod),
        );
        Ok(())
    }

    async fn delete_k8s_integration(&self, cluster_id: &str) -> Result<(), FireflyError> {
        *self.delete_calls.lock().unwrap() += 1;
        self.check_available("delete")?;

        // A missing record is the remote's 404; absorbed
        self.integrations.lock().unwrap().remove(cluster_id);
        Ok(())
    }
}
