//! Firefly API client
//!
//! Typed operations against the kubernetes integrations resource at
//! `/api/integrations/k8s`. The remote API's own conflict/not-found signals
//! are the idempotency mechanism: a 404 on check/delete and a 409 on create
//! are absorbed into success so callers can treat every operation as
//! "ensure state X" rather than "mutate and fail if already there".

use crate::error::FireflyError;
use crate::firefly_trait::FireflyClientTrait;
use crate::models::K8sIntegrationRequest;
use crate::session::AuthSession;
use tracing::info;

/// Kubernetes integrations endpoint, relative to the API base URL
pub(crate) const K8S_INTEGRATIONS_PATH: &str = "/api/integrations/k8s";

/// Firefly API client for kubernetes integration management
pub struct FireflyClient {
    session: AuthSession,
}

impl FireflyClient {
    /// Create a client, logging in eagerly as part of construction.
    ///
    /// # Arguments
    /// * `base_url` - Firefly API base URL (e.g., "https://prodapi.gofirefly.io")
    /// * `access_key` - Access key issued by Firefly
    /// * `secret_key` - Secret key issued by Firefly
    pub async fn connect(
        base_url: &str,
        access_key: &str,
        secret_key: &str,
    ) -> Result<Self, FireflyError> {
        let session = AuthSession::connect(base_url, access_key, secret_key).await?;
        Ok(Self { session })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    /// Path of a single integration, with the cluster id percent-encoded
    fn integration_path(cluster_id: &str) -> String {
        format!("{}/{}", K8S_INTEGRATIONS_PATH, urlencoding::encode(cluster_id))
    }

    /// Check whether a kubernetes integration exists for a cluster.
    ///
    /// # Returns
    /// * `Ok(true)` - The integration exists
    /// * `Ok(false)` - The remote returned 404
    /// * `Err(FireflyError)` - Any other non-2xx response
    pub async fn k8s_integration_exists(&self, cluster_id: &str) -> Result<bool, FireflyError> {
        info!("Checking if kubernetes integration for cluster {} exists", cluster_id);

        let response = self.session.get(&Self::integration_path(cluster_id)).await?;

        let status = response.status();
        if status == 404 {
            info!("Kubernetes integration for cluster {} not found", cluster_id);
            return Ok(false);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FireflyError::Api(format!(
                "Failed to check kubernetes integration for cluster {}: {} - {}",
                cluster_id, status, body
            )));
        }

        Ok(true)
    }

    /// Create a kubernetes integration for a cluster.
    ///
    /// The integration name defaults to the cluster id. A 409 from the
    /// remote means the record already exists and is treated as success.
    pub async fn create_k8s_integration(
        &self,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), FireflyError> {
        info!("Creating kubernetes integration for cluster {}", cluster_id);

        let request = K8sIntegrationRequest::new(cluster_id, access_key, is_prod);
        let body = serde_json::to_value(&request)?;

        let response = self.session.post(K8S_INTEGRATIONS_PATH, &body).await?;

        let status = response.status();
        if status == 409 {
            info!("Kubernetes integration for cluster {} already exists", cluster_id);
            return Ok(());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FireflyError::Api(format!(
                "Failed to create kubernetes integration for cluster {}: {} - {}",
                cluster_id, status, body
            )));
        }

        Ok(())
    }

    /// Delete the kubernetes integration of a cluster.
    ///
    /// A 404 from the remote means the record is already absent and is
    /// treated as success.
    pub async fn delete_k8s_integration(&self, cluster_id: &str) -> Result<(), FireflyError> {
        info!("Deleting kubernetes integration for cluster {}", cluster_id);

        let response = self.session.delete(&Self::integration_path(cluster_id)).await?;

        let status = response.status();
        if status == 404 {
            info!("Kubernetes integration for cluster {} not found", cluster_id);
            return Ok(());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FireflyError::Api(format!(
                "Failed to delete kubernetes integration for cluster {}: {} - {}",
                cluster_id, status, body
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl FireflyClientTrait for FireflyClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn k8s_integration_exists(&self, cluster_id: &str) -> Result<bool, FireflyError> {
        self.k8s_integration_exists(cluster_id).await
    }

    async fn create_k8s_integration(
        &self,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), FireflyError> {
        self.create_k8s_integration(cluster_id, access_key, is_prod).await
    }

    async fn delete_k8s_integration(&self, cluster_id: &str) -> Result<(), FireflyError> {
        self.delete_k8s_integration(cluster_id).await
    }
}
