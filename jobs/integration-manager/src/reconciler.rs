//! Reconciliation logic for kubernetes integrations.
//!
//! Drives the remote integration record to a desired existence state with
//! the minimal call sequence: onboarding checks first and creates only when
//! missing; offboarding deletes unconditionally because the client already
//! absorbs "not found". Each flow issues at most one mutating call, and any
//! error from the client is fatal for the invocation; retry exists only
//! inside the login step.

use crate::config::IntegrationFlow;
use crate::error::JobError;
use firefly_client::FireflyClientTrait;
use std::sync::Arc;
use tracing::info;

/// Reconciles a cluster's integration record against the Firefly API.
pub struct Reconciler {
    client: Arc<dyn FireflyClientTrait>,
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(client: Arc<dyn FireflyClientTrait>) -> Self {
        Self { client }
    }

    /// Run the selected flow for a cluster.
    pub async fn run(
        &self,
        flow: IntegrationFlow,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), JobError> {
        match flow {
            IntegrationFlow::Onboard => self.onboard(cluster_id, access_key, is_prod).await,
            IntegrationFlow::Offboard => self.offboard(cluster_id).await,
        }
    }

    /// Ensure the integration record is present.
    ///
    /// Checks existence first; an already-present record is a no-op, so
    /// repeated onboarding creates the record exactly once.
    pub async fn onboard(
        &self,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), JobError> {
        if self.client.k8s_integration_exists(cluster_id).await? {
            info!(
                "Kubernetes integration for cluster {} already exists, skipping",
                cluster_id
            );
            return Ok(());
        }

        self.client
            .create_k8s_integration(cluster_id, access_key, is_prod)
            .await?;

        info!(
            "Kubernetes integration for cluster {} successfully created",
            cluster_id
        );
        Ok(())
    }

    /// Ensure the integration record is absent.
    ///
    /// Deletes unconditionally; the client treats an already-absent record
    /// as success, so no pre-check is needed.
    pub async fn offboard(&self, cluster_id: &str) -> Result<(), JobError> {
        self.client.delete_k8s_integration(cluster_id).await?;

        info!(
            "Kubernetes integration {} successfully deleted",
            cluster_id
        );
        Ok(())
    }
}
