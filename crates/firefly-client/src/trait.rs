//! FireflyClient trait for mocking
//!
//! This trait abstracts the FireflyClient to enable mocking in unit tests.
//! The concrete FireflyClient implements this trait, and tests can use mock
//! implementations.

use crate::error::FireflyError;

/// Trait for Firefly API client operations
///
/// This trait enables mocking of Firefly API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait FireflyClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Check whether a kubernetes integration exists for a cluster.
    /// A remote 404 is `Ok(false)`, not an error.
    async fn k8s_integration_exists(&self, cluster_id: &str) -> Result<bool, FireflyError>;

    /// Create a kubernetes integration for a cluster.
    /// A remote 409 (already exists) is `Ok(())`, not an error.
    async fn create_k8s_integration(
        &self,
        cluster_id: &str,
        access_key: &str,
        is_prod: bool,
    ) -> Result<(), FireflyError>;

    /// Delete the kubernetes integration of a cluster.
    /// A remote 404 (already absent) is `Ok(())`, not an error.
    async fn delete_k8s_integration(&self, cluster_id: &str) -> Result<(), FireflyError>;
}
