//! Firefly API models
//!
//! Wire structs matching the Firefly REST API. Field names on the wire are
//! camelCase.

use serde::{Deserialize, Serialize};

/// Body of the access-key login request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Access key issued by Firefly
    pub access_key: String,
    /// Secret key issued by Firefly
    pub secret_key: String,
}

/// Body of a successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
}

/// Body of the k8s integration create request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sIntegrationRequest {
    /// Unique cluster identifier
    pub cluster_id: String,
    /// Access key the collector in the cluster will authenticate with
    pub access_key: String,
    /// Whether the cluster is a production environment
    pub is_prod: bool,
    /// Display name of the integration
    pub name: String,
}

impl K8sIntegrationRequest {
    /// Build a create request for a cluster. The integration name defaults
    /// to the cluster id.
    #[must_use]
    pub fn new(cluster_id: &str, access_key: &str, is_prod: bool) -> Self {
        Self {
            cluster_id: cluster_id.to_string(),
            access_key: access_key.to_string(),
            is_prod,
            name: cluster_id.to_string(),
        }
    }
}
