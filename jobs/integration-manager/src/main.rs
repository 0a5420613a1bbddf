//! Firefly Integration Manager
//!
//! One-shot job that drives a cluster's kubernetes integration record to a
//! desired state against the Firefly API:
//! - onboard: ensure the integration record exists
//! - offboard: ensure the integration record is absent
//!
//! The job authenticates once at startup, runs the selected flow to
//! completion or first fatal error, and exits nonzero on failure.

mod config;
mod error;
mod reconciler;

use crate::config::Config;
use crate::error::JobError;
use crate::reconciler::Reconciler;
use firefly_client::FireflyClient;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), JobError> {
    tracing_subscriber::fmt::init();

    info!("Starting Firefly integration manager");

    // Load configuration from environment variables
    let config = Config::from_env()?;

    info!("Configuration:");
    info!("  API URL: {}", config.app_api_url);
    info!("  Cluster ID: {}", config.cluster_id);
    info!("  Flow: {}", config.flow);

    // Connecting performs the access-key login eagerly
    let client = match FireflyClient::connect(
        &config.app_api_url,
        &config.access_key,
        &config.secret_key,
    )
    .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Firefly API client: {}", e);
            return Err(JobError::Firefly(e));
        }
    };

    let reconciler = Reconciler::new(Arc::new(client));
    if let Err(e) = reconciler
        .run(
            config.flow,
            &config.cluster_id,
            &config.access_key,
            config.is_prod,
        )
        .await
    {
        error!("Integration flow {} failed: {}", config.flow, e);
        return Err(e);
    }

    Ok(())
}
