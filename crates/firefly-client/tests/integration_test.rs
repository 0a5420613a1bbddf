//! Integration tests for the Firefly client
//!
//! These tests require a reachable Firefly API and a valid access-key pair.
//! Set FIREFLY_ACCESS_KEY and FIREFLY_SECRET_KEY (and optionally
//! FIREFLY_API_URL) to run.

use firefly_client::FireflyClient;

const TEST_CLUSTER_ID: &str = "firefly-client-integration-test";

async fn connect() -> FireflyClient {
    let url = std::env::var("FIREFLY_API_URL")
        .unwrap_or_else(|_| "https://prodapi.gofirefly.io".to_string());
    let access_key = std::env::var("FIREFLY_ACCESS_KEY")
        .expect("FIREFLY_ACCESS_KEY environment variable must be set");
    let secret_key = std::env::var("FIREFLY_SECRET_KEY")
        .expect("FIREFLY_SECRET_KEY environment variable must be set");

    FireflyClient::connect(&url, &access_key, &secret_key)
        .await
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires a reachable Firefly API
async fn test_login_and_base_url() {
    let client = connect().await;
    assert!(client.base_url().starts_with("http"));
}

#[tokio::test]
#[ignore]
async fn test_exists_on_never_created_cluster_returns_false() {
    let client = connect().await;

    let exists = client
        .k8s_integration_exists("never-created-cluster-id")
        .await
        .expect("Failed to check integration existence");

    assert!(!exists);
}

#[tokio::test]
#[ignore]
async fn test_create_is_idempotent() {
    let client = connect().await;
    let access_key = std::env::var("FIREFLY_ACCESS_KEY")
        .expect("FIREFLY_ACCESS_KEY environment variable must be set");

    client
        .create_k8s_integration(TEST_CLUSTER_ID, &access_key, false)
        .await
        .expect("Failed to create integration");

    let exists = client
        .k8s_integration_exists(TEST_CLUSTER_ID)
        .await
        .expect("Failed to check integration existence");
    assert!(exists);

    // Second create hits the remote's 409 and must still succeed
    client
        .create_k8s_integration(TEST_CLUSTER_ID, &access_key, false)
        .await
        .expect("Second create should absorb the conflict");

    // Clean up
    let _ = client.delete_k8s_integration(TEST_CLUSTER_ID).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_absent_integration_succeeds() {
    let client = connect().await;

    client
        .delete_k8s_integration("never-created-cluster-id")
        .await
        .expect("Delete of an absent integration should absorb the 404");

    // And again, to confirm repeat invocations never raise
    client
        .delete_k8s_integration("never-created-cluster-id")
        .await
        .expect("Repeated delete should still succeed");
}
