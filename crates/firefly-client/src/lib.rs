//! Firefly REST API Client
//!
//! A Rust client library for managing Kubernetes cluster integrations
//! against the Firefly platform. Authenticates once per session via
//! access-key login, then exposes idempotent existence/create/delete
//! operations over the integrations resource.
//!
//! # Example
//!
//! ```no_run
//! use firefly_client::FireflyClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client; this performs the access-key login eagerly
//! let client = FireflyClient::connect(
//!     "https://prodapi.gofirefly.io",
//!     "your-access-key",
//!     "your-secret-key",
//! ).await?;
//!
//! // Ensure a cluster integration is present
//! if !client.k8s_integration_exists("my-cluster").await? {
//!     client.create_k8s_integration("my-cluster", "your-access-key", false).await?;
//! }
//!
//! // Ensure it is absent (a 404 from the remote is success)
//! client.delete_k8s_integration("my-cluster").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Eager login**: the bearer token is obtained once at construction and
//!   attached to every request
//! - **Bounded retry**: login retries transport/HTTP failures with a fixed
//!   delay; all other operations fail fast
//! - **Idempotency**: the remote's 404/409 signals are absorbed into success
//!   so flows can be re-run safely

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod retry;
pub mod session;
#[path = "trait.rs"]
pub mod firefly_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::FireflyClient;
pub use error::FireflyError;
pub use firefly_trait::FireflyClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockFireflyClient;
pub use models::K8sIntegrationRequest;
pub use retry::RetryPolicy;
pub use session::AuthSession;
