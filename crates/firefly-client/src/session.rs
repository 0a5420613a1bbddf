//! Authenticated HTTP session
//!
//! Wraps a reqwest [`Client`] so every outgoing request carries the bearer
//! token obtained at construction time. The token is immutable for the
//! process lifetime; the session never re-authenticates, and a 401 surfaces
//! to the caller like any other error status.

use crate::auth;
use crate::error::FireflyError;
use reqwest::{Client, Response};
use tracing::debug;

/// HTTP session scoped to the Firefly API base URL with bearer auth
pub struct AuthSession {
    client: Client,
    base_url: String,
    token: String,
}

impl AuthSession {
    /// Create a session, performing the access-key login eagerly.
    ///
    /// The login call happens exactly once, here; it is not deferred to the
    /// first request.
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
        let client = Client::builder().build().map_err(FireflyError::Http)?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let token = auth::login(&client, &base_url, access_key, secret_key).await?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from an API path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get the authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Make an authenticated GET request and return the raw response.
    ///
    /// Status codes are left to the caller; the integration client maps 404
    /// and 409 into success values per its idempotency contract.
    pub async fn get(&self, path: &str) -> Result<Response, FireflyError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        self.client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FireflyError::Http)
    }

    /// Make an authenticated POST request with a JSON body and return the
    /// raw response.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> Result<Response, FireflyError> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        self.client
            .post(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(FireflyError::Http)
    }

    /// Make an authenticated DELETE request and return the raw response.
    pub async fn delete(&self, path: &str) -> Result<Response, FireflyError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        self.client
            .delete(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FireflyError::Http)
    }

    /// Build a session around an already-issued token, skipping login.
    #[cfg(test)]
    fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}
