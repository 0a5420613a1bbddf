//! Credential provider for the Firefly API
//!
//! Exchanges an access-key/secret-key pair for a bearer token via the login
//! endpoint. The exchange is attempted under [`RetryPolicy::login_default`]:
//! transport failures and non-2xx responses are retried, a malformed 2xx body
//! is not.

use crate::error::FireflyError;
use crate::models::{LoginRequest, LoginResponse};
use crate::retry::RetryPolicy;
use reqwest::Client;
use tracing::{debug, info};

/// Access-key login endpoint, relative to the API base URL
pub(crate) const LOGIN_PATH: &str = "/api/account/access_keys/login";

/// Perform the access-key login and return the bearer token.
///
/// # Arguments
/// * `client` - HTTP client the session will keep using after login
/// * `base_url` - Firefly API base URL, already trimmed of trailing slashes
/// * `access_key` - Access key issued by Firefly
/// * `secret_key` - Secret key issued by Firefly
///
/// # Returns
/// * `Ok(String)` - The raw `access_token` value; the session renders it as
///   a `Bearer` credential
/// * `Err(FireflyError)` - The terminal error once retries are exhausted, or
///   a `Serialization` error for a 2xx response missing the token field
pub(crate) async fn login(
    client: &Client,
    base_url: &str,
    access_key: &str,
    secret_key: &str,
) -> Result<String, FireflyError> {
    let url = format!("{base_url}{LOGIN_PATH}");
    let body = LoginRequest {
        access_key: access_key.to_string(),
        secret_key: secret_key.to_string(),
    };

    info!("Logging into Firefly");

    RetryPolicy::login_default()
        .run("login", || attempt_login(client, &url, &body))
        .await
}

/// A single login attempt; the retry policy decides whether to repeat it.
async fn attempt_login(
    client: &Client,
    url: &str,
    body: &LoginRequest,
) -> Result<String, FireflyError> {
    let response = client
        .post(url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(FireflyError::Http)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FireflyError::Api(format!(
            "Login failed: {} - {}",
            status, body
        )));
    }

    let response_text = response.text().await.map_err(FireflyError::Http)?;
    let login: LoginResponse = serde_json::from_str(&response_text)?;

    debug!("Login succeeded");
    Ok(login.access_token)
}
