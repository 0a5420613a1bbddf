//! Bounded retry for transiently failing API calls.
//!
//! The policy is an explicit value: total attempt count, fixed delay between
//! attempts, and a predicate deciding which errors are worth retrying. The
//! login call uses `RetryPolicy::login_default()`; nothing else in the client
//! retries.

use std::time::Duration;

use crate::error::FireflyError;
use tracing::warn;

/// Fixed-delay retry policy
///
/// Runs an async operation up to `max_attempts` times total, sleeping
/// `delay` between attempts. Only errors accepted by `retryable` trigger
/// another attempt; any other error, or exhaustion of the attempts,
/// returns the terminal error unchanged.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first
    max_attempts: u32,
    /// Fixed delay between consecutive attempts
    delay: Duration,
    /// Predicate deciding whether an error is worth another attempt
    retryable: fn(&FireflyError) -> bool,
}

impl RetryPolicy {
    /// Create a retry policy
    ///
    /// # Arguments
    /// * `max_attempts` - Total attempts, including the first (minimum 1)
    /// * `delay` - Fixed delay between attempts
    /// * `retryable` - Predicate selecting errors that trigger a retry
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration, retryable: fn(&FireflyError) -> bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            retryable,
        }
    }

    /// The policy applied to the Firefly login call: 3 attempts total with a
    /// fixed 5-second delay, retrying transport and HTTP-status failures.
    #[must_use]
    pub fn login_default() -> Self {
        Self::new(3, Duration::from_secs(5), FireflyError::is_retryable)
    }

    /// Execute an async operation under this policy.
    ///
    /// # Arguments
    /// * `operation_name` - Name for logging purposes
    /// * `operation` - The async operation to retry
    ///
    /// # Returns
    /// The first success, or the terminal error once attempts are exhausted
    /// or a non-retryable error occurs.
    pub async fn run<F, Fut, T>(
        &self,
        operation_name: &str,
        mut operation: F,
    ) -> Result<T, FireflyError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, FireflyError>>,
    {
        let mut attempt = 1u32;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if attempt < self.max_attempts && (self.retryable)(&e) => {
                    warn!(
                        operation = %operation_name,
                        attempt = attempt,
                        error = %e,
                        delay_secs = self.delay.as_secs(),
                        "Operation failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn transient() -> FireflyError {
        FireflyError::Api("login failed: 503 - unavailable".to_string())
    }

    fn malformed() -> FireflyError {
        FireflyError::Serialization(serde_json::from_str::<String>("{").unwrap_err())
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_three_attempts_with_fixed_spacing() {
        let policy = RetryPolicy::login_default();
        let attempts = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let result: Result<(), FireflyError> = policy
            .run("login", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(transient()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        // Two sleeps of 5s between the three attempts
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_second_attempt_stops_retrying() {
        let policy = RetryPolicy::login_default();
        let attempts = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let result = policy
            .run("login", || {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(transient())
                    } else {
                        Ok("token".to_string())
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "token");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_fails_on_first_attempt() {
        let policy = RetryPolicy::login_default();
        let attempts = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let result: Result<(), FireflyError> = policy
            .run("login", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(malformed()) }
            })
            .await;

        assert!(matches!(result, Err(FireflyError::Serialization(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_immediate_success_runs_once() {
        let policy = RetryPolicy::new(3, Duration::from_secs(5), FireflyError::is_retryable);
        let attempts = AtomicU32::new(0);

        let result = policy
            .run("login", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Ok(42u32) }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
