use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for connection attempts
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound for any single delay, in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied to the delay after each failure
    pub backoff_multiplier: f64,

    /// Randomise each delay to 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 3 retries, 100ms initial delay, 5s cap, x2 growth, jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal delay before retry number `attempt` (1-based), before jitter.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let raw = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        Duration::from_millis((raw as u64).min(self.max_delay_ms))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned once `config.max_retries` retries have failed.
///
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let client = retry_with_backoff(
///     || database::mongodb::connect_from_config(&config),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) if attempt >= config.max_retries => {
                warn!(attempts = attempt + 1, error = %e, "Operation failed, giving up");
                return Err(e);
            }
            Err(e) => {
                attempt += 1;

                let nominal = config.delay_for(attempt);
                let delay = if config.use_jitter {
                    apply_jitter(nominal)
                } else {
                    nominal
                };

                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Scale a delay to between 50% and 100% of its value
fn apply_jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let random_factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    delay.mul_f64(random_factor)
}

/// [`retry_with_backoff`] with the default [`RetryConfig`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let calls = counter.clone();

        let config = RetryConfig::new().with_initial_delay(5).without_jitter();

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    let count = calls.fetch_add(1, Ordering::SeqCst);
                    if count < 2 {
                        Err(format!("server selection timeout #{}", count + 1))
                    } else {
                        Ok("connected")
                    }
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_returns_last_error_when_budget_spent() {
        let counter = Arc::new(AtomicU32::new(0));
        let calls = counter.clone();

        let config = RetryConfig::new()
            .with_max_retries(2)
            .with_initial_delay(5)
            .without_jitter();

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("connection refused")
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap_err(), "connection refused");
        // 1 initial + 2 retries
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_delay_for_grows_and_caps() {
        let config = RetryConfig::new().with_initial_delay(100).with_max_delay(300);

        assert_eq!(config.delay_for(1), Duration::from_millis(100));
        assert_eq!(config.delay_for(2), Duration::from_millis(200));
        assert_eq!(config.delay_for(3), Duration::from_millis(300));
        assert_eq!(config.delay_for(10), Duration::from_millis(300));
    }

    #[test]
    fn test_apply_jitter_stays_in_range() {
        let delay = Duration::from_millis(1000);
        for _ in 0..10 {
            let jittered = apply_jitter(delay);
            assert!(jittered >= Duration::from_millis(500));
            assert!(jittered <= delay);
        }
    }
}
