//! Retry policies for remote calls.

use std::future::Future;
use std::time::Duration;

use crate::config::{BuilderConfig, RemoteConfig};
use crate::error::AppError;

/// How the delay grows between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `base * 2^(attempt - 1)`, capped.
    Exponential,
    /// `base * attempt`, capped.
    Linear,
}

/// Bounded retry of transient failures (timeouts, 429, 5xx).
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base: Duration,
    pub max_delay: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Request-path policy: exponential backoff with a ceiling.
    pub fn exponential(config: &RemoteConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base: Duration::from_millis(config.retry_base_ms),
            max_delay: Duration::from_millis(config.retry_max_ms),
            backoff: Backoff::Exponential,
        }
    }

    /// Offline builder policy: the wait grows by one step per attempt.
    pub fn linear(config: &BuilderConfig) -> Self {
        let step = Duration::from_millis(config.retry_step_ms);
        Self {
            max_attempts: config.max_attempts.max(1),
            base: step,
            max_delay: step * config.max_attempts.max(1),
            backoff: Backoff::Linear,
        }
    }

    /// Single attempt, no waiting.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff: Backoff::Linear,
        }
    }

    /// Delay before retrying after the given (1-based) failed attempt.
    pub fn delay(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            Backoff::Exponential => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                self.base.saturating_mul(factor)
            }
            Backoff::Linear => self.base.saturating_mul(attempt),
        };
        delay.min(self.max_delay)
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    ///
    /// Exhausting attempts on a rate-limit response yields
    /// [`AppError::RateLimited`]; any other final error is returned as is.
    pub async fn run<T, F, Fut>(&self, endpoint: &str, mut op: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let wait = self.delay(attempt);
                    tracing::debug!(
                        endpoint,
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        error = %e,
                        "Transient remote failure, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(AppError::RemoteStatus { status: 429, .. }) => {
                    return Err(AppError::RateLimited {
                        endpoint: endpoint.to_string(),
                        attempts: attempt,
                    });
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

    fn fast(max_attempts: u32, backoff: Backoff) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
            backoff,
        }
    }

    fn unavailable() -> AppError {
        AppError::RemoteStatus {
            endpoint: "sparql".into(),
            status: 503,
        }
    }

    #[test]
    fn test_exponential_delay_is_capped() {
        let policy = fast(10, Backoff::Exponential);
        assert_eq!(policy.delay(1), Duration::from_millis(1));
        assert_eq!(policy.delay(2), Duration::from_millis(2));
        assert_eq!(policy.delay(3), Duration::from_millis(4));
        assert_eq!(policy.delay(9), Duration::from_millis(4));
    }

    #[test]
    fn test_linear_delay() {
        let policy = RetryPolicy::linear(&BuilderConfig::default());
        assert_eq!(policy.delay(1), Duration::from_secs(5));
        assert_eq!(policy.delay(2), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_retries_transient_then_succeeds() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result = fast(3, Backoff::Exponential)
            .run("wbgetentities", move || async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(unavailable())
                } else {
                    Ok(7)
                }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_permanent_error_is_not_retried() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = fast(3, Backoff::Linear)
            .run("wbgetentities", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AppError::RemoteFormat("no entities".into()))
            })
            .await;
        assert!(matches!(result, Err(AppError::RemoteFormat(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_exhaustion() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = fast(2, Backoff::Exponential)
            .run("query", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AppError::RemoteStatus {
                    endpoint: "query".into(),
                    status: 429,
                })
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::RateLimited { attempts: 2, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
