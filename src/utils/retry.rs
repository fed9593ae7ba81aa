use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::Instrument;

// ============================================================================
// Exponential Backoff Retry Strategy
// ============================================================================
//
// Used while opening the database pool at startup: the database container
// may still be booting. Delays grow by `multiplier` up to `max_delay`.
//
// ============================================================================

#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of attempts, the first one included
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    fn next_delay(&self, delay: Duration) -> Duration {
        let next = Duration::from_millis(((delay.as_millis() as f64) * self.multiplier) as u64);
        next.min(self.max_delay)
    }
}

/// Outcome of `retry_on_transient`
#[derive(Debug)]
pub enum RetryResult<T, E> {
    Success(T),
    /// Still transient when the attempts ran out
    Failed(E),
    /// Not worth retrying (bad credentials, unknown database, ...)
    PermanentFailure(E),
}

impl<T, E> RetryResult<T, E> {
    pub fn into_result(self) -> Result<T, E> {
        match self {
            RetryResult::Success(value) => Ok(value),
            RetryResult::Failed(err) | RetryResult::PermanentFailure(err) => Err(err),
        }
    }
}

pub trait IsTransient {
    fn is_transient(&self) -> bool;
}

/// Run `operation` until it succeeds, fails permanently or `max_attempts` is
/// reached. Each attempt runs inside a `retry_attempt` span carrying its number.
pub async fn retry_on_transient<F, Fut, T, E>(
    config: RetryConfig,
    mut operation: F,
) -> RetryResult<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display + IsTransient,
{
    let max_attempts = config.max_attempts.max(1);
    let mut delay = config.initial_delay;
    let mut attempt = 1;

    loop {
        let span = tracing::debug_span!("retry_attempt", attempt, max_attempts);
        let error = match operation(attempt).instrument(span).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(attempts = attempt, "Connected after retrying");
                }
                return RetryResult::Success(value);
            }
            Err(error) => error,
        };

        if !error.is_transient() {
            tracing::error!(attempt, error = %error, "Giving up, error is not transient");
            return RetryResult::PermanentFailure(error);
        }
        if attempt == max_attempts {
            tracing::error!(attempts = attempt, error = %error, "Still failing after last attempt");
            return RetryResult::Failed(error);
        }

        tracing::warn!(
            attempt,
            max_attempts,
            error = %error,
            retry_in_ms = delay.as_millis() as u64,
            "Transient failure"
        );
        sleep(delay).await;
        delay = config.next_delay(delay);
        attempt += 1;
    }
}
