use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Initial delay before the first retry, in milliseconds.
const INITIAL_DELAY_MS: u32 = 1_000;

/// Upper bound for a single backoff delay, in milliseconds.
const MAX_DELAY_MS: u32 = 30_000;

/// Delay before retry number `attempt` (1-based): 1s, 2s, 4s, ... capped at 30s.
pub fn backoff_delay_ms(attempt: u32) -> u32 {
    INITIAL_DELAY_MS
        .saturating_mul(1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX))
        .min(MAX_DELAY_MS)
}

/// Retries an async operation with exponential backoff.
///
/// # Arguments
///
/// * `operation` - A closure that returns a Future resolving to `Result<T, AppError>`
/// * `max_attempts` - Maximum number of attempts, including the first
///
/// # Returns
///
/// The successful result, or the last error encountered
///
/// # Behavior
///
/// - Delays follow [`backoff_delay_ms`]
/// - Only errors for which [`AppError::is_retryable`] holds are retried
/// - All other errors immediately propagate
pub async fn retry_with_backoff<F, Fut, T>(
    mut operation: F,
    max_attempts: u32,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                let delay_ms = backoff_delay_ms(attempt);
                tracing::warn!(
                    error = %e,
                    attempt,
                    max_attempts,
                    delay_ms,
                    "request failed, retrying"
                );
                TimeoutFuture::new(delay_ms).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_then_caps() {
        assert_eq!(backoff_delay_ms(1), 1_000);
        assert_eq!(backoff_delay_ms(2), 2_000);
        assert_eq!(backoff_delay_ms(3), 4_000);
        assert_eq!(backoff_delay_ms(6), 30_000);
        assert_eq!(backoff_delay_ms(40), 30_000);
    }
}
