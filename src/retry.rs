//! Fixed-delay retry helper.

use std::fmt::Display;
use std::thread::sleep;
use std::time::Duration;
use tracing::{error, warn};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_DELAY_MS: u64 = 1_000;

/// How many times to try an operation and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Pause between a failure and the next attempt.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

/// Call `op` until it succeeds or the policy runs out of attempts.
///
/// `op` receives the 1-based attempt number.
///
/// # Errors
/// Returns the error from the final attempt.
pub fn retry<T, E: Display>(
    policy: RetryPolicy,
    name: &str,
    mut op: impl FnMut(u32) -> Result<T, E>,
) -> Result<T, E> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt: u32 = 1;
    loop {
        match op(attempt) {
            Ok(v) => return Ok(v),
            Err(err) if attempt < attempts => {
                warn!(
                    "{name} attempt {attempt} failed: {err}; retrying in {:?}",
                    policy.delay
                );
                sleep(policy.delay);
                attempt = attempt.saturating_add(1);
            }
            Err(err) => {
                error!("{name} failed after {attempts} attempts: {err}");
                return Err(err);
            }
        }
    }
}
