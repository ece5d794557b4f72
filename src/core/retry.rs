// src/core/retry.rs — Bounded retry for shell commands
//
// The copy into the final location is retried immediately (or after a fixed
// delay) until it exits 0 or the attempt budget is spent. Running out of
// attempts is not an error: the caller carries on and the outcome records it.

use std::time::Duration;

use serde::Serialize;

use crate::infra::config::FinalizeConfig;
use crate::infra::shell::ShellRunner;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, first one included.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&FinalizeConfig::default())
    }
}

impl From<&FinalizeConfig> for RetryPolicy {
    fn from(config: &FinalizeConfig) -> Self {
        Self {
            max_attempts: config.max_copy_attempts.max(1),
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetryOutcome {
    pub attempts: u32,
    pub succeeded: bool,
    pub last_exit_code: i32,
}

/// Run `command` until it succeeds or the policy is exhausted.
/// `on_failure` sees the 1-based number of each failed attempt.
pub async fn run_with_retry(
    shell: &dyn ShellRunner,
    command: &str,
    policy: &RetryPolicy,
    mut on_failure: impl FnMut(u32),
) -> RetryOutcome {
    let mut last_exit_code = -1;

    for attempt in 1..=policy.max_attempts {
        last_exit_code = match shell.run(command).await {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(attempt, "Could not start `{}`: {}", command, e);
                -1
            }
        };

        if last_exit_code == 0 {
            return RetryOutcome {
                attempts: attempt,
                succeeded: true,
                last_exit_code,
            };
        }

        tracing::warn!(
            attempt,
            max_attempts = policy.max_attempts,
            exit_code = last_exit_code,
            "Command failed: {}",
            command
        );
        on_failure(attempt);

        if attempt < policy.max_attempts && !policy.delay.is_zero() {
            tokio::time::sleep(policy.delay).await;
        }
    }

    RetryOutcome {
        attempts: policy.max_attempts,
        succeeded: false,
        last_exit_code,
    }
}
