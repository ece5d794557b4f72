// src/infra/shell.rs — Shell command execution
//
// Commands run through `sh -c` with inherited stdout/stderr so listings and
// copy errors land on the console next to the workflow banners.

use async_trait::async_trait;
use tokio::process::Command;

/// Runs a shell command line and reports its exit code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShellRunner: Send + Sync {
    /// Exit code of the command; `-1` if it was terminated by a signal.
    async fn run(&self, command: &str) -> anyhow::Result<i32>;
}

/// Quote `arg` as one word for `sh -c`. Plain path-like words pass through.
pub fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=+,@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// `sh -c` backed runner.
#[derive(Debug, Default, Clone)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShellRunner for SystemShell {
    async fn run(&self, command: &str) -> anyhow::Result<i32> {
        tracing::debug!("Running: sh -c {:?}", command);

        let status = Command::new("sh").args(["-c", command]).status().await?;

        Ok(status.code().unwrap_or(-1))
    }
}
