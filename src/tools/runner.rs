//! Subprocess execution abstraction
//!
//! Every external tool (brew, mas, tag) is invoked through a
//! `CommandRunner`, so discovery and tagging can be exercised without
//! spawning real processes.

use crate::error::{BrewtaggerError, BrewtaggerResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs an external program and captures its standard output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return stdout.
    ///
    /// A non-zero exit status is an error carrying the captured stderr.
    async fn output(&self, program: &str, args: &[&str]) -> BrewtaggerResult<Vec<u8>>;
}

/// Format a command line for logs and error messages
pub(crate) fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runner backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn output(&self, program: &str, args: &[&str]) -> BrewtaggerResult<Vec<u8>> {
        let command = command_line(program, args);
        debug!(command = %command, "Executing");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => BrewtaggerError::ToolNotFound {
                    name: program.to_string(),
                },
                _ => BrewtaggerError::command_failed(command.clone(), e),
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(BrewtaggerError::command_exec(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ))
        }
    }
}
