//! Mac App Store CLI adapter

use super::homebrew::first_line;
use super::runner::CommandRunner;
use crate::error::BrewtaggerResult;
use std::sync::Arc;

/// The `mas` command-line tool
#[derive(Clone)]
pub struct MasCli {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl MasCli {
    /// Create a mas adapter invoking `program`
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Raw `mas list` table
    pub async fn list(&self) -> BrewtaggerResult<String> {
        let out = self.runner.output(&self.program, &["list"]).await?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Output of `mas version`
    pub async fn version(&self) -> BrewtaggerResult<String> {
        let out = self.runner.output(&self.program, &["version"]).await?;
        Ok(first_line(&out))
    }
}
