//! Finder tag CLI adapter

use super::homebrew::first_line;
use super::runner::CommandRunner;
use crate::error::BrewtaggerResult;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// The `tag` command-line tool
#[derive(Clone)]
pub struct TagTool {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl TagTool {
    /// Create a tag adapter invoking `program`
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Whether `path` already carries `color`.
    ///
    /// Matches the color case-insensitively anywhere in `tag --list` output.
    /// A failed query counts as untagged.
    pub async fn is_tagged(&self, path: &Path, color: &str) -> bool {
        let path_arg = path.to_string_lossy();
        match self
            .runner
            .output(&self.program, &["--list", &*path_arg])
            .await
        {
            Ok(out) => String::from_utf8_lossy(&out)
                .to_lowercase()
                .contains(&color.to_lowercase()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to check tags, assuming untagged");
                false
            }
        }
    }

    /// Add `color` to `path`
    pub async fn add(&self, path: &Path, color: &str) -> BrewtaggerResult<()> {
        let path_arg = path.to_string_lossy();
        self.runner
            .output(&self.program, &["--add", color, &*path_arg])
            .await?;
        Ok(())
    }

    /// Output of `tag --version`
    pub async fn version(&self) -> BrewtaggerResult<String> {
        let out = self.runner.output(&self.program, &["--version"]).await?;
        Ok(first_line(&out))
    }
}
