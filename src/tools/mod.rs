//! External tool adapters
//!
//! All real work happens in three command-line tools:
//! - `brew`: installed casks and their metadata
//! - `mas`: installed App Store apps
//! - `tag`: Finder tag queries and mutation

pub mod homebrew;
pub mod mas;
mod runner;
pub mod tag;
#[cfg(test)]
pub(crate) mod testing;

pub use homebrew::{CaskInfo, Homebrew};
pub use mas::MasCli;
pub use runner::{CommandRunner, SystemRunner};
pub use tag::TagTool;

use crate::config::schema::ToolsConfig;
use std::sync::Arc;

/// The three adapters, sharing one runner
#[derive(Clone)]
pub struct Toolbox {
    pub brew: Homebrew,
    pub mas: MasCli,
    pub tag: TagTool,
}

impl Toolbox {
    /// Build adapters for the configured programs
    pub fn new(runner: Arc<dyn CommandRunner>, config: &ToolsConfig) -> Self {
        Self {
            brew: Homebrew::new(runner.clone(), config.brew.clone()),
            mas: MasCli::new(runner.clone(), config.mas.clone()),
            tag: TagTool::new(runner, config.tag.clone()),
        }
    }

    /// Adapters backed by real subprocesses
    pub fn system(config: &ToolsConfig) -> Self {
        Self::new(Arc::new(SystemRunner::new()), config)
    }
}
