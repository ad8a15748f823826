//! Homebrew CLI adapter

use super::runner::CommandRunner;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Parsed output of `brew info --json=v2 --cask <token>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaskInfo {
    #[serde(default)]
    pub casks: Vec<CaskEntry>,
}

/// One cask in a `brew info` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaskEntry {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// An installation artifact. Only `app` stanzas matter here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub app: Vec<AppArtifact>,
}

/// Entry of an `app` stanza
///
/// `app "Foo.app", target: "Bar.app"` serializes as
/// `["Foo.app", {"target": "Bar.app"}]`; the bundle lands in
/// `/Applications` under the target name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AppArtifact {
    Bundle(String),
    Renamed { target: String },
    Other(serde_json::Value),
}

impl Artifact {
    /// Bundle names as installed, honoring `target:` renames
    pub fn installed_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for entry in &self.app {
            match entry {
                AppArtifact::Bundle(name) => names.push(name.clone()),
                AppArtifact::Renamed { target } => {
                    let target = target.rsplit('/').next().unwrap_or(target).to_string();
                    match names.last_mut() {
                        Some(last) => *last = target,
                        None => names.push(target),
                    }
                }
                AppArtifact::Other(_) => {}
            }
        }
        names.retain(|n| !n.is_empty());
        names
    }
}

impl CaskInfo {
    /// Every non-empty app bundle name across all casks in the response
    pub fn app_names(&self) -> Vec<String> {
        self.casks
            .iter()
            .flat_map(|cask| cask.artifacts.iter())
            .flat_map(Artifact::installed_names)
            .collect()
    }
}

/// Homebrew package manager
#[derive(Clone)]
pub struct Homebrew {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Homebrew {
    /// Create a Homebrew adapter invoking `program`
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// List installed cask tokens
    pub async fn list_casks(&self) -> BrewtaggerResult<Vec<String>> {
        let out = self
            .runner
            .output(&self.program, &["list", "--cask"])
            .await?;
        Ok(String::from_utf8_lossy(&out)
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }

    /// Fetch structured metadata for one cask
    pub async fn cask_info(&self, cask: &str) -> BrewtaggerResult<CaskInfo> {
        let out = self
            .runner
            .output(&self.program, &["info", "--json=v2", "--cask", cask])
            .await?;

        let info: CaskInfo =
            serde_json::from_slice(&out).map_err(|e| BrewtaggerError::CaskMetadata {
                cask: cask.to_string(),
                reason: e.to_string(),
            })?;

        debug!(cask, entries = info.casks.len(), "Parsed cask metadata");
        Ok(info)
    }

    /// Check whether a formula is installed
    pub async fn has_formula(&self, formula: &str) -> BrewtaggerResult<bool> {
        let out = self
            .runner
            .output(&self.program, &["list", "--formula"])
            .await?;
        Ok(String::from_utf8_lossy(&out)
            .split_whitespace()
            .any(|installed| installed == formula))
    }

    /// First line of `brew --version`
    pub async fn version(&self) -> BrewtaggerResult<String> {
        let out = self.runner.output(&self.program, &["--version"]).await?;
        Ok(first_line(&out))
    }
}

/// First non-empty line of tool output, trimmed
pub(crate) fn first_line(out: &[u8]) -> String {
    String::from_utf8_lossy(out)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
