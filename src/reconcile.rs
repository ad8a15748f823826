//! Tag reconciliation
//!
//! Walks the applications directory and makes sure every bundle that a
//! discovery pass claimed carries that origin's color. Tags are only ever
//! added, never removed or replaced.

use crate::config::schema::TaggingConfig;
use crate::discovery::Discovery;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use crate::tools::TagTool;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

const BUNDLE_SUFFIX: &str = ".app";

/// An application bundle found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Full path to the bundle
    pub path: PathBuf,
    /// File name, e.g. `Firefox.app`
    pub name: String,
    /// File name without the `.app` suffix, e.g. `Firefox`
    pub stem: String,
}

impl Bundle {
    /// Build a bundle from a path whose file name ends in `.app`
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let stem = name.strip_suffix(BUNDLE_SUFFIX)?.to_string();
        Some(Self { path, name, stem })
    }
}

/// List `*.app` entries of `dir`, sorted by name
pub async fn list_bundles(dir: &Path) -> BrewtaggerResult<Vec<Bundle>> {
    let read_err = |source| BrewtaggerError::ApplicationsDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_err)?;
    let mut bundles = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        if let Some(bundle) = Bundle::from_path(entry.path()) {
            bundles.push(bundle);
        }
    }

    bundles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(bundles)
}

/// Outcome counters of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Tags added (or that would be added in a dry run)
    pub tagged: usize,
    /// Bundle/color pairs that already carried the tag
    pub already_tagged: usize,
    /// Tag additions that failed
    pub failed: usize,
    /// Bundles matching neither discovered set
    pub unmatched: usize,
    pub dry_run: bool,
}

/// Applies origin colors to discovered bundles
pub struct Reconciler<'a> {
    tags: &'a TagTool,
    config: &'a TaggingConfig,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler for the configured directory and colors
    pub fn new(tags: &'a TagTool, config: &'a TaggingConfig) -> Self {
        Self {
            tags,
            config,
            dry_run: false,
        }
    }

    /// Only log what would be tagged
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Colors a bundle should carry, without duplicates
    fn wanted_colors(&self, bundle: &Bundle, discovered: &Discovery) -> Vec<&'a str> {
        let mut colors: Vec<&'a str> = Vec::with_capacity(2);
        if discovered.casks.contains(&bundle.name) {
            colors.push(&self.config.cask_color);
        }
        let store_color = self.config.store_color.as_str();
        if discovered.store.contains(&bundle.stem) && !colors.contains(&store_color) {
            colors.push(store_color);
        }
        colors
    }

    /// Tag every discovered bundle in the applications directory.
    ///
    /// Fails only if the directory cannot be listed; per-bundle tag
    /// failures are logged and counted.
    pub async fn run(&self, discovered: &Discovery) -> BrewtaggerResult<ReconcileReport> {
        let bundles = list_bundles(&self.config.applications_dir).await?;
        info!(
            dir = %self.config.applications_dir.display(),
            count = bundles.len(),
            "Scanning application bundles"
        );

        let mut report = ReconcileReport {
            dry_run: self.dry_run,
            ..Default::default()
        };

        for bundle in &bundles {
            let colors = self.wanted_colors(bundle, discovered);
            if colors.is_empty() {
                debug!(app = %bundle.name, "Not managed by Homebrew or the App Store");
                report.unmatched += 1;
                continue;
            }

            for color in colors {
                self.apply(bundle, color, &mut report).await;
            }
        }

        info!(
            tagged = report.tagged,
            already_tagged = report.already_tagged,
            failed = report.failed,
            unmatched = report.unmatched,
            dry_run = self.dry_run,
            "Reconciliation complete"
        );
        Ok(report)
    }

    async fn apply(&self, bundle: &Bundle, color: &str, report: &mut ReconcileReport) {
        let path = bundle.path.display();

        if self.tags.is_tagged(&bundle.path, color).await {
            info!(path = %path, color, "Skipping, already tagged");
            report.already_tagged += 1;
            return;
        }

        if self.dry_run {
            info!(path = %path, color, "Would tag");
            report.tagged += 1;
            return;
        }

        info!(path = %path, color, "Tagging");
        match self.tags.add(&bundle.path, color).await {
            Ok(()) => report.tagged += 1,
            Err(e) => {
                warn!(path = %path, color, error = %e, "Failed to tag");
                report.failed += 1;
            }
        }
    }
}
