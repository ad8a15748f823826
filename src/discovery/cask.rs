//! Cask discovery
//!
//! Lists installed casks, then queries every cask's metadata in its own
//! task. The join loop is the only writer of the resulting set.

use super::DiscoveredApps;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use crate::tools::Homebrew;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Discover the app bundle names provided by installed casks.
///
/// Fails only if the cask list itself cannot be read. A cask whose
/// metadata query fails or does not parse is logged and skipped. Returns
/// after every metadata query has finished.
pub async fn discover_casks(brew: &Homebrew) -> BrewtaggerResult<DiscoveredApps> {
    let casks = brew
        .list_casks()
        .await
        .map_err(|e| BrewtaggerError::CaskList(Box::new(e)))?;
    info!(count = casks.len(), "Found installed casks");

    let mut tasks = JoinSet::new();
    for cask in casks {
        let brew = brew.clone();
        tasks.spawn(async move {
            let result = brew.cask_info(&cask).await;
            (cask, result)
        });
    }

    let mut apps = DiscoveredApps::new();
    let mut skipped = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((cask, Ok(metadata))) => {
                for app in metadata.app_names() {
                    debug!(cask = %cask, app = %app, "Discovered cask app");
                    apps.insert(app);
                }
            }
            Ok((cask, Err(e))) => {
                skipped += 1;
                warn!(cask = %cask, error = %e, "Skipping cask");
            }
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "Cask metadata task did not complete");
            }
        }
    }

    info!(apps = apps.len(), skipped, "Cask discovery complete");
    Ok(apps)
}
