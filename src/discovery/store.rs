//! App Store discovery via `mas list`

use super::DiscoveredApps;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use crate::tools::MasCli;
use tracing::{debug, info};

/// Extract app names from a `mas list` table.
///
/// Rows look like `1365531024  1Blocker  (6.1.3)`: the second
/// whitespace-separated token is taken as the name. Rows with fewer than
/// two tokens are skipped.
pub fn parse_mas_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

/// Discover App Store app names. Fails if `mas list` fails.
pub async fn discover_store_apps(mas: &MasCli) -> BrewtaggerResult<DiscoveredApps> {
    let listing = mas
        .list()
        .await
        .map_err(|e| BrewtaggerError::StoreList(Box::new(e)))?;

    let mut apps = DiscoveredApps::new();
    for name in parse_mas_listing(&listing) {
        debug!(app = %name, "Discovered App Store app");
        apps.insert(name);
    }

    info!(apps = apps.len(), "App Store discovery complete");
    Ok(apps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{fail, ok, FakeRunner};
    use std::sync::Arc;

    #[test]
    fn second_column_is_the_name() {
        let names = parse_mas_listing("1365531024  1Blocker               (6.1.3)\n");
        assert_eq!(names, vec!["1Blocker"]);
    }

    #[test]
    fn short_and_blank_lines_are_skipped() {
        let listing = "\n409183694\n   \n497799835  Xcode  (16.0)\n";
        assert_eq!(parse_mas_listing(listing), vec!["Xcode"]);
    }

    #[test]
    fn multi_word_names_keep_first_word() {
        let names = parse_mas_listing("1295203466  Microsoft Remote Desktop  (10.9.10)");
        assert_eq!(names, vec!["Microsoft"]);
    }

    #[tokio::test]
    async fn discover_collects_names() {
        let mas = MasCli::new(
            Arc::new(FakeRunner::new(|_, _| {
                ok("1365531024  1Blocker  (6.1.3)\n497799835  Xcode  (16.0)\n")
            })),
            "mas",
        );
        let apps = discover_store_apps(&mas).await.unwrap();
        assert_eq!(apps.sorted(), vec!["1Blocker", "Xcode"]);
    }

    #[tokio::test]
    async fn listing_failure_is_fatal() {
        let mas = MasCli::new(Arc::new(FakeRunner::new(fail)), "mas");
        let err = discover_store_apps(&mas).await.unwrap_err();
        assert!(matches!(err, BrewtaggerError::StoreList(_)));
    }
}
