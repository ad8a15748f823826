//! Discovery of package-manager and App Store applications
//!
//! Both passes produce a `DiscoveredApps` set that the reconciler matches
//! against the bundles found on disk.

mod cask;
mod store;

pub use cask::discover_casks;
pub use store::{discover_store_apps, parse_mas_listing};

use crate::config::schema::TaggingConfig;
use crate::error::BrewtaggerResult;
use crate::tools::Toolbox;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use tracing::info;

/// Deduplicated, unordered set of application names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredApps(HashSet<String>);

impl DiscoveredApps {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning whether it was new
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in lexical order, for display
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Serialize for DiscoveredApps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

impl<S: Into<String>> FromIterator<S> for DiscoveredApps {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for DiscoveredApps {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Result of both discovery passes
#[derive(Debug, Clone, Default, Serialize)]
pub struct Discovery {
    pub casks: DiscoveredApps,
    pub store: DiscoveredApps,
}

/// Run cask discovery, then App Store discovery unless disabled
pub async fn discover(tools: &Toolbox, tagging: &TaggingConfig) -> BrewtaggerResult<Discovery> {
    let casks = discover_casks(&tools.brew).await?;

    let store = if tagging.store_apps {
        discover_store_apps(&tools.mas).await?
    } else {
        info!("App Store discovery disabled");
        DiscoveredApps::new()
    };

    Ok(Discovery { casks, store })
}
