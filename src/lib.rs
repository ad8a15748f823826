//! Brewtagger - Finder tags for managed apps
//!
//! Finds the apps in `/Applications` that were installed by Homebrew casks
//! or the Mac App Store and tags them with a color per origin, using the
//! `brew`, `mas` and `tag` command-line tools.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod reconcile;
pub mod tools;
pub mod ui;

pub use error::{BrewtaggerError, BrewtaggerResult};
