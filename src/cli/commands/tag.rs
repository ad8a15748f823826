//! Tag command - discover managed apps and tag them in Finder

use crate::cli::args::TagArgs;
use crate::config::schema::TaggingConfig;
use crate::config::Config;
use crate::discovery;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use crate::reconcile::{ReconcileReport, Reconciler};
use crate::tools::Toolbox;
use crate::ui::{self, UiContext};
use tracing::{debug, info};

/// Execute the tag command
pub async fn execute(args: TagArgs, config: &Config, tools: &Toolbox) -> BrewtaggerResult<()> {
    let tagging = effective_tagging(&args, &config.tagging);
    let report = tag_apps(&tagging, tools, args.dry_run).await?;
    print_summary(&report);
    Ok(())
}

/// Apply `--tag-color` to the configured colors
fn effective_tagging(args: &TagArgs, tagging: &TaggingConfig) -> TaggingConfig {
    match &args.tag_color {
        Some(color) => tagging.clone().with_single_color(color.clone()),
        None => tagging.clone(),
    }
}

/// Discover, then reconcile. Any fatal failure aborts before tagging.
pub async fn tag_apps(
    tagging: &TaggingConfig,
    tools: &Toolbox,
    dry_run: bool,
) -> BrewtaggerResult<ReconcileReport> {
    if tagging.store_apps {
        ensure_mas_installed(tools).await?;
    }

    info!(
        cask_color = %tagging.cask_color,
        store_color = %tagging.store_color,
        dry_run,
        "Starting"
    );

    let found = discovery::discover(tools, tagging).await?;
    for app in found.casks.sorted() {
        info!(app, "Cask app found");
    }
    for app in found.store.sorted() {
        info!(app, "App Store app found");
    }

    Reconciler::new(&tools.tag, tagging)
        .with_dry_run(dry_run)
        .run(&found)
        .await
}

async fn ensure_mas_installed(tools: &Toolbox) -> BrewtaggerResult<()> {
    if tools.brew.has_formula("mas").await? {
        debug!("mas is installed");
        Ok(())
    } else {
        Err(BrewtaggerError::MasNotInstalled)
    }
}

fn print_summary(report: &ReconcileReport) {
    let ctx = UiContext::detect();
    let verb = if report.dry_run { "would tag" } else { "tagged" };
    let message = format!(
        "{} {}, {} already tagged, {} unmatched",
        report.tagged, verb, report.already_tagged, report.unmatched
    );

    if report.failed > 0 {
        ui::outro_warn(&ctx, &format!("{message}, {} failed", report.failed));
    } else {
        ui::outro_success(&ctx, &message);
    }
}
