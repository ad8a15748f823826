//! Status command - check system health and dependencies

use crate::config::Config;
use crate::error::BrewtaggerResult;
use crate::reconcile::list_bundles;
use crate::tools::Toolbox;
use crate::ui::{self, UiContext};

/// Execute the status command
pub async fn execute(config: &Config, tools: &Toolbox) -> BrewtaggerResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Brewtagger System Status");

    let mut all_ok = true;

    ui::section(&ctx, "Platform:");
    if std::env::consts::OS == "macos" {
        ui::step_ok(&ctx, "macOS");
    } else {
        ui::step_warn_hint(
            &ctx,
            &format!("Running on {}", std::env::consts::OS),
            "Finder tags only exist on macOS",
        );
        all_ok = false;
    }

    ui::section(&ctx, "Tools:");
    all_ok &= report_tool(
        &ctx,
        "brew",
        tools.brew.version().await,
        "Install from https://brew.sh",
    );
    all_ok &= report_tool(&ctx, "tag", tools.tag.version().await, "brew install tag");
    if config.tagging.store_apps {
        all_ok &= report_tool(&ctx, "mas", tools.mas.version().await, "brew install mas");
    } else {
        ui::remark(&ctx, "mas not required (tagging.store_apps = false)");
    }

    ui::section(&ctx, "Applications:");
    let dir = &config.tagging.applications_dir;
    match list_bundles(dir).await {
        Ok(bundles) => ui::step_ok_detail(
            &ctx,
            &dir.display().to_string(),
            &format!("{} bundles", bundles.len()),
        ),
        Err(e) => {
            ui::step_error_detail(&ctx, &dir.display().to_string(), &e.to_string());
            all_ok = false;
        }
    }
    ui::key_value(&ctx, "cask color", &config.tagging.cask_color);
    ui::key_value(&ctx, "store color", &config.tagging.store_color);

    if all_ok {
        ui::outro_success(&ctx, "All checks passed");
    } else {
        ui::outro_warn(&ctx, "Some checks failed - see above for details");
    }

    Ok(())
}

fn report_tool(
    ctx: &UiContext,
    name: &str,
    version: BrewtaggerResult<String>,
    install_hint: &str,
) -> bool {
    match version {
        Ok(version) => {
            ui::step_ok_detail(ctx, name, &version);
            true
        }
        Err(e) => {
            ui::step_warn_hint(ctx, &format!("{} unavailable ({})", name, e), install_hint);
            false
        }
    }
}
