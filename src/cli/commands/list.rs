//! List command - show discovered apps without tagging

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::discovery::{self, DiscoveredApps, Discovery};
use crate::error::BrewtaggerResult;
use crate::tools::Toolbox;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config, tools: &Toolbox) -> BrewtaggerResult<()> {
    let found = discovery::discover(tools, &config.tagging).await?;

    match args.format {
        OutputFormat::Table => print_table(&found, config),
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Plain => print_plain(&found),
    }

    Ok(())
}

fn print_table(found: &Discovery, config: &Config) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Discovered apps");

    print_group(
        &format!("Cask apps ({})", config.tagging.cask_color),
        &found.casks,
    );
    if config.tagging.store_apps {
        print_group(
            &format!("App Store apps ({})", config.tagging.store_color),
            &found.store,
        );
    } else {
        println!();
        println!("{}", style("App Store discovery disabled").dim());
    }
}

fn print_group(title: &str, apps: &DiscoveredApps) {
    println!();
    println!("{}", style(title).bold());
    if apps.is_empty() {
        println!("  {}", style("none").dim());
    }
    for app in apps.sorted() {
        println!("  {}", app);
    }
    println!("{} app(s)", apps.len());
}

fn print_json(found: &Discovery) -> BrewtaggerResult<()> {
    let json = serde_json::to_string_pretty(found)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(found: &Discovery) {
    for app in found.casks.sorted() {
        println!("cask\t{}", app);
    }
    for app in found.store.sorted() {
        println!("store\t{}", app);
    }
}
