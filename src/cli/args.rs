//! CLI argument definitions using clap derive

use clap::error::ErrorKind;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

pub use crate::config::schema::LogFormat;

/// Brewtagger - Tag Homebrew and App Store apps in Finder
///
/// Applies a color tag to every app in /Applications that was installed
/// by a Homebrew cask or from the Mac App Store.
#[derive(Parser, Debug)]
#[command(name = "brewtagger")]
#[command(author, long_about = None)]
#[command(version = concat!("version ", env!("CARGO_PKG_VERSION")))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `tag`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `tag` run
    #[command(flatten)]
    pub tag: TagArgs,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BREWTAGGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log line format (overrides general.log_format)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Parse process arguments, accepting the single-dash `-tag-color` spelling
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Resolve the command to run, folding top-level tag options into it.
    ///
    /// `tag` is the default. Top-level `--tag-color`/`--dry-run` combine with
    /// an explicit `tag` and are a usage error with any other command.
    pub fn take_command(&mut self) -> Result<Commands, clap::Error> {
        let top = std::mem::take(&mut self.tag);
        match self.command.take() {
            None => Ok(Commands::Tag(top)),
            Some(Commands::Tag(args)) => Ok(Commands::Tag(args.merge(top))),
            Some(_) if top.is_set() => Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "--tag-color and --dry-run only apply to the tag command",
            )),
            Some(command) => Ok(command),
        }
    }
}

/// Rewrite `-tag-color` and `-tag-color=X` to their double-dash form.
/// Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(s) if s == "-tag-color" || s.starts_with("-tag-color=") => {
                    OsString::from(format!("-{s}"))
                }
                _ => arg,
            }
        })
        .collect()
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag cask and App Store apps
    Tag(TagArgs),

    /// Show discovered apps without tagging
    List(ListArgs),

    /// Check that brew, mas and tag are available
    Status,

    /// Show or initialize configuration
    Config(ConfigArgs),

    /// Print a LaunchAgent plist that runs brewtagger periodically
    Launchd(LaunchdArgs),
}

/// Arguments for the tag command
#[derive(Args, Debug, Clone, Default)]
pub struct TagArgs {
    /// Use this color for both cask and App Store apps
    #[arg(long, value_parser = parse_color)]
    pub tag_color: Option<String>,

    /// Log what would be tagged without changing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl TagArgs {
    fn is_set(&self) -> bool {
        self.tag_color.is_some() || self.dry_run
    }

    /// Combine with options given before the subcommand; the subcommand's color wins
    fn merge(self, top: TagArgs) -> Self {
        Self {
            tag_color: self.tag_color.or(top.tag_color),
            dry_run: self.dry_run || top.dry_run,
        }
    }
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for the launchd command
#[derive(Parser, Debug)]
pub struct LaunchdArgs {
    /// Seconds between runs
    #[arg(long, default_value = "3600", value_parser = clap::value_parser!(u32).range(60..))]
    pub interval: u32,
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

/// Validate a tag color name
fn parse_color(s: &str) -> Result<String, String> {
    let color = s.trim();
    if color.is_empty() {
        return Err("tag color must not be empty".to_string());
    }
    if color.contains(',') {
        return Err(format!("tag color must be a single name, got '{s}'"));
    }
    Ok(color.to_string())
}
