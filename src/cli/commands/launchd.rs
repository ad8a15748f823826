//! Launchd command - print a LaunchAgent plist for periodic runs
//!
//! Install with:
//! `brewtagger launchd > ~/Library/LaunchAgents/com.github.dewey.brewtagger.plist`

use crate::cli::args::LaunchdArgs;
use crate::error::{BrewtaggerError, BrewtaggerResult};
use std::path::{Path, PathBuf};

const LABEL: &str = "com.github.dewey.brewtagger";

/// Execute the launchd command
pub fn execute(args: LaunchdArgs) -> BrewtaggerResult<()> {
    let program = std::env::current_exe()
        .map_err(|e| BrewtaggerError::io("locating brewtagger executable", e))?;
    let log = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("Library/Logs/brewtagger.log");

    print!("{}", render_plist(&program, &log, args.interval));
    Ok(())
}

fn render_plist(program: &Path, log: &Path, interval: u32) -> String {
    let program = xml_escape(&program.to_string_lossy());
    let log = xml_escape(&log.to_string_lossy());

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>{LABEL}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{program}</string>
        <string>tag</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
    <key>StartInterval</key>
    <integer>{interval}</integer>
    <key>StandardOutPath</key>
    <string>{log}</string>
    <key>StandardErrorPath</key>
    <string>{log}</string>
</dict>
</plist>
"#
    )
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plist_contains_program_and_interval() {
        let plist = render_plist(
            Path::new("/opt/homebrew/bin/brewtagger"),
            Path::new("/Users/me/Library/Logs/brewtagger.log"),
            900,
        );
        assert!(plist.contains("<string>com.github.dewey.brewtagger</string>"));
        assert!(plist.contains("<string>/opt/homebrew/bin/brewtagger</string>"));
        assert!(plist.contains("<string>tag</string>"));
        assert!(plist.contains("<integer>900</integer>"));
    }

    #[test]
    fn paths_are_escaped() {
        assert_eq!(xml_escape("/Apps/R&D <x>"), "/Apps/R&amp;D &lt;x&gt;");
    }
}
