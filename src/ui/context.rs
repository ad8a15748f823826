//! UI context for choosing between framed and plain output

use std::io::IsTerminal;

/// UI context that determines output behavior
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is an interactive terminal
    interactive: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        Self {
            interactive: Self::detect_interactive(),
        }
    }

    /// Create a non-interactive context (launchd, pipes, tests)
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// Check if we should use cliclack framing
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }

    /// Framed output only on a real terminal outside CI
    fn detect_interactive() -> bool {
        if !std::io::stdout().is_terminal() {
            return false;
        }

        if std::env::var_os("CI").is_some() {
            return false;
        }

        !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_context() {
        let ctx = UiContext::non_interactive();
        assert!(!ctx.use_fancy_output());
    }
}
