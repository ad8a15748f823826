//! Terminal output helpers
//!
//! Uses `cliclack` framing on an interactive terminal and plain
//! `[OK]`/`[WARN]` lines everywhere else (pipes, launchd, CI).

mod context;
mod output;

pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, outro_warn, remark, section, step_error_detail, step_ok,
    step_ok_detail, step_warn_hint,
};
