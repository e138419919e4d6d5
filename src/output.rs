//! # Terminal Output
//!
//! Formats the human-facing run report printed on stdout: what was written,
//! what was left out, and the operator instructions.
//!
//! Styling follows the `--color` flag. In `auto` mode colors and emoji are
//! dropped when `NO_COLOR` is set, `CLICOLOR=0`, `TERM=dumb`, or stdout is
//! not a terminal (unless `CLICOLOR_FORCE=1`).

use std::env;

use console::style;

use crate::manifest;
use crate::pipeline::RunSummary;

/// Whether colors and emoji are used in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag value (`always`, `never`, `auto`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    fn heading(&self, text: &str) -> String {
        style(text).bold().force_styling(self.use_color).to_string()
    }
}

/// Render the report for a completed run.
pub fn render_summary(config: &OutputConfig, summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} Indexed {} of {} discovered repositories\n",
        config.marker("✅", "[OK]"),
        summary.emitted,
        summary.discovered
    ));

    for path in &summary.written {
        out.push_str(&format!("   wrote {}\n", path.display()));
    }

    for skipped in &summary.skipped_repositories {
        out.push_str(&format!(
            "{} skipped {}: {}\n",
            config.marker("⚠️ ", "[SKIP]"),
            skipped.path.display(),
            skipped.reason
        ));
    }

    if !summary.skipped_entries.is_empty() {
        out.push_str(&format!(
            "{} {} directory entries could not be read\n",
            config.marker("⚠️ ", "[WARN]"),
            summary.skipped_entries.len()
        ));
    }

    out.push('\n');
    out.push_str(&config.heading("---- Instructions for LiveGrep ----"));
    out.push('\n');
    out.push_str(&manifest::instructions(&summary.root));
    out
}
