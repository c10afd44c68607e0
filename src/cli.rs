//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - ROOT and STYLE are optional at the clap level so a missing one is
//!   reported with our own usage text and exit code 1.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::errors::RenameError;
use crate::rename::{RenameStyle, STYLE_NAMES};

/// Usage lines printed when a required argument is missing.
pub fn usage_lines() -> [String; 2] {
    [
        "Usage: hlpr_rename <root> <style> [--dry|-n]".to_string(),
        format!("Styles: {}", STYLE_NAMES.join(", ")),
    ]
}

/// Recursively rename files and directories into one naming style.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Recursively rename files and directories into one naming style"
)]
pub struct Args {
    /// Directory whose contents are renamed (the directory itself keeps its name).
    #[arg(value_name = "ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Target style: title_underscore, snake, kebab, camel, pascal, upper or lower.
    #[arg(value_name = "STYLE")]
    pub style: Option<String>,

    /// Dry-run: report what would be renamed, but do not modify anything.
    #[arg(
        long = "dry",
        short = 'n',
        visible_alias = "dry-run",
        help = "Show what would be renamed, but do not modify files/directories"
    )]
    pub dry: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where hlpr_rename looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a template config file (if none exists), then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Root and style, or a usage error naming what is missing or wrong.
    pub fn target(&self) -> Result<(PathBuf, RenameStyle), RenameError> {
        let root = self
            .root
            .clone()
            .ok_or_else(|| RenameError::Usage("missing required argument <root>".into()))?;
        let style = self
            .style
            .as_deref()
            .ok_or_else(|| RenameError::Usage("missing required argument <style>".into()))?;
        let style = style.parse::<RenameStyle>()?;
        Ok((root, style))
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
