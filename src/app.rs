//! Application orchestrator.
//! Loads/merges config, initializes logging, validates arguments and runs the
//! renaming engine, then prints the report.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error};

use hlpr_rename::cli::{Args, usage_lines};
use hlpr_rename::config::{create_template_config, load_config_from_xml};
use hlpr_rename::output as out;
use hlpr_rename::{Config, RenameError, RenameOptions, default_config_path, rename_recursive};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        return print_config();
    }
    if args.init_config {
        let path = default_config_path()
            .ok_or_else(|| anyhow!("Could not determine a config location; set HLPR_RENAME_CONFIG"))?;
        create_template_config(&path)?;
        out::print_success(&format!("Template config written to: {}", path.display()));
        return Ok(());
    }

    // Argument problems are reported before anything touches the filesystem.
    let (root, style) = match args.target() {
        Ok(t) => t,
        Err(e) => {
            for line in usage_lines() {
                eprintln!("{line}");
            }
            return Err(e.into());
        }
    };

    // Config file values first, CLI flags win.
    let mut cfg = Config::default();
    if let Some(file) = load_config_from_xml()? {
        cfg.apply_file(file);
    }
    args.apply_overrides(&mut cfg);

    // Keep the guard alive until the run is over so file logs get flushed.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("Failed to initialize logging")?;
    debug!(?args, ?cfg, "Starting hlpr_rename");

    let options = RenameOptions { dry_run: cfg.dry_run };
    match rename_recursive(&root, style, &options) {
        Ok(renames) => {
            for line in out::format_report(&renames, options.dry_run) {
                out::print_user(&line);
            }
            Ok(())
        }
        Err(e) => {
            log_failure(&e);
            Err(e.into())
        }
    }
}

fn print_config() -> Result<()> {
    if let Some(explicit) =
        std::env::var_os(hlpr_rename::config::CONFIG_ENV).filter(|v| !v.is_empty())
    {
        out::print_info(&format!(
            "Using HLPR_RENAME_CONFIG (explicit):\n  {}",
            std::path::Path::new(&explicit).display()
        ));
        return Ok(());
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default hlpr_rename config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
        }
        None => out::print_warn("Could not determine a default config path."),
    }
    Ok(())
}

fn log_failure(e: &RenameError) {
    let code = e.code();
    match e {
        RenameError::RootNotFound(path) | RenameError::RootNotDirectory(path) => {
            error!(code, path = %path.display(), "Rename failed")
        }
        RenameError::Filesystem { op, path, source, .. } => {
            error!(code, op, path = %path.display(), kind = ?source.kind(), "Rename failed")
        }
        _ => error!(code, error = %e, "Rename failed"),
    }
}
