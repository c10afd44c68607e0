//! User-facing printing.
//! Colored prefixes are used only when the stream is a TTY; the rename report
//! itself goes through `print_user` so it stays plain and scriptable.

use owo_colors::OwoColorize;

use crate::rename::PlannedRename;

fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Render the rename report: a summary line, then one `  from → to` line per entry.
pub fn format_report(renames: &[PlannedRename], dry_run: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(renames.len() + 1);
    if dry_run {
        lines.push(format!("Dry run - would rename {} items:", renames.len()));
    } else {
        lines.push(format!("Renamed {} items:", renames.len()));
    }
    lines.extend(
        renames
            .iter()
            .map(|r| format!("  {} → {}", r.from.display(), r.to.display())),
    );
    lines
}
