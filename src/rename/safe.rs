//! Collision-safe rename.
//! - Case-only renames go through a scratch name so case-insensitive filesystems see a change.
//! - Every other rename targets a collision-free path (see `unique_destination`).
//! - On Unix, best-effort fsync of the parent directory after the rename.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, warn};

use crate::errors::Result;

use super::collision::{build_name_with_suffix, is_occupied, unique_destination};
use super::helpers::fs_error;

static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Rename `old` to `new` without clobbering anything.
///
/// Returns the path the entry ended up at: `new`, or a numbered sibling of
/// it when `new` was already taken. On failure of the second half of a
/// case-only rename the entry is moved back to `old` (best-effort) and the
/// original error is returned.
pub fn safe_rename(old: &Path, new: &Path) -> Result<PathBuf> {
    if is_case_only_change(old, new) && (!is_occupied(new) || same_entry(old, new)) {
        rename_via_scratch(old, new)?;
        return Ok(new.to_path_buf());
    }

    let dest = unique_destination(new);
    if dest != new {
        warn!(requested = %new.display(), actual = %dest.display(), "Rename target taken; using numbered name");
    }
    rename_and_sync(old, &dest)?;
    Ok(dest)
}

fn is_case_only_change(old: &Path, new: &Path) -> bool {
    let old = old.to_string_lossy();
    let new = new.to_string_lossy();
    old != new && old.to_lowercase() == new.to_lowercase()
}

/// True when both paths resolve to the same filesystem entry, which is how a
/// case variant shows up on a case-insensitive filesystem.
#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_entry(_a: &Path, _b: &Path) -> bool {
    // Windows filesystems are case-insensitive by default.
    true
}

/// Sibling of `new` used as the intermediate hop of a case-only rename.
/// The original name is shortened when the marker would not fit in one filename.
fn scratch_path(new: &Path) -> PathBuf {
    let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
    let base = new.file_name().unwrap_or_else(|| OsStr::new("entry"));
    let marker = format!(".__hlpr_rename_{}_{}__", std::process::id(), seq);
    new.with_file_name(build_name_with_suffix(base, None, &marker))
}

fn rename_via_scratch(old: &Path, new: &Path) -> Result<()> {
    rename_via_scratch_with(old, new, |from, to| fs::rename(from, to))
}

fn rename_via_scratch_with<F>(old: &Path, new: &Path, rename: F) -> Result<()>
where
    F: Fn(&Path, &Path) -> io::Result<()>,
{
    let scratch = scratch_path(new);
    debug!(from = %old.display(), scratch = %scratch.display(), "Case-only rename via scratch name");
    rename(old, &scratch).map_err(fs_error("rename to scratch name", old))?;

    if let Err(e) = rename(&scratch, new) {
        error!(scratch = %scratch.display(), original = %old.display(), error = %e, "Case-only rename failed; restoring original name");
        let _ = rename(&scratch, old);
        return Err(fs_error("rename from scratch name", new)(e));
    }
    sync_parent(new);
    Ok(())
}

fn rename_and_sync(old: &Path, new: &Path) -> Result<()> {
    fs::rename(old, new).map_err(fs_error("rename", old))?;
    sync_parent(new);
    Ok(())
}

#[cfg(unix)]
fn sync_parent(path: &Path) {
    // Ignore fsync errors to avoid turning a successful rename into a failure.
    if let Some(parent) = path.parent()
        && let Ok(dir) = fs::File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) {}
