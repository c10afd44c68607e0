//! Recursive, bottom-up renaming of a directory tree.
//!
//! Per directory: files first, then for each subdirectory its whole subtree,
//! then the subdirectory itself. A directory is only renamed after everything
//! inside it is done, so every path handed to the filesystem is still valid.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{RenameError, Result};

use super::helpers::{fs_error, walk_error};
use super::safe::safe_rename;
use super::style::{RenameStyle, transform_basename};

/// One planned (dry run) or performed rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub from: PathBuf,
    /// Requested destination. In a real run the entry may have landed on a
    /// numbered sibling of this path if the name was already taken.
    pub to: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Report what would change without touching the filesystem.
    pub dry_run: bool,
}

/// Split a file name into its core and its extension.
///
/// Ignoring one leading dot, the extension starts at the first remaining
/// dot, so compound extensions stay whole:
/// - "Deep File.testdata.js" -> ("Deep File", ".testdata.js")
/// - ".gitignore" -> (".gitignore", "")
/// - ".env.local" -> (".env", ".local")
pub fn split_name_ext(file_name: &str) -> (&str, &str) {
    let skip = usize::from(file_name.starts_with('.'));
    match file_name[skip..].find('.') {
        Some(i) => file_name.split_at(skip + i),
        None => (file_name, ""),
    }
}

/// Rename every file and directory below `root` into `style`.
///
/// `root` itself keeps its name. Returns the renames in the order they were
/// planned or performed; an entry always comes before the rename of any
/// directory containing it. The first failure aborts the traversal.
pub fn rename_recursive(
    root: &Path,
    style: RenameStyle,
    options: &RenameOptions,
) -> Result<Vec<PlannedRename>> {
    let meta = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RenameError::RootNotFound(root.to_path_buf()));
        }
        Err(e) => return Err(fs_error("stat root", root)(e)),
    };
    if !meta.is_dir() {
        return Err(RenameError::RootNotDirectory(root.to_path_buf()));
    }

    info!(root = %root.display(), %style, dry_run = options.dry_run, "Starting rename");
    let mut walker = Walker {
        style,
        options: *options,
        performed: Vec::new(),
    };
    walker.walk(root)?;
    info!(root = %root.display(), count = walker.performed.len(), dry_run = options.dry_run, "Rename finished");
    Ok(walker.performed)
}

struct Walker {
    style: RenameStyle,
    options: RenameOptions,
    performed: Vec<PlannedRename>,
}

impl Walker {
    fn walk(&mut self, dir: &Path) -> Result<()> {
        for entry in list_entries(dir)? {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = utf8_name(&entry) else { continue };
            let (core, ext) = split_name_ext(name);
            let new_name = format!("{}{ext}", transform_basename(core, self.style));
            if new_name != name {
                self.apply(entry.path(), dir.join(new_name))?;
            }
        }

        // The listing above is stale once files were renamed.
        for entry in list_entries(dir)? {
            if !entry.file_type().is_dir() {
                continue;
            }
            self.walk(entry.path())?;
            let Some(name) = utf8_name(&entry) else { continue };
            let new_name = transform_basename(name, self.style);
            if new_name != name {
                self.apply(entry.path(), dir.join(new_name))?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, from: &Path, to: PathBuf) -> Result<()> {
        if self.options.dry_run {
            debug!(from = %from.display(), to = %to.display(), "dry-run: would rename");
        } else {
            safe_rename(from, &to)?;
            debug!(from = %from.display(), to = %to.display(), "Renamed");
        }
        self.performed.push(PlannedRename {
            from: from.to_path_buf(),
            to,
        });
        Ok(())
    }
}

/// Fresh listing of the direct children of `dir`, sorted by name (symlinks not followed).
fn list_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| walk_error(dir, e)))
        .collect()
}

fn utf8_name(entry: &DirEntry) -> Option<&str> {
    let name = entry.file_name().to_str();
    if name.is_none() {
        warn!(path = %entry.path().display(), "Skipping entry with a non-UTF-8 name");
    }
    name
}
