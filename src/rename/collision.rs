//! Collision resolution for rename targets.
//!
//! Policy:
//! - A free target is used as-is.
//! - An occupied target becomes "<stem>_<n><ext>" for the smallest free n >= 1.
//!
//! Notes:
//! - Probing is sequential and only reflects the filesystem at call time; a
//!   concurrent writer can still take the name before the rename happens.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// True if anything (including a dangling symlink) exists at `path`.
pub(crate) fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Return `candidate` if free, else the first free "<stem>_<n><ext>" sibling.
///
/// Examples:
/// - "File_Name.md" -> "File_Name_1.md", "File_Name_2.md", ...
/// - ".env" -> ".env_1"
/// - "archive.tar.gz" -> "archive.tar_1.gz"
pub fn unique_destination(candidate: &Path) -> PathBuf {
    if !is_occupied(candidate) {
        return candidate.to_path_buf();
    }

    let dir = candidate.parent().unwrap_or_else(|| Path::new(""));
    let stem: OsString = candidate
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    let ext: Option<&OsStr> = candidate.extension();

    let mut n: u64 = 1;
    loop {
        let name = build_name_with_suffix(&stem, ext, &format!("_{n}"));
        let next = dir.join(name);
        if !is_occupied(&next) {
            return next;
        }
        if n == 3 {
            trace!(target_path = %candidate.display(), "collision: several numbered variants taken, still searching");
        }
        n += 1;
    }
}

// Conservative filename limits (bytes, platform-specific and approximate).
#[cfg(windows)]
pub(crate) const MAX_FILENAME_LEN: usize = 240;
#[cfg(not(windows))]
pub(crate) const MAX_FILENAME_LEN: usize = 255;

#[cfg(unix)]
fn name_len_units(s: &OsStr) -> usize {
    use std::os::unix::ffi::OsStrExt;
    s.as_bytes().len()
}

#[cfg(not(unix))]
fn name_len_units(s: &OsStr) -> usize {
    s.to_string_lossy().len()
}

/// Join `stem + suffix + ["." + ext]`, shortening the stem when the result
/// would not fit in a single filename.
pub(crate) fn build_name_with_suffix(stem: &OsStr, ext: Option<&OsStr>, suffix: &str) -> OsString {
    let mut overhead = suffix.len();
    if let Some(e) = ext {
        overhead += 1 + name_len_units(e);
    }

    let mut stem_os = stem.to_os_string();
    if name_len_units(stem) + overhead > MAX_FILENAME_LEN {
        let budget = MAX_FILENAME_LEN.saturating_sub(overhead).max(1);
        let lossy = stem.to_string_lossy();
        let mut acc = String::new();
        for ch in lossy.chars() {
            if acc.len() + ch.len_utf8() > budget {
                break;
            }
            acc.push(ch);
        }
        if acc.is_empty() {
            acc.push('f');
        }
        stem_os = OsString::from(acc);
    }

    let mut name = stem_os;
    name.push(suffix);
    if let Some(e) = ext {
        name.push(".");
        name.push(e);
    }
    name
}
