//! I/O error enrichment.
//!
//! Wraps `io::Error` into `RenameError::Filesystem` with the operation, the
//! path and a platform-aware hint, while keeping the original error (and its
//! `ErrorKind`) as the source.
//!
//! Usage:
//!   fs::rename(a, b).map_err(fs_error("rename", a))?;

use std::io;
use std::path::Path;

use crate::errors::RenameError;

/// Format a human-friendly message with op/path plus platform-aware hints.
/// The io error text itself is left to the error's source chain.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}'", op, path.display());

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" - permission denied; check ownership and write permissions.");
                }
                libc::EXDEV => {
                    msg.push_str(" - cross-filesystem; rename cannot move between volumes.");
                }
                libc::EBUSY => {
                    msg.push_str(" - resource busy; ensure no other process is using the entry.");
                }
                libc::ENOENT => {
                    msg.push_str(" - path not found; the tree may have changed during the run.");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str(" - destination already exists.");
                }
                libc::EROFS => {
                    msg.push_str(" - read-only filesystem; cannot rename here.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" - filename or path too long.");
                }
                libc::ENOTDIR => {
                    msg.push_str(" - a path component is not a directory.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" - access denied; check permissions."), // ERROR_ACCESS_DENIED
                17 => msg.push_str(" - not same device; rename cannot move between volumes."), // ERROR_NOT_SAME_DEVICE
                32 => msg.push_str(" - sharing violation; entry is in use."), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str(" - path not found; the tree may have changed during the run."),
                80 | 183 => msg.push_str(" - destination already exists."), // ERROR_FILE_EXISTS / ALREADY_EXISTS
                206 => msg.push_str(" - filename or path too long (MAX_PATH exceeded)."),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" - permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" - path not found; the tree may have changed during the run.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" - destination already exists.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts
/// `io::Error` -> `RenameError::Filesystem`.
pub(crate) fn fs_error<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> RenameError + 'a {
    move |e: io::Error| RenameError::Filesystem {
        op,
        path: path.to_path_buf(),
        message: build_message(op, path, &e),
        source: e,
    }
}

/// Convert a directory-walk failure, keeping the path walkdir reports when it has one.
pub(crate) fn walk_error(dir: &Path, e: walkdir::Error) -> RenameError {
    let path = e.path().unwrap_or(dir).to_path_buf();
    fs_error("read directory", &path)(io::Error::from(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_kind_and_names_the_path() {
        let err = fs_error("rename", Path::new("/nowhere/a.txt"))(io::Error::from(
            io::ErrorKind::NotFound,
        ));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert_eq!(err.code(), "filesystem");
        let msg = err.to_string();
        assert!(msg.starts_with("rename '/nowhere/a.txt'"), "{msg}");
        assert!(msg.contains("path not found"), "{msg}");
    }

    #[cfg(unix)]
    #[test]
    fn raw_os_codes_get_hints() {
        let err = fs_error("rename", Path::new("a"))(io::Error::from_raw_os_error(libc::EXDEV));
        let msg = err.to_string();
        assert!(msg.contains("cross-filesystem"), "{msg}");
        assert!(msg.contains(&format!("[os code: {}]", libc::EXDEV)), "{msg}");
    }

    #[cfg(unix)]
    #[test]
    fn io_text_appears_once_in_the_error_chain() {
        let io_err = io::Error::from_raw_os_error(libc::ENOENT);
        let io_text = io_err.to_string();
        let err = fs_error("rename", Path::new("/nowhere/a.txt"))(io_err);
        assert!(!err.to_string().contains(&io_text), "{err}");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches(io_text.as_str()).count(), 1, "{chain}");
        assert!(chain.contains("path not found"), "{chain}");
    }
}
