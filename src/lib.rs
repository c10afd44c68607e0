//! Core library for `hlpr_rename`.
//!
//! Renames every file and directory below a root into one naming style
//! (`title_underscore`, `snake`, `kebab`, `camel`, `pascal`, `upper`,
//! `lower`), bottom-up, without overwriting existing entries. The binary is a
//! thin wrapper; callers can use [`rename_recursive`] directly.
//!
//! ```no_run
//! use hlpr_rename::{RenameOptions, RenameStyle, rename_recursive};
//!
//! let plan = rename_recursive(
//!     std::path::Path::new("./notes"),
//!     RenameStyle::Kebab,
//!     &RenameOptions { dry_run: true },
//! )?;
//! for step in &plan {
//!     println!("{} -> {}", step.from.display(), step.to.display());
//! }
//! # Ok::<(), hlpr_rename::RenameError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod rename;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::RenameError;
pub use rename::{
    PlannedRename, RenameOptions, RenameStyle, rename_recursive, safe_rename, split_words,
    transform_basename, unique_destination,
};
