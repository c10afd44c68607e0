//! Renaming engine: tokenizing, styling, collision handling and traversal.

mod collision;
mod helpers;
mod safe;
mod style;
mod tokenize;
mod walk;

pub use collision::unique_destination;
pub use safe::safe_rename;
pub use style::{RenameStyle, STYLE_NAMES, WordCase, transform_basename};
pub use tokenize::split_words;
pub use walk::{PlannedRename, RenameOptions, rename_recursive, split_name_ext};
