//! Naming styles and the basename transformer.
//! - RenameStyle is a closed set; each style is a separator plus a word casing rule.
//! - transform_basename only touches extension-free names (leading dot allowed).

use std::fmt;
use std::str::FromStr;

use crate::errors::RenameError;

use super::tokenize::split_words;

/// Accepted style names, in display order.
pub const STYLE_NAMES: [&str; 7] = [
    "title_underscore",
    "snake",
    "kebab",
    "camel",
    "pascal",
    "upper",
    "lower",
];

/// Target naming convention, chosen once per traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenameStyle {
    /// `File_Name`
    #[default]
    TitleUnderscore,
    /// `file_name`
    Snake,
    /// `file-name`
    Kebab,
    /// `fileName`
    Camel,
    /// `FileName`
    Pascal,
    /// `FILE_NAME`
    Upper,
    /// `file_name`, lowercasing every character
    Lower,
}

/// How each word is cased before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Lower,
    Upper,
    /// First char uppercase, rest lowercase.
    Capitalized,
    /// First word lowercase, the rest capitalized.
    Camel,
}

impl RenameStyle {
    pub const ALL: [RenameStyle; 7] = [
        RenameStyle::TitleUnderscore,
        RenameStyle::Snake,
        RenameStyle::Kebab,
        RenameStyle::Camel,
        RenameStyle::Pascal,
        RenameStyle::Upper,
        RenameStyle::Lower,
    ];

    /// Parse a style name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title_underscore" => Some(RenameStyle::TitleUnderscore),
            "snake" => Some(RenameStyle::Snake),
            "kebab" => Some(RenameStyle::Kebab),
            "camel" => Some(RenameStyle::Camel),
            "pascal" => Some(RenameStyle::Pascal),
            "upper" => Some(RenameStyle::Upper),
            "lower" => Some(RenameStyle::Lower),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenameStyle::TitleUnderscore => "title_underscore",
            RenameStyle::Snake => "snake",
            RenameStyle::Kebab => "kebab",
            RenameStyle::Camel => "camel",
            RenameStyle::Pascal => "pascal",
            RenameStyle::Upper => "upper",
            RenameStyle::Lower => "lower",
        }
    }

    pub const fn separator(self) -> &'static str {
        match self {
            RenameStyle::TitleUnderscore
            | RenameStyle::Snake
            | RenameStyle::Upper
            | RenameStyle::Lower => "_",
            RenameStyle::Kebab => "-",
            RenameStyle::Camel | RenameStyle::Pascal => "",
        }
    }

    pub const fn word_case(self) -> WordCase {
        match self {
            RenameStyle::TitleUnderscore | RenameStyle::Pascal => WordCase::Capitalized,
            RenameStyle::Snake | RenameStyle::Kebab | RenameStyle::Lower => WordCase::Lower,
            RenameStyle::Upper => WordCase::Upper,
            RenameStyle::Camel => WordCase::Camel,
        }
    }

    /// Case and join already-tokenized words.
    pub fn join_words<S: AsRef<str>>(self, words: &[S]) -> String {
        let case = self.word_case();
        words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let w = w.as_ref();
                match case {
                    WordCase::Lower => w.to_lowercase(),
                    WordCase::Upper => w.to_uppercase(),
                    WordCase::Capitalized => capitalize(w),
                    WordCase::Camel if i == 0 => w.to_lowercase(),
                    WordCase::Camel => capitalize(w),
                }
            })
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

impl fmt::Display for RenameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenameStyle {
    type Err = RenameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RenameError::UnknownStyle(s.to_string()))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Transform an extension-free basename into `style`.
///
/// The input comes back unchanged when it is empty, when it contains a `.`
/// anywhere but the first position (callers split the extension off first),
/// or when it has no words. A leading `.` is kept in front of the result.
pub fn transform_basename(basename: &str, style: RenameStyle) -> String {
    if basename.is_empty() {
        return String::new();
    }
    let (leading_dot, core) = match basename.strip_prefix('.') {
        Some(rest) => (".", rest),
        None => ("", basename),
    };
    if core.contains('.') {
        return basename.to_string();
    }

    let words = split_words(core);
    if words.is_empty() {
        return basename.to_string();
    }
    format!("{leading_dot}{}", style.join_words(&words))
}
