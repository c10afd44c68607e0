//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a template on request (`--init-config`), never implicitly.
//!
//! Notes:
//! - A missing file means "use defaults"; a malformed file or unknown field is an error.

use anyhow::{Context, Result, anyhow, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::LogLevel;
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    dry_run: Option<bool>,
}

/// Settings found in a config file; `None` means "not set there".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub dry_run: Option<bool>,
}

const TEMPLATE: &str = "<config>\n  <!-- quiet | normal | info | debug -->\n  <log_level>normal</log_level>\n  <!-- <log_file>/path/to/hlpr_rename.log</log_file> -->\n  <dry_run>false</dry_run>\n</config>\n";

/// Load settings from the default config location.
/// Returns Ok(None) when no config file exists.
pub fn load_config_from_xml() -> Result<Option<FileSettings>> {
    let Some(path) = default_config_path() else {
        debug!("No config location could be determined; using defaults");
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Parse one config file.
pub fn load_config_file(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&content)
        .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<LogLevel>()
                .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?,
        ),
    };
    let log_file = parsed.log_file.as_deref().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    });

    debug!(path = %path.display(), "Loaded config file");
    Ok(FileSettings {
        log_level,
        log_file,
        dry_run: parsed.dry_run,
    })
}

/// Write the template config to `path` (parent 0700, file 0600 on Unix).
/// Refuses to follow symlinked ancestors or to replace an existing file.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    write_config_secure_new_0600(path, TEMPLATE.as_bytes())?;
    info!(path = %path.display(), "Created template config");
    Ok(())
}
