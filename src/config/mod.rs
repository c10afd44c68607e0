//! Config module.
//! Provides configuration types, the default config path and XML loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{FileSettings, create_template_config, load_config_file, load_config_from_xml};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "HLPR_RENAME_CONFIG";
