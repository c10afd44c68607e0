use hlpr_rename::config::{CONFIG_ENV, LogLevel, load_config_from_xml};
use hlpr_rename::default_config_path;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

struct EnvGuard(Option<std::ffi::OsString>);

impl EnvGuard {
    fn set(value: &std::path::Path) -> Self {
        let prev = std::env::var_os(CONFIG_ENV);
        unsafe { std::env::set_var(CONFIG_ENV, value) };
        EnvGuard(prev)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.0.take() {
            Some(v) => unsafe { std::env::set_var(CONFIG_ENV, v) },
            None => unsafe { std::env::remove_var(CONFIG_ENV) },
        }
    }
}

#[test]
#[serial]
fn env_var_overrides_default_path() {
    let td = tempdir().unwrap();
    let explicit = td.path().join("custom.xml");
    let _g = EnvGuard::set(&explicit);

    assert_eq!(default_config_path(), Some(explicit));
}

#[test]
#[serial]
fn missing_file_means_defaults() {
    let td = tempdir().unwrap();
    let _g = EnvGuard::set(&td.path().join("absent.xml"));

    assert!(load_config_from_xml().unwrap().is_none());
}

#[test]
#[serial]
fn env_config_file_is_loaded() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(
        &path,
        "<config>\n  <log_level>debug</log_level>\n  <log_file>/tmp/hlpr.log</log_file>\n  <dry_run>true</dry_run>\n</config>\n",
    )
    .unwrap();
    let _g = EnvGuard::set(&path);

    let settings = load_config_from_xml().unwrap().expect("config should load");
    assert_eq!(settings.log_level, Some(LogLevel::Debug));
    assert_eq!(settings.log_file.as_deref(), Some(std::path::Path::new("/tmp/hlpr.log")));
    assert_eq!(settings.dry_run, Some(true));
}

#[test]
#[serial]
fn invalid_env_config_is_an_error() {
    let td = tempdir().unwrap();
    let path = td.path().join("config.xml");
    fs::write(&path, "<config><log_level>loud</log_level></config>").unwrap();
    let _g = EnvGuard::set(&path);

    let err = load_config_from_xml().unwrap_err();
    assert!(err.to_string().contains("invalid log level"), "{err:#}");
}
