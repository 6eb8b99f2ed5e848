use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files.
/// Later files override earlier ones.
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG_PATHS";

/// Loads the config files listed in [`CONFIG_PATHS_ENV`], falling back to
/// [`DEFAULT_CONFIG_PATH`].
pub fn load() -> anyhow::Result<Config> {
    load_paths(&config_paths(std::env::var_os(CONFIG_PATHS_ENV).as_deref()))
}

/// Splits a [`CONFIG_PATHS_ENV`] value, ignoring empty entries.
fn config_paths(value: Option<&OsStr>) -> Vec<PathBuf> {
    let paths = value
        .map(|paths| {
            std::env::split_paths(paths)
                .filter(|path| !path.as_os_str().is_empty())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    if paths.is_empty() {
        vec![PathBuf::from(DEFAULT_CONFIG_PATH)]
    } else {
        paths
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submission_delay: Duration,
    pub notification_duration: Duration,
    pub success_message: String,
}

#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub scroll_spy_offset: f64,
    pub navbar_scroll_threshold: f64,
    pub parallax_rate: f64,
    pub typewriter_delay: Duration,
    pub scroll_debounce: Duration,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: f64,
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        assert_eq!(*config.contact.submission_delay, StdDuration::from_secs(2));
        assert_eq!(
            *config.contact.notification_duration,
            StdDuration::from_secs(5)
        );
        assert_eq!(
            *config.page.typewriter_delay,
            StdDuration::from_millis(100)
        );
    }

    #[test]
    fn missing_file() {
        let err = load_paths(&[Path::new("/does/not/exist.toml")]).unwrap_err();
        assert!(err.to_string().contains("/does/not/exist.toml"));
    }

    #[test]
    #[cfg(unix)]
    fn config_paths_fallback() {
        let default = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
        assert_eq!(config_paths(None), default);
        assert_eq!(config_paths(Some(OsStr::new(""))), default);
        assert_eq!(config_paths(Some(OsStr::new("::"))), default);
        assert_eq!(
            config_paths(Some(OsStr::new(":a.toml::b.toml"))),
            [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
    }
}
