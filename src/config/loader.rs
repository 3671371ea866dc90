use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;

const CONFIG_DIR: &str = "fanreport";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus an optional warning to surface to the user
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from `path`, or from the default location when `None`.
///
/// Never fails: an absent default file is silent, anything else that goes
/// wrong falls back to defaults with a warning.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match config_path() {
            Some(p) => (p, false),
            None => return defaults(None),
        },
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound && !explicit => return defaults(None),
        Err(e) => {
            return defaults(Some(format!(
                "Could not read config {}: {}. Using defaults.",
                path.display(),
                e
            )));
        }
    };

    match parse_config(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => defaults(Some(format!(
            "Invalid config {}: {}. Using defaults.",
            path.display(),
            e.message()
        ))),
    }
}

fn defaults(warning: Option<String>) -> ConfigResult {
    ConfigResult {
        config: Config::default(),
        warning,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
