//! Configuration for report text, value limits and output locations
//!
//! Loaded from `~/.config/fanreport/config.toml` unless `--config` names
//! another file. Every field has a default, so a missing file is not an error.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, parse_config};
pub use types::{Config, OutputConfig, ReportConfig};
