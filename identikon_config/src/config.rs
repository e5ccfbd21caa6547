use std::path::PathBuf;

use log::{Level as LogLevel};
use serde::Deserialize;

fn default_log_level() -> LogLevel { LogLevel::Info }

fn default_output_dir() -> PathBuf { PathBuf::from("images") }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub config_path: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Directory where generated identicons are saved
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            output_dir: default_output_dir(),
        }
    }
}
