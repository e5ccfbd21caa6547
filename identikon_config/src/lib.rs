mod config;
mod loader;

pub use config::Config;
pub use loader::{parse_config, ConfigError};

pub const SOFTWARE_NAME: &str = "Identikon";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");
