use std::io::ErrorKind;
use std::path::PathBuf;

use super::config::Config;

const DEFAULT_CONFIG_PATH: &str = "identikon.yaml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("invalid yaml data: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("{0}")]
    InvalidValue(&'static str),
}

struct EnvConfig {
    config_path: String,
    output_dir: Option<PathBuf>,
}

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    let output_dir = std::env::var("IDENTIKON_OUTPUT_DIR").ok()
        .map(PathBuf::from);
    EnvConfig {
        config_path,
        output_dir,
    }
}

fn parse_config_yaml(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    if config_yaml.trim().is_empty() {
        return Ok((Config::default(), vec![]));
    };
    let mut warnings = vec![];
    let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
    let config: Config = serde_ignored::deserialize(deserializer, |path| {
        warnings.push(format!("unknown config parameter: {path}"));
    })?;
    Ok((config, warnings))
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue("output_dir must not be empty"));
    };
    if config.output_dir.exists() && !config.output_dir.is_dir() {
        return Err(ConfigError::InvalidValue("output_dir is not a directory"));
    };
    Ok(())
}

/// Loads configuration and returns it along with a list of warnings
pub fn parse_config() -> Result<(Config, Vec<String>), ConfigError> {
    let env = parse_env();
    let (mut config, mut warnings) =
        match std::fs::read_to_string(&env.config_path) {
            Ok(config_yaml) => {
                let (mut config, warnings) = parse_config_yaml(&config_yaml)?;
                config.config_path = Some(env.config_path);
                (config, warnings)
            },
            Err(error) if error.kind() == ErrorKind::NotFound => {
                let warning = format!(
                    "config file {} not found, using defaults",
                    env.config_path,
                );
                (Config::default(), vec![warning])
            },
            Err(error) => return Err(error.into()),
        };

    // Set parameters from environment
    if let Some(output_dir) = env.output_dir {
        config.output_dir = output_dir;
    };

    validate_config(&config)?;
    if !config.output_dir.exists() {
        warnings.push(format!(
            "output directory {} will be created",
            config.output_dir.display(),
        ));
    };
    Ok((config, warnings))
}
