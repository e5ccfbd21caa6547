use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use log::Level;
use serde_json::{json, Value as JsonValue};

use identikon_adapters::storage::IdenticonStorage;
use identikon_config::Config;
use identikon_utils::identicons::{describe_identicon, generate_identicon};

/// Identicon generator
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Overrides log level from config file
    #[arg(long)]
    pub log_level: Option<Level>,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    Generate(Generate),
    Describe(Describe),
}

/// Generate identicon and save it to output directory
#[derive(Parser)]
pub struct Generate {
    seed: String,
}

impl Generate {
    fn save(&self, config: &Config) -> Result<PathBuf, Error> {
        let storage = IdenticonStorage::new(config);
        storage.init()?;
        let image_data = generate_identicon(self.seed.as_bytes())?;
        let file_path = storage.save(&self.seed, &image_data)?;
        Ok(file_path)
    }

    pub fn execute(&self, config: &Config) -> Result<(), Error> {
        let file_path = self.save(config)?;
        println!("{}", file_path.display());
        Ok(())
    }
}

/// Print digest, color, grid and pixel map of identicon
#[derive(Parser)]
pub struct Describe {
    seed: String,
}

impl Describe {
    fn to_json(&self) -> Result<JsonValue, Error> {
        let descriptor = describe_identicon(self.seed.as_bytes())?;
        let value = json!({
            "seed": self.seed,
            "digest": hex::encode(descriptor.digest_bytes()),
            "color": descriptor.color().map(|color| color.to_hex()),
            "grid": descriptor.grid(),
            "pixel_map": descriptor.pixel_map(),
        });
        Ok(value)
    }

    pub fn execute(&self) -> Result<(), Error> {
        let value = self.to_json()?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}
