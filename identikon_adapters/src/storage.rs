use std::io::{Error as IoError};
use std::path::PathBuf;

use thiserror::Error;

use identikon_config::Config;
use identikon_utils::files::{
    create_directory,
    get_identicon_file_name,
    write_file,
    FileNameError,
    FileSize,
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    InvalidFileName(#[from] FileNameError),

    #[error(transparent)]
    IoError(#[from] IoError),
}

/// Saves identicons to the output directory
#[derive(Clone)]
pub struct IdenticonStorage {
    pub output_dir: PathBuf,
}

impl IdenticonStorage {
    pub fn new(config: &Config) -> Self {
        Self { output_dir: config.output_dir.clone() }
    }

    pub fn init(&self) -> Result<(), StorageError> {
        if !self.output_dir.exists() {
            create_directory(&self.output_dir)?;
            log::info!("created directory {}", self.output_dir.display());
        };
        Ok(())
    }

    /// Writes image to `<output_dir>/<seed>.png`, replacing existing file
    pub fn save(
        &self,
        seed: &str,
        image_data: &[u8],
    ) -> Result<PathBuf, StorageError> {
        let file_name = get_identicon_file_name(seed)?;
        let file_path = self.output_dir.join(file_name);
        write_file(image_data, &file_path)?;
        log::info!(
            "saved {} ({})",
            file_path.display(),
            FileSize::new(image_data.len()),
        );
        Ok(file_path)
    }
}
