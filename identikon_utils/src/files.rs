use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::Error;
use std::io::prelude::*;
use std::path::Path;

pub const IDENTICON_FILE_EXTENSION: &str = "png";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FileNameError {
    #[error("file name is empty")]
    Empty,

    #[error("file name contains forbidden characters")]
    ForbiddenCharacters,

    #[error("file name is reserved")]
    Reserved,
}

/// Returns file name for identicon generated from `seed`
pub fn get_identicon_file_name(seed: &str) -> Result<String, FileNameError> {
    if seed.is_empty() {
        return Err(FileNameError::Empty);
    };
    if seed.contains(['/', '\\', '\0']) {
        return Err(FileNameError::ForbiddenCharacters);
    };
    if seed == "." || seed == ".." {
        return Err(FileNameError::Reserved);
    };
    Ok(format!("{seed}.{IDENTICON_FILE_EXTENSION}"))
}

pub fn create_directory(dir_path: &Path) -> Result<(), Error> {
    create_dir_all(dir_path)
}

pub fn write_file(data: &[u8], file_path: &Path) -> Result<(), Error> {
    let mut file = File::create(file_path)?;
    file.write_all(data)?;
    Ok(())
}

#[derive(Debug)]
pub struct FileSize(usize);

impl FileSize {
    pub fn new(size: usize) -> Self {
        Self(size)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, unit) = match self.0 {
            size if size > 10_000_000 => (size / 1_000_000, "MB"),
            size if size > 10_000 => (size / 1_000, "kB"),
            size => (size, "B"),
        };
        write!(formatter, "{}{}", value, unit)
    }
}
