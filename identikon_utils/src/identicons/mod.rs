//! Identicons: 5x5 horizontally symmetric images derived from MD5 digests

mod grid;
mod raster;
mod types;

use crate::digest::get_md5_digest;

pub use grid::{build_grid, filter_odd_cells};
pub use raster::{build_pixel_map, render_image, CELL_SIZE, IMAGE_SIZE};
pub use types::{Color, GridCell, ImageDescriptor, Point, Rectangle};

/// Number of rows and columns
pub const GRID_SIZE: usize = 5;

#[derive(thiserror::Error, Debug)]
pub enum IdenticonError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("encoding error: {0}")]
    EncodingError(#[from] image::ImageError),
}

pub fn hash_input(seed: &[u8]) -> ImageDescriptor {
    let digest = get_md5_digest(seed);
    ImageDescriptor::new(digest.to_vec())
}

/// Uses first three bytes of the digest as RGB components
pub fn pick_color(
    descriptor: ImageDescriptor,
) -> Result<ImageDescriptor, IdenticonError> {
    if descriptor.color.is_some() {
        return Err(IdenticonError::InvalidInput("color is already selected"));
    };
    let color = match descriptor.digest_bytes[..] {
        [red, green, blue, ..] => Color(red, green, blue),
        _ => return Err(IdenticonError::InvalidInput("digest is too short")),
    };
    Ok(ImageDescriptor { color: Some(color), ..descriptor })
}

/// Runs every stage except rendering
pub fn describe_identicon(
    seed: &[u8],
) -> Result<ImageDescriptor, IdenticonError> {
    let descriptor = hash_input(seed);
    let descriptor = pick_color(descriptor)?;
    let descriptor = build_grid(descriptor)?;
    let descriptor = filter_odd_cells(descriptor)?;
    let descriptor = build_pixel_map(descriptor)?;
    Ok(descriptor)
}

pub fn generate_identicon(seed: &[u8]) -> Result<Vec<u8>, IdenticonError> {
    let descriptor = describe_identicon(seed)?;
    render_image(descriptor)
}
