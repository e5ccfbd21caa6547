use super::{
    types::{GridCell, ImageDescriptor},
    IdenticonError,
    GRID_SIZE,
};

// Each row is built from 3 bytes and mirrored to 5 columns
const ROW_SEED_LENGTH: usize = 3;

// [a, b, c] -> [a, b, c, b, a]
fn mirror_row(chunk: &[u8]) -> [u8; GRID_SIZE] {
    [chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]
}

/// Expands digest bytes into a horizontally symmetric 5x5 grid
pub fn build_grid(
    descriptor: ImageDescriptor,
) -> Result<ImageDescriptor, IdenticonError> {
    if descriptor.grid.is_some() {
        return Err(IdenticonError::InvalidInput("grid is already built"));
    };
    if descriptor.digest_bytes.len() < ROW_SEED_LENGTH * GRID_SIZE {
        return Err(IdenticonError::InvalidInput("digest is too short"));
    };
    let grid: Vec<_> = descriptor.digest_bytes
        .chunks_exact(ROW_SEED_LENGTH)
        .take(GRID_SIZE)
        .flat_map(mirror_row)
        .enumerate()
        .map(|(index, value)| GridCell { value, index })
        .collect();
    log::debug!("grid built: {} cells", grid.len());
    Ok(ImageDescriptor { grid: Some(grid), ..descriptor })
}

/// Drops cells with odd values, indices are preserved
pub fn filter_odd_cells(
    mut descriptor: ImageDescriptor,
) -> Result<ImageDescriptor, IdenticonError> {
    if descriptor.is_filtered {
        return Err(IdenticonError::InvalidInput("grid is already filtered"));
    };
    let grid = descriptor.grid.take()
        .ok_or(IdenticonError::InvalidInput("grid is not built"))?;
    let filtered: Vec<_> = grid.into_iter()
        .filter(|cell| cell.value % 2 == 0)
        .collect();
    log::debug!("{} cells left after filtering", filtered.len());
    Ok(ImageDescriptor {
        grid: Some(filtered),
        is_filtered: true,
        ..descriptor
    })
}
