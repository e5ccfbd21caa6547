use serde::Serialize;

/// RGB color
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const BLACK: Self = Self(0, 0, 0);

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridCell {
    pub value: u8,
    /// Position in the row-major 5x5 grid
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Axis-aligned rectangle, bottom right corner is exclusive
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }
}

/// Identicon under construction.
///
/// Each pipeline stage takes the descriptor by value and returns it
/// with one more field populated. Populated fields are never rewritten,
/// except the grid, which is narrowed once by the cell filter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageDescriptor {
    pub(super) digest_bytes: Vec<u8>,
    pub(super) color: Option<Color>,
    pub(super) grid: Option<Vec<GridCell>>,
    #[serde(skip)]
    pub(super) is_filtered: bool,
    pub(super) pixel_map: Option<Vec<Rectangle>>,
}

impl ImageDescriptor {
    pub fn new(digest_bytes: Vec<u8>) -> Self {
        Self {
            digest_bytes,
            color: None,
            grid: None,
            is_filtered: false,
            pixel_map: None,
        }
    }

    pub fn digest_bytes(&self) -> &[u8] {
        &self.digest_bytes
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn grid(&self) -> Option<&[GridCell]> {
        self.grid.as_deref()
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    pub fn pixel_map(&self) -> Option<&[Rectangle]> {
        self.pixel_map.as_deref()
    }
}
