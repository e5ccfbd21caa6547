use image::{
    codecs::png::PngEncoder,
    ColorType,
    ImageEncoder,
    Rgb,
    RgbImage,
};

use super::{
    types::{Color, ImageDescriptor, Point, Rectangle},
    IdenticonError,
    GRID_SIZE,
};

pub const CELL_SIZE: u32 = 50;
pub const IMAGE_SIZE: u32 = CELL_SIZE * GRID_SIZE as u32;

fn get_cell_rectangle(index: usize) -> Rectangle {
    let column = (index % GRID_SIZE) as u32;
    let row = (index / GRID_SIZE) as u32;
    let horizontal = column * CELL_SIZE;
    let vertical = row * CELL_SIZE;
    Rectangle {
        top_left: Point { x: horizontal, y: vertical },
        bottom_right: Point {
            x: horizontal + CELL_SIZE,
            y: vertical + CELL_SIZE,
        },
    }
}

// White, unless the fill color is white too
fn get_background_color(fill_color: Color) -> Color {
    if fill_color == Color::WHITE {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([color.0, color.1, color.2])
}

/// Maps filtered grid cells to rectangles on the canvas
pub fn build_pixel_map(
    descriptor: ImageDescriptor,
) -> Result<ImageDescriptor, IdenticonError> {
    if descriptor.pixel_map.is_some() {
        return Err(IdenticonError::InvalidInput("pixel map is already built"));
    };
    if !descriptor.is_filtered {
        return Err(IdenticonError::InvalidInput("grid is not filtered"));
    };
    let pixel_map: Vec<_> = match descriptor.grid {
        Some(ref grid) => grid.iter()
            .map(|cell| get_cell_rectangle(cell.index))
            .collect(),
        None => return Err(IdenticonError::InvalidInput("grid is not built")),
    };
    Ok(ImageDescriptor { pixel_map: Some(pixel_map), ..descriptor })
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, IdenticonError> {
    let mut output: Vec<u8> = vec![];
    PngEncoder::new(&mut output).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )?;
    Ok(output)
}

/// Draws the pixel map and encodes the canvas as PNG
pub fn render_image(
    descriptor: ImageDescriptor,
) -> Result<Vec<u8>, IdenticonError> {
    let color = descriptor.color
        .ok_or(IdenticonError::InvalidInput("color is not selected"))?;
    let pixel_map = descriptor.pixel_map
        .ok_or(IdenticonError::InvalidInput("pixel map is not built"))?;
    let background = to_pixel(get_background_color(color));
    let fill = to_pixel(color);
    let mut canvas = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, background);
    for rectangle in pixel_map {
        if rectangle.bottom_right.x > IMAGE_SIZE ||
            rectangle.bottom_right.y > IMAGE_SIZE
        {
            return Err(IdenticonError::InvalidInput("rectangle is out of bounds"));
        };
        for y in rectangle.top_left.y..rectangle.bottom_right.y {
            for x in rectangle.top_left.x..rectangle.bottom_right.x {
                canvas.put_pixel(x, y, fill);
            };
        };
    };
    encode_png(&canvas)
}

#[cfg(test)]
mod tests {
    use image::{load_from_memory_with_format, ImageFormat};
    use super::*;
    use super::super::{
        grid::{build_grid, filter_odd_cells},
        pick_color,
    };

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn filtered_descriptor(digest_bytes: Vec<u8>) -> ImageDescriptor {
        let descriptor = ImageDescriptor::new(digest_bytes);
        let descriptor = pick_color(descriptor).unwrap();
        let descriptor = build_grid(descriptor).unwrap();
        filter_odd_cells(descriptor).unwrap()
    }

    #[test]
    fn test_get_cell_rectangle() {
        let rectangle = get_cell_rectangle(7);
        assert_eq!(rectangle.top_left, Point { x: 100, y: 50 });
        assert_eq!(rectangle.bottom_right, Point { x: 150, y: 100 });
        let rectangle = get_cell_rectangle(24);
        assert_eq!(rectangle.top_left, Point { x: 200, y: 200 });
        assert_eq!(rectangle.bottom_right, Point { x: 250, y: 250 });
    }

    #[test]
    fn test_get_background_color() {
        assert_eq!(get_background_color(Color(48, 238, 109)), Color::WHITE);
        assert_eq!(get_background_color(Color::WHITE), Color::BLACK);
    }

    #[test]
    fn test_build_pixel_map() {
        let descriptor = filtered_descriptor(vec![
            48, 238, 109, 168, 21, 246, 115, 213,
            231, 212, 98, 100, 49, 45, 131, 240,
        ]);
        let descriptor = build_pixel_map(descriptor).unwrap();
        let pixel_map = descriptor.pixel_map().unwrap();
        assert_eq!(pixel_map.len(), descriptor.grid().unwrap().len());
        assert_eq!(pixel_map.len(), 12);
        assert_eq!(pixel_map[0].top_left, Point { x: 0, y: 0 });
        assert_eq!(pixel_map[5].top_left, Point { x: 100, y: 50 });
        assert_eq!(pixel_map[5].bottom_right, Point { x: 150, y: 100 });
        assert_eq!(pixel_map[11].top_left, Point { x: 200, y: 150 });
        for rectangle in pixel_map {
            assert_eq!(rectangle.width(), CELL_SIZE);
            assert_eq!(rectangle.height(), CELL_SIZE);
        };
    }

    #[test]
    fn test_build_pixel_map_unfiltered_grid() {
        let descriptor = ImageDescriptor::new(vec![0; 16]);
        let descriptor = build_grid(descriptor).unwrap();
        let result = build_pixel_map(descriptor);
        assert!(matches!(
            result,
            Err(IdenticonError::InvalidInput("grid is not filtered")),
        ));
    }

    #[test]
    fn test_render_image() {
        // Only the first row survives filtering
        let digest_bytes = vec![
            10, 20, 30, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1,
        ];
        let descriptor = filtered_descriptor(digest_bytes);
        let descriptor = build_pixel_map(descriptor).unwrap();
        let output = render_image(descriptor).unwrap();
        assert_eq!(output[..8], PNG_SIGNATURE);

        let image = load_from_memory_with_format(&output, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(image.dimensions(), (250, 250));
        assert_eq!(image.get_pixel(0, 0), &Rgb([10, 20, 30]));
        assert_eq!(image.get_pixel(249, 49), &Rgb([10, 20, 30]));
        assert_eq!(image.get_pixel(125, 25), &Rgb([10, 20, 30]));
        assert_eq!(image.get_pixel(0, 50), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(249, 249), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_render_image_empty_pixel_map() {
        let descriptor = filtered_descriptor(vec![1; 16]);
        let descriptor = build_pixel_map(descriptor).unwrap();
        assert_eq!(descriptor.pixel_map().unwrap().len(), 0);
        let output = render_image(descriptor).unwrap();

        let image = load_from_memory_with_format(&output, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert!(image.pixels().all(|pixel| *pixel == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_render_image_without_pixel_map() {
        let descriptor = filtered_descriptor(vec![0; 16]);
        let result = render_image(descriptor);
        assert!(matches!(
            result,
            Err(IdenticonError::InvalidInput("pixel map is not built")),
        ));
    }
}
