//! Tile decomposition for the tile engines.
//!
//! Divides the image into rectangular tiles that can be rendered
//! independently of each other.

use crate::renderer::render_pixel;
use crate::{Camera, Color, PixelWriter, Torus};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of tile's top-left corner
    pub x: u32,
    /// Y coordinate of tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in row-major order
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Generate the tile grid for an image in row-major order.
///
/// Tiles on the right and bottom edges are clipped to the image.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    if tile_size == 0 {
        return tiles;
    }

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, tiles.len()));
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Render every pixel of a tile, scanning it row by row.
pub fn render_tile<W: PixelWriter + ?Sized>(
    tile: &Tile,
    camera: &Camera,
    toruses: &[Torus],
    background: Color,
    writer: &W,
) {
    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let x = tile.x + local_x;
            let y = tile.y + local_y;
            writer.write_pixel(x, y, render_pixel(camera, toruses, x, y, background));
        }
    }
}
