//! Image storage and the pixel-writer interface the render engines emit into.

use std::sync::OnceLock;

use toro_math::DVec3;

/// RGB color with components in [0, 1].
pub type Color = DVec3;

/// Sink for rendered pixels.
///
/// Engines call `write_pixel` exactly once per pixel, possibly from several
/// worker threads at once, so implementations must be `Sync`.
pub trait PixelWriter: Sync {
    fn write_pixel(&self, x: u32, y: u32, color: Color);
}

impl<F> PixelWriter for F
where
    F: Fn(u32, u32, Color) + Sync,
{
    fn write_pixel(&self, x: u32, y: u32, color: Color) {
        self(x, y, color)
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)).round() as u8;
    let g = (255.0 * clamp_01(color.y)).round() as u8;
    let b = (255.0 * clamp_01(color.z)).round() as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgba(*c)).collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Image that can be written concurrently, each pixel at most once.
///
/// A second write to the same pixel is ignored and logged.
pub struct SharedImage {
    width: u32,
    height: u32,
    pixels: Vec<OnceLock<Color>>,
}

impl SharedImage {
    /// Create an image with no pixels written.
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = std::iter::repeat_with(OnceLock::new)
            .take(width as usize * height as usize)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels written so far.
    pub fn written(&self) -> usize {
        self.pixels.iter().filter(|p| p.get().is_some()).count()
    }

    /// Freeze into an [`ImageBuffer`]. Pixels never written become black.
    pub fn into_image(self) -> ImageBuffer {
        let missing = self.pixels.len() - self.written();
        if missing > 0 {
            log::warn!("{} of {} pixels were never written", missing, self.pixels.len());
        }
        ImageBuffer {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .into_iter()
                .map(|p| p.into_inner().unwrap_or(Color::ZERO))
                .collect(),
        }
    }
}

impl PixelWriter for SharedImage {
    fn write_pixel(&self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            log::error!("Pixel ({}, {}) outside {}x{} image", x, y, self.width, self.height);
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        if self.pixels[index].set(color).is_err() {
            log::warn!("Pixel ({}, {}) written more than once", x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::new(0.0, 0.5, 1.0)), [0, 128, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(-1.0, 2.0, 0.2)), [0, 255, 51, 255]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(3, 2, Color::ONE);
        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.to_rgba().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_shared_image_write_once() {
        let _ = env_logger::builder().is_test(true).try_init();

        let image = SharedImage::new(2, 2);
        image.write_pixel(1, 0, Color::X);
        image.write_pixel(1, 0, Color::Y);
        image.write_pixel(5, 5, Color::Z);
        assert_eq!(image.written(), 1);

        let buffer = image.into_image();
        assert_eq!(buffer.get(1, 0), Color::X);
        assert_eq!(buffer.get(0, 1), Color::ZERO);
    }

    #[test]
    fn test_closure_writer() {
        let count = AtomicUsize::new(0);
        let writer = |_x: u32, _y: u32, _c: Color| {
            count.fetch_add(1, Ordering::Relaxed);
        };
        writer.write_pixel(0, 0, Color::ZERO);
        writer.write_pixel(1, 0, Color::ZERO);
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }
}
