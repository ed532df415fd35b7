//! Render configuration.
//!
//! Output dimensions and scheduling knobs are carried in an explicit
//! [`RenderConfig`] value that is handed to every render call.

use crate::Color;
use thiserror::Error;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Errors reported by [`RenderConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Render dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Tile size must be non-zero")]
    ZeroTileSize,

    #[error("Thread count must be non-zero")]
    ZeroThreads,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Edge length of the square tiles used by the tile engines
    pub tile_size: u32,
    /// Worker count for the parallel engines (None = available parallelism)
    pub threads: Option<usize>,
    /// Color written where no torus is hit
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            tile_size: DEFAULT_TILE_SIZE,
            threads: None,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    /// Create a configuration with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::default().with_dimensions(width, height)
    }

    /// Set both axes.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical axis only; the width follows the current aspect ratio.
    pub fn with_height(mut self, height: u32) -> Self {
        let width = if self.height == 0 {
            self.width
        } else {
            (height as f64 * self.aspect_ratio()).round() as u32
        };
        self.width = width.max(1);
        self.height = height;
        self
    }

    /// Set the tile edge length.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the worker count for the parallel engines.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}
