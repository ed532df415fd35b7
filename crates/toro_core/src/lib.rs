//! Toro Core - Render configuration and image output.
//!
//! This crate provides:
//!
//! - **Configuration**: `RenderConfig`, the explicit dimensions and
//!   scheduling settings passed to every render call
//! - **Image output**: `Color`, `ImageBuffer`, and the `PixelWriter`
//!   interface render engines write through
//!
//! # Example
//!
//! ```
//! use toro_core::{PixelWriter, RenderConfig, SharedImage, Color};
//!
//! let config = RenderConfig::new(640, 480).with_height(240);
//! assert_eq!(config.width, 320);
//!
//! let image = SharedImage::new(config.width, config.height);
//! image.write_pixel(0, 0, Color::ONE);
//! assert_eq!(image.written(), 1);
//! ```

pub mod config;
pub mod image;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, RenderConfig, DEFAULT_TILE_SIZE};
pub use image::{clamp_01, color_to_rgba, Color, ImageBuffer, PixelWriter, SharedImage};
