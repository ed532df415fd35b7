//! Toro Renderer - analytic torus ray casting.
//!
//! One primary ray per pixel is intersected exactly against every torus by
//! solving a quartic with the Durand–Kerner method, and the nearest hit is
//! flat shaded with the torus color. Four interchangeable engines decide how
//! the image is split up and scheduled across worker threads.

mod camera;
mod engine;
mod renderer;
mod tile;
mod torus;

pub use camera::Camera;
pub use engine::{
    render_with, EngineKind, ParallelColumnAuto, ParallelRowAuto, ParallelTile, ParseEngineError,
    RenderEngine, RenderError, RenderResult, SequentialTile,
};
pub use renderer::{nearest_hit, render_pixel, render_ray};
pub use tile::{generate_tiles, render_tile, Tile};
pub use torus::{Torus, TorusError, TorusHit, TorusResult};

/// Re-export the image and configuration types engines work with
pub use toro_core::{Color, ImageBuffer, PixelWriter, RenderConfig, SharedImage};

/// Re-export DVec3 and common math types from toro_math
pub use toro_math::{DAffine3, DMat4, DQuat, DVec3, Ray};
