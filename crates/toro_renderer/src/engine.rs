//! Render engines.
//!
//! Every engine calls the pixel writer exactly once for each pixel of the
//! configured image. They differ only in how the image is split into work
//! units and how those units are scheduled:
//!
//! - [`SequentialTile`]: tiles in row-major order on the calling thread
//! - [`ParallelTile`]: tiles dealt round-robin to a fixed set of workers
//! - [`ParallelRowAuto`]: one work item per row, balanced by work stealing
//! - [`ParallelColumnAuto`]: one work item per column, balanced by work stealing
//!
//! Each pixel's color depends only on the camera, the pixel coordinate and
//! the torus list, so all engines produce identical images.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;
use toro_core::{ConfigError, PixelWriter, RenderConfig};

use crate::renderer::render_pixel;
use crate::tile::{generate_tiles, render_tile};
use crate::{Camera, Torus};

/// Errors that stop a render before any pixel is written.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Camera is {camera_width}x{camera_height} but the render is {width}x{height}")]
    CameraMismatch {
        camera_width: u32,
        camera_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// A strategy for scheduling primary rays over the image.
pub trait RenderEngine {
    /// Human-readable engine name used in logs.
    const NAME: &'static str;

    /// Render every pixel of `config`'s image through `writer`.
    fn render<W: PixelWriter + ?Sized>(
        &self,
        config: &RenderConfig,
        writer: &W,
        camera: &Camera,
        toruses: &[Torus],
    ) -> RenderResult<()>;
}

/// Validation, logging and timing shared by every engine.
fn dispatch<F>(
    name: &str,
    config: &RenderConfig,
    camera: &Camera,
    toruses: &[Torus],
    body: F,
) -> RenderResult<()>
where
    F: FnOnce() -> RenderResult<()>,
{
    config.validate()?;
    if camera.width != config.width || camera.height != config.height {
        return Err(RenderError::CameraMismatch {
            camera_width: camera.width,
            camera_height: camera.height,
            width: config.width,
            height: config.height,
        });
    }

    log::info!(
        "{}: rendering {}x{} with {} toruses",
        name,
        config.width,
        config.height,
        toruses.len()
    );
    let start = Instant::now();
    body()?;
    log::info!("{}: finished in {:?}", name, start.elapsed());
    Ok(())
}

/// Build a worker pool sized by the configuration.
fn build_pool(config: &RenderConfig) -> RenderResult<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        // 0 lets rayon pick the available parallelism
        .num_threads(config.threads.unwrap_or(0))
        .thread_name(|i| format!("toro-worker-{}", i))
        .build()?;
    log::debug!("Worker pool with {} threads", pool.current_num_threads());
    Ok(pool)
}

/// Single-threaded baseline: tile by tile, each tile row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialTile;

impl RenderEngine for SequentialTile {
    const NAME: &'static str = "SequentialTile";

    fn render<W: PixelWriter + ?Sized>(
        &self,
        config: &RenderConfig,
        writer: &W,
        camera: &Camera,
        toruses: &[Torus],
    ) -> RenderResult<()> {
        dispatch(Self::NAME, config, camera, toruses, || {
            let tiles = generate_tiles(config.width, config.height, config.tile_size);
            log::debug!("{} tiles of {}px", tiles.len(), config.tile_size);
            for tile in &tiles {
                render_tile(tile, camera, toruses, config.background, writer);
            }
            Ok(())
        })
    }
}

/// Tiles assigned statically: tile `i` goes to worker `i mod n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelTile;

impl RenderEngine for ParallelTile {
    const NAME: &'static str = "ParallelTile";

    fn render<W: PixelWriter + ?Sized>(
        &self,
        config: &RenderConfig,
        writer: &W,
        camera: &Camera,
        toruses: &[Torus],
    ) -> RenderResult<()> {
        dispatch(Self::NAME, config, camera, toruses, || {
            let pool = build_pool(config)?;
            let workers = pool.current_num_threads();
            let tiles = generate_tiles(config.width, config.height, config.tile_size);
            log::debug!("{} tiles over {} workers", tiles.len(), workers);

            let tiles = &tiles;
            pool.scope(|scope| {
                for worker in 0..workers {
                    scope.spawn(move |_| {
                        for tile in tiles.iter().skip(worker).step_by(workers) {
                            render_tile(tile, camera, toruses, config.background, writer);
                        }
                    });
                }
            });
            Ok(())
        })
    }
}

/// Rows handed out on demand by rayon's work-stealing scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelRowAuto;

impl RenderEngine for ParallelRowAuto {
    const NAME: &'static str = "ParallelRowAuto";

    fn render<W: PixelWriter + ?Sized>(
        &self,
        config: &RenderConfig,
        writer: &W,
        camera: &Camera,
        toruses: &[Torus],
    ) -> RenderResult<()> {
        dispatch(Self::NAME, config, camera, toruses, || {
            let pool = build_pool(config)?;
            pool.install(|| {
                (0..config.height).into_par_iter().for_each(|y| {
                    for x in 0..config.width {
                        writer.write_pixel(x, y, render_pixel(camera, toruses, x, y, config.background));
                    }
                });
            });
            Ok(())
        })
    }
}

/// Columns handed out on demand by rayon's work-stealing scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelColumnAuto;

impl RenderEngine for ParallelColumnAuto {
    const NAME: &'static str = "ParallelColumnAuto";

    fn render<W: PixelWriter + ?Sized>(
        &self,
        config: &RenderConfig,
        writer: &W,
        camera: &Camera,
        toruses: &[Torus],
    ) -> RenderResult<()> {
        dispatch(Self::NAME, config, camera, toruses, || {
            let pool = build_pool(config)?;
            pool.install(|| {
                (0..config.width).into_par_iter().for_each(|x| {
                    for y in 0..config.height {
                        writer.write_pixel(x, y, render_pixel(camera, toruses, x, y, config.background));
                    }
                });
            });
            Ok(())
        })
    }
}

/// Engine selector for callers that pick a strategy at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    SequentialTile,
    #[default]
    ParallelTile,
    ParallelRowAuto,
    ParallelColumnAuto,
}

impl EngineKind {
    pub const ALL: [EngineKind; 4] = [
        EngineKind::SequentialTile,
        EngineKind::ParallelTile,
        EngineKind::ParallelRowAuto,
        EngineKind::ParallelColumnAuto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::SequentialTile => SequentialTile::NAME,
            EngineKind::ParallelTile => ParallelTile::NAME,
            EngineKind::ParallelRowAuto => ParallelRowAuto::NAME,
            EngineKind::ParallelColumnAuto => ParallelColumnAuto::NAME,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown engine name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown render engine: {0}")]
pub struct ParseEngineError(pub String);

impl FromStr for EngineKind {
    type Err = ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEngineError(s.to_string()))
    }
}

/// Render with the engine named by `kind`.
pub fn render_with<W: PixelWriter + ?Sized>(
    kind: EngineKind,
    config: &RenderConfig,
    writer: &W,
    camera: &Camera,
    toruses: &[Torus],
) -> RenderResult<()> {
    match kind {
        EngineKind::SequentialTile => SequentialTile.render(config, writer, camera, toruses),
        EngineKind::ParallelTile => ParallelTile.render(config, writer, camera, toruses),
        EngineKind::ParallelRowAuto => ParallelRowAuto.render(config, writer, camera, toruses),
        EngineKind::ParallelColumnAuto => ParallelColumnAuto.render(config, writer, camera, toruses),
    }
}
