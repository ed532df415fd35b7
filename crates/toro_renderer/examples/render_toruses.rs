//! Render a few interlocking toruses and save the result as a PNG.
//!
//! Run with: cargo run --release --example render_toruses -- [engine] [output.png]
//!
//! `engine` is one of SequentialTile, ParallelTile, ParallelRowAuto,
//! ParallelColumnAuto (default ParallelTile).

use std::env;
use std::f64::consts::FRAC_PI_2;
use std::time::Instant;

use anyhow::{Context, Result};
use toro_renderer::{
    render_with, Camera, Color, DAffine3, DVec3, EngineKind, RenderConfig, SharedImage, Torus,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting torus render");

    let args: Vec<String> = env::args().collect();
    let engine: EngineKind = match args.get(1) {
        Some(name) => name.parse()?,
        None => EngineKind::default(),
    };
    let output = args.get(2).map(String::as_str).unwrap_or("toruses.png");

    let config = RenderConfig::default()
        .with_height(540)
        .with_background(Color::new(0.08, 0.09, 0.12));
    let camera = Camera::from_config(&config, DVec3::new(0.0, 0.0, -12.0), 50.0);
    let toruses = build_scene()?;

    println!(
        "Rendering {}x{} with {} ({} toruses)...",
        config.width,
        config.height,
        engine,
        toruses.len()
    );

    let start = Instant::now();
    let image = SharedImage::new(config.width, config.height);
    render_with(engine, &config, &image, &camera, &toruses)?;
    println!("Rendered in {:?}", start.elapsed());

    let buffer = image.into_image();
    let png = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba())
        .context("image buffer size does not match its dimensions")?;
    png.save(output)
        .with_context(|| format!("failed to save {}", output))?;
    println!("Saved to {}", output);

    Ok(())
}

fn build_scene() -> Result<Vec<Torus>> {
    let toruses = vec![
        // Facing the camera
        Torus::try_new(
            2.0,
            0.5,
            DAffine3::from_rotation_x(FRAC_PI_2),
            Color::new(0.9, 0.3, 0.2),
        )?,
        // Linked through the first one
        Torus::try_new(
            2.0,
            0.5,
            DAffine3::from_translation(DVec3::new(2.0, 0.0, 0.0)),
            Color::new(0.2, 0.7, 0.9),
        )?,
        // Tilted and squashed in the background
        Torus::try_new(
            1.2,
            0.3,
            DAffine3::from_scale_rotation_translation(
                DVec3::new(1.0, 1.5, 1.0),
                toro_renderer::DQuat::from_rotation_z(0.8),
                DVec3::new(-3.0, 2.0, 4.0),
            ),
            Color::new(0.9, 0.8, 0.3),
        )?,
    ];
    Ok(toruses)
}
