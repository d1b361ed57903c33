//! gen-panosphere - write a UV sphere mesh as a GLB asset
//!
//! Usage:
//!   cargo run -p gen-panosphere
//!   cargo run -p gen-panosphere -- --radius 1 --segments 8 --rings 8 --output tmp/unit.glb
//!
//! With no arguments this writes a radius-10, 64x64 sphere to
//! `public/360_sphere.glb` relative to the working directory.

use anyhow::Result;
use clap::Parser;
use gen_panosphere::{Overrides, SphereConfig, generate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-panosphere")]
#[command(about = "Generate a UV sphere mesh and export it as GLB")]
#[command(version)]
struct Cli {
    /// Sphere radius [default: 10]
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<f32>,

    /// Longitudinal divisions [default: 64]
    #[arg(short, long)]
    segments: Option<u32>,

    /// Latitudinal divisions [default: 64]
    #[arg(short = 'g', long)]
    rings: Option<u32>,

    /// Output GLB path [default: public/360_sphere.glb]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with any of radius, segments, rings, output
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => {
            tracing::info!("Loading config {}", path.display());
            SphereConfig::load(path)?
        }
        None => SphereConfig::default(),
    };

    let config = base.with_overrides(Overrides {
        radius: cli.radius,
        segments: cli.segments,
        rings: cli.rings,
        output: cli.output,
    });

    let report = generate(&config)?;
    tracing::info!(
        "{} vertices, {} triangles, {} bytes",
        report.vertex_count,
        report.triangle_count,
        report.bytes_written
    );

    Ok(())
}
