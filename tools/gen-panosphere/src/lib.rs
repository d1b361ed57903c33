//! Procedural sphere asset generation
//!
//! Builds a UV sphere and writes it as a binary glTF (GLB) file, creating the
//! destination directory on demand.
//!
//! ```no_run
//! use gen_panosphere::{SphereConfig, generate};
//!
//! let report = generate(&SphereConfig::default()).unwrap();
//! assert!(report.output.ends_with("360_sphere.glb"));
//! ```

pub mod config;
pub mod export;
pub mod geometry;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub use config::{Overrides, SphereConfig};
pub use export::{encode_glb, export_glb};
pub use geometry::{MeshData, SphereError, build_uv_sphere};

/// Summary of one generated asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub bytes_written: u64,
}

/// Generate the sphere described by `config` and write it to `config.output`
pub fn generate(config: &SphereConfig) -> Result<GenerateReport> {
    if let Some(dir) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    tracing::info!(
        "Building sphere: radius={}, segments={}, rings={}",
        config.radius,
        config.segments,
        config.rings
    );
    let mesh = build_uv_sphere(config.radius, config.segments, config.rings)?;
    let bytes_written = export_glb(&mesh, &config.output)?;

    println!("Sphere GLB generated at: {}", config.output.display());

    Ok(GenerateReport {
        output: config.output.clone(),
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        bytes_written,
    })
}
