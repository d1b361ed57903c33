//! Sphere generation parameters
//!
//! Values resolve in three layers: built-in defaults, an optional TOML file,
//! then explicit command-line flags.
//!
//! ```toml
//! radius = 10.0
//! segments = 64
//! rings = 64
//! output = "public/360_sphere.glb"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RADIUS: f32 = 10.0;
pub const DEFAULT_SEGMENTS: u32 = 64;
pub const DEFAULT_RINGS: u32 = 64;
pub const DEFAULT_OUTPUT: &str = "public/360_sphere.glb";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Sphere radius; negative values produce an inside-out sphere
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Longitudinal divisions around the Y axis
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Latitudinal bands from pole to pole
    #[serde(default = "default_rings")]
    pub rings: u32,
    /// Destination GLB path
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_radius() -> f32 { DEFAULT_RADIUS }
fn default_segments() -> u32 { DEFAULT_SEGMENTS }
fn default_rings() -> u32 { DEFAULT_RINGS }
fn default_output() -> PathBuf { PathBuf::from(DEFAULT_OUTPUT) }

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            segments: DEFAULT_SEGMENTS,
            rings: DEFAULT_RINGS,
            output: default_output(),
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub radius: Option<f32>,
    pub segments: Option<u32>,
    pub rings: Option<u32>,
    pub output: Option<PathBuf>,
}

impl SphereConfig {
    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid sphere config")
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config file {}", path.display()))
    }

    /// Replace fields with any explicit overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(radius) = overrides.radius {
            self.radius = radius;
        }
        if let Some(segments) = overrides.segments {
            self.segments = segments;
        }
        if let Some(rings) = overrides.rings {
            self.rings = rings;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_asset() {
        let config = SphereConfig::default();
        assert!((config.radius - 10.0).abs() < f32::EPSILON);
        assert_eq!(config.segments, 64);
        assert_eq!(config.rings, 64);
        assert_eq!(config.output, PathBuf::from("public/360_sphere.glb"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SphereConfig::from_toml("").unwrap();
        assert_eq!(config, SphereConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_remaining_defaults() {
        let config = SphereConfig::from_toml("radius = 2.5\nrings = 16\n").unwrap();
        assert!((config.radius - 2.5).abs() < f32::EPSILON);
        assert_eq!(config.rings, 16);
        assert_eq!(config.segments, DEFAULT_SEGMENTS);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(SphereConfig::from_toml("radious = 3.0").is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(SphereConfig::from_toml("segments = -4").is_err());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = SphereConfig::from_toml("radius = 2.0\nsegments = 12\n")
            .unwrap()
            .with_overrides(Overrides {
                radius: Some(-5.0),
                output: Some(PathBuf::from("tmp/unit.glb")),
                ..Default::default()
            });

        assert!((config.radius + 5.0).abs() < f32::EPSILON);
        assert_eq!(config.segments, 12);
        assert_eq!(config.rings, DEFAULT_RINGS);
        assert_eq!(config.output, PathBuf::from("tmp/unit.glb"));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = SphereConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.toml"));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = SphereConfig {
            radius: 1.0,
            segments: 8,
            rings: 8,
            output: PathBuf::from("tmp/unit.glb"),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(SphereConfig::from_toml(&text).unwrap(), config);
    }
}
