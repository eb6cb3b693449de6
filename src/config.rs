//! Runtime configuration of the sketch editor.
//!
//! The `const` values below are the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SketchError;
use crate::sampler::{CubicScheme, SAMPLES_PER_SEGMENT};

/// Half-width of the square a click must land in to pick an existing point (curve space).
pub const PICK_TOLERANCE: f32 = 0.01;
/// Default window size in pixels.
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 640;

/// Which evaluated curve is handed to the renderer. Both are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    Linear,
    #[default]
    Cubic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Samples per curve segment, at least 2
    pub samples_per_segment: usize,
    pub curve_mode: CurveMode,
    pub cubic_scheme: CubicScheme,
    /// Pick radius for grabbing an existing control point
    pub pick_tolerance: f32,
    /// Insert a mirrored handle after each completed cubic segment
    pub smooth_joins: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            curve_mode: CurveMode::default(),
            cubic_scheme: CubicScheme::default(),
            pick_tolerance: PICK_TOLERANCE,
            smooth_joins: true,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

impl SketchConfig {
    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), SketchError> {
        if self.samples_per_segment < 2 {
            return Err(SketchError::TooFewSamples(self.samples_per_segment));
        }
        if !(self.pick_tolerance.is_finite() && self.pick_tolerance > 0.0) {
            return Err(SketchError::InvalidTolerance(self.pick_tolerance));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SketchError::EmptyViewport {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SketchError> {
        let config: SketchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load options from a TOML file. Falls back to the defaults if the file is missing or invalid.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("sketch config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("invalid sketch config {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no sketch config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SketchError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("sketch config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = SketchConfig::default();
        assert_eq!(config.samples_per_segment, 100);
        assert_eq!(config.curve_mode, CurveMode::Cubic);
        assert_eq!(config.cubic_scheme, CubicScheme::Reference);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = SketchConfig::from_toml_str(
            r#"
            samples_per_segment = 32
            curve_mode = "linear"
            cubic_scheme = "de_casteljau"
            "#,
        )
        .unwrap();
        assert_eq!(config.samples_per_segment, 32);
        assert_eq!(config.curve_mode, CurveMode::Linear);
        assert_eq!(config.cubic_scheme, CubicScheme::DeCasteljau);
        assert_eq!(config.pick_tolerance, PICK_TOLERANCE);
        assert!(config.smooth_joins);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            SketchConfig::from_toml_str("samples_per_segment = 1"),
            Err(SketchError::TooFewSamples(1))
        ));
        assert!(matches!(
            SketchConfig::from_toml_str("pick_tolerance = -0.5"),
            Err(SketchError::InvalidTolerance(_))
        ));
        assert!(matches!(
            SketchConfig::from_toml_str("window_height = 0"),
            Err(SketchError::EmptyViewport { .. })
        ));
        assert!(matches!(
            SketchConfig::from_toml_str("curve_mode = \"quadratic\""),
            Err(SketchError::ConfigParse(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!("bezier_sketch_config_{}.toml", std::process::id()));
        let config = SketchConfig {
            samples_per_segment: 12,
            smooth_joins: false,
            ..SketchConfig::default()
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(SketchConfig::load_from_file(&path), config);

        std::fs::write(&path, "samples_per_segment = \"many\"").unwrap();
        assert_eq!(SketchConfig::load_from_file(&path), SketchConfig::default());

        std::fs::remove_file(&path).unwrap();
        assert_eq!(SketchConfig::load_from_file(&path), SketchConfig::default());
    }
}
