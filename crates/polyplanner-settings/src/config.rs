//! Configuration management for Polyplanner
//!
//! Provides configuration file handling and value normalization.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Style settings (marker radius, stroke width, colors)
//! - Layout settings (share of the container covered by the initial polygon)
//! - Interaction settings (touch tolerance, box padding)
//!
//! Out-of-range values are clamped to the nearest valid bound rather than
//! rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, SettingsError};

/// Lower bound for the layout ratios.
pub const MIN_RATIO: f64 = 0.6;
/// Upper bound for the layout ratios.
pub const MAX_RATIO: f64 = 1.0;
/// Default layout ratio on both axes.
pub const DEFAULT_RATIO: f64 = 0.75;
pub const DEFAULT_MARKER_RADIUS: u32 = 20;
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
pub const DEFAULT_EXTENDED_TOUCH_RADIUS: i32 = 30;
pub const DEFAULT_BOX_PADDING: f64 = 50.0;

/// Clamps a layout ratio to `[MIN_RATIO, MAX_RATIO]`. NaN maps to the lower
/// bound.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return MIN_RATIO;
    }
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// Clamps box padding to be non-negative. Non-finite input maps to zero.
pub fn clamp_padding(padding: f64) -> f64 {
    if padding.is_finite() {
        padding.max(0.0)
    } else {
        0.0
    }
}

/// Style values passed through to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Radius of the vertex markers
    pub marker_radius: u32,
    /// Outline stroke width
    pub stroke_width: f64,
    /// Polygon fill color
    pub fill_color: Color,
    /// Polygon outline color
    pub stroke_color: Color,
    /// Vertex marker color
    pub marker_color: Color,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            marker_radius: DEFAULT_MARKER_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_color: Color::from_rgba8(52, 152, 219, 64),
            stroke_color: Color::from_rgb8(52, 152, 219),
            marker_color: Color::from_rgb8(255, 235, 59),
        }
    }
}

/// Share of the container covered by the initial polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub width_ratio: f64,
    pub height_ratio: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width_ratio: DEFAULT_RATIO,
            height_ratio: DEFAULT_RATIO,
        }
    }
}

/// Pointer interaction tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Added to the marker radius to form the vertex pick radius
    pub extended_touch_radius: i32,
    /// Minimum margin between the polygon and the container edges
    pub box_padding: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            extended_touch_radius: DEFAULT_EXTENDED_TOUCH_RADIUS,
            box_padding: DEFAULT_BOX_PADDING,
        }
    }
}

/// Complete planner configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub style: StyleSettings,
    pub layout: LayoutSettings,
    pub interaction: InteractionSettings,
}

impl PlannerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps every value into its valid range.
    pub fn normalize(&mut self) {
        self.layout.width_ratio = clamp_ratio(self.layout.width_ratio);
        self.layout.height_ratio = clamp_ratio(self.layout.height_ratio);
        self.interaction.box_padding = clamp_padding(self.interaction.box_padding);
        if !self.style.stroke_width.is_finite() || self.style.stroke_width < 0.0 {
            self.style.stroke_width = 0.0;
        }
    }

    /// Returns a normalized copy.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Load config from file (JSON or TOML), normalizing the values read.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        Ok(config.normalized())
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML). Parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let config = self.clone().normalized();

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            ConfigFormat::Toml => toml::to_string_pretty(&config)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Default location of the configuration file:
/// `<platform config dir>/polyplanner/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("polyplanner").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory not available".to_string())
        })
}
