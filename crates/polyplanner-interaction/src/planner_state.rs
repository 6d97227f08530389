//! Container dimensions, marker style and the initial polygon.
//!
//! The initial polygon is a rectangle centered in the container, covering
//! `width_ratio` of its width and `height_ratio` of its height. It is built
//! the first time it is requested and kept afterwards; resizing the container
//! does not rebuild it.

use polyplanner_core::Result;
use polyplanner_geometry::{Point, Polygon};
use polyplanner_settings::{clamp_ratio, PlannerConfig};

/// Normalizes a container dimension. Negative or non-finite values become 0.
fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    width: f64,
    height: f64,
    marker_radius: u32,
    stroke_width: f64,
    width_ratio: f64,
    height_ratio: f64,
    polygon: Option<Polygon>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl PlannerState {
    /// Creates a state with default style and a zero-sized container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from the style and layout sections of `config`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        let config = config.clone().normalized();
        Self {
            width: 0.0,
            height: 0.0,
            marker_radius: config.style.marker_radius,
            stroke_width: config.style.stroke_width,
            width_ratio: config.layout.width_ratio,
            height_ratio: config.layout.height_ratio,
            polygon: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Updates the container size. The polygon is left where it is.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
    }

    pub fn marker_radius(&self) -> u32 {
        self.marker_radius
    }

    pub fn set_marker_radius(&mut self, radius: u32) {
        self.marker_radius = radius;
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    /// Sets both ratios, clamped to `[0.6, 1.0]`. Takes effect the next time
    /// the initial polygon is built.
    pub fn set_ratios(&mut self, width_ratio: f64, height_ratio: f64) {
        self.width_ratio = clamp_ratio(width_ratio);
        self.height_ratio = clamp_ratio(height_ratio);
    }

    /// Corners of the initial rectangle for the current size and ratios.
    pub fn initial_vertices(&self) -> [Point; 4] {
        let (w, h) = (self.width, self.height);
        let (rw, rh) = (self.width_ratio, self.height_ratio);
        [
            Point::new(w * (1.0 - rw), h * (1.0 - rh)),
            Point::new(w * rw, h * (1.0 - rh)),
            Point::new(w * rw, h * rh),
            Point::new(w * (1.0 - rw), h * rh),
        ]
    }

    /// Returns the polygon, building the initial one on first use.
    pub fn polygon(&mut self) -> Result<&mut Polygon> {
        let polygon = match self.polygon.take() {
            Some(polygon) => polygon,
            None => Polygon::from_points(self.initial_vertices())?,
        };
        Ok(self.polygon.insert(polygon))
    }

    /// Returns the polygon only if it has already been built.
    pub fn current_polygon(&self) -> Option<&Polygon> {
        self.polygon.as_ref()
    }

    /// Drops the polygon so the next request rebuilds it from the current
    /// size and ratios.
    pub fn reset_polygon(&mut self) {
        self.polygon = None;
    }

    /// Replaces the polygon with a caller-built one.
    pub fn set_polygon(&mut self, polygon: Polygon) {
        self.polygon = Some(polygon);
    }
}
