//! Render contract.
//!
//! The host owns the drawing surface. The planner describes one frame as a
//! filled and stroked closed path plus one filled circle per vertex.

use lyon::path::Path;
use polyplanner_geometry::{Point, Polygon};
use polyplanner_settings::Color;

/// Drawing surface implemented by the host.
pub trait RenderSurface {
    fn fill_path(&mut self, path: &Path, color: Color);

    fn stroke_path(&mut self, path: &Path, color: Color, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}

/// A vertex marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    pub path: Path,
    pub markers: Vec<Marker>,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub marker_color: Color,
}

impl RenderScene {
    pub fn new(
        polygon: &Polygon,
        marker_radius: u32,
        stroke_width: f64,
        colors: &SceneColors,
    ) -> Self {
        let radius = f64::from(marker_radius);
        Self {
            path: polygon.to_path(),
            markers: polygon
                .vertices()
                .iter()
                .map(|&center| Marker { center, radius })
                .collect(),
            fill_color: colors.fill,
            stroke_color: colors.stroke,
            stroke_width,
            marker_color: colors.marker,
        }
    }

    /// Issues the draw calls: fill, stroke, then one circle per vertex.
    pub fn draw(&self, surface: &mut impl RenderSurface) {
        surface.fill_path(&self.path, self.fill_color);
        surface.stroke_path(&self.path, self.stroke_color, self.stroke_width);
        for marker in &self.markers {
            surface.fill_circle(marker.center, marker.radius, self.marker_color);
        }
    }
}

/// Fill, outline and marker colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneColors {
    pub fill: Color,
    pub stroke: Color,
    pub marker: Color,
}
