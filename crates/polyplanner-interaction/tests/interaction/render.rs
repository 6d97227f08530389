use lyon::path::{Event, Path};
use polyplanner_geometry::Point;
use polyplanner_interaction::{Planner, RenderSurface};
use polyplanner_settings::{Color, PlannerConfig};

#[derive(Debug, PartialEq)]
enum Call {
    Fill(Color),
    Stroke(Color, f64),
    Circle(Point, f64, Color),
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Call>,
    paths: Vec<Path>,
}

impl RenderSurface for RecordingSurface {
    fn fill_path(&mut self, path: &Path, color: Color) {
        self.paths.push(path.clone());
        self.calls.push(Call::Fill(color));
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f64) {
        self.paths.push(path.clone());
        self.calls.push(Call::Stroke(color, width));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.calls.push(Call::Circle(center, radius, color));
    }
}

#[test]
fn test_render_issues_fill_stroke_then_markers() {
    let config = PlannerConfig::new();
    let style = config.style.clone();
    let mut planner = Planner::from_config(&config);
    planner.set_container_size(300.0, 300.0);

    let mut surface = RecordingSurface::default();
    planner.render(&mut surface).unwrap();

    assert_eq!(surface.calls.len(), 6);
    assert_eq!(surface.calls[0], Call::Fill(style.fill_color));
    assert_eq!(surface.calls[1], Call::Stroke(style.stroke_color, 4.0));
    assert_eq!(
        surface.calls[2],
        Call::Circle(Point::new(75.0, 75.0), 20.0, style.marker_color)
    );
    assert_eq!(
        surface.calls[5],
        Call::Circle(Point::new(75.0, 225.0), 20.0, style.marker_color)
    );
}

#[test]
fn test_rendered_path_is_closed_ring() {
    let mut planner = Planner::new();
    planner.set_container_size(300.0, 300.0);

    let mut surface = RecordingSurface::default();
    planner.render(&mut surface).unwrap();

    let events: Vec<_> = surface.paths[0].iter().collect();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], Event::Begin { .. }));
    assert!(matches!(events[4], Event::End { close: true, .. }));
}

#[test]
fn test_render_scene_tracks_marker_radius() {
    let mut planner = Planner::new();
    planner.set_container_size(300.0, 300.0);
    planner.set_marker_radius(8);
    planner.set_stroke_width(-2.0);

    let scene = planner.render_scene().unwrap();
    assert_eq!(scene.markers.len(), 4);
    assert!(scene.markers.iter().all(|marker| marker.radius == 8.0));
    assert_eq!(scene.markers[1].center, Point::new(225.0, 75.0));
    assert_eq!(scene.stroke_width, 0.0);
}
