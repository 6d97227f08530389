//! Planner facade.
//!
//! Owns the state, the interaction controller and the listeners. Hosts feed
//! it container sizes and pointer events and read the polygon back, either
//! directly or through [`Planner::render`].

use polyplanner_core::{PointerEvent, Result};
use polyplanner_geometry::{Point, Polygon};
use polyplanner_settings::PlannerConfig;
use tracing::debug;

use crate::controller::InteractionController;
use crate::draggable::Draggable;
use crate::listener::{CoordinatesListener, ListenerHandle, ListenerRegistry};
use crate::planner_state::PlannerState;
use crate::render::{RenderScene, RenderSurface, SceneColors};

#[derive(Debug)]
pub struct Planner {
    state: PlannerState,
    controller: InteractionController,
    listeners: ListenerRegistry,
    colors: SceneColors,
}

impl Default for Planner {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner from a configuration. Out-of-range values are
    /// clamped.
    pub fn from_config(config: &PlannerConfig) -> Self {
        let config = config.clone().normalized();
        let state = PlannerState::from_config(&config);
        let controller =
            InteractionController::with_settings(state.marker_radius(), &config.interaction);

        Self {
            state,
            controller,
            listeners: ListenerRegistry::new(),
            colors: SceneColors {
                fill: config.style.fill_color,
                stroke: config.style.stroke_color,
                marker: config.style.marker_color,
            },
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Records the container size. Negative or non-finite values become 0.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.state.set_size(width, height);
        debug!(
            "Container resized to {}x{}",
            self.state.width(),
            self.state.height()
        );
    }

    pub fn container_size(&self) -> (f64, f64) {
        (self.state.width(), self.state.height())
    }

    /// Changes the marker radius used for drawing and for the touch circle
    /// offset. The cached touch radius keeps its value until
    /// [`Planner::refresh_touch_radius`] is called.
    pub fn set_marker_radius(&mut self, radius: u32) {
        self.state.set_marker_radius(radius);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.state.set_stroke_width(width);
    }

    pub fn set_extended_touch_radius(&mut self, radius: i32) {
        self.controller.set_extended_touch_radius(radius);
    }

    /// Recomputes the touch radius from the current marker radius.
    pub fn refresh_touch_radius(&mut self) {
        self.controller.refresh_touch_radius(self.state.marker_radius());
    }

    pub fn set_box_padding(&mut self, padding: f64) {
        self.controller.set_box_padding(padding);
    }

    pub fn draggable(&self) -> Option<&Draggable> {
        self.controller.draggable()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Processes one pointer event and then notifies every listener.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Result<()> {
        self.controller.handle_event(&event, &mut self.state)?;
        let polygon = self.state.polygon()?;
        self.listeners.notify(polygon);
        Ok(())
    }

    /// Abandons the current drag without notifying listeners.
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    pub fn polygon(&mut self) -> Result<&Polygon> {
        let polygon: &Polygon = self.state.polygon()?;
        Ok(polygon)
    }

    pub fn vertices(&mut self) -> Result<&[Point]> {
        Ok(self.state.polygon()?.vertices())
    }

    /// Replaces the polygon. Any drag in progress is cancelled.
    pub fn set_polygon(&mut self, polygon: Polygon) {
        self.controller.cancel();
        self.state.set_polygon(polygon);
    }

    /// Discards the polygon so it is rebuilt from the current container size.
    pub fn reset_polygon(&mut self) {
        self.controller.cancel();
        self.state.reset_polygon();
    }

    pub fn add_listener(&mut self, listener: impl CoordinatesListener + 'static) -> ListenerHandle {
        self.listeners.register(Box::new(listener))
    }

    pub fn remove_listener(&mut self, handle: &ListenerHandle) -> bool {
        self.listeners.unregister(handle)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Describes the current frame.
    pub fn render_scene(&mut self) -> Result<RenderScene> {
        let marker_radius = self.state.marker_radius();
        let stroke_width = self.state.stroke_width();
        let polygon = self.state.polygon()?;
        Ok(RenderScene::new(
            polygon,
            marker_radius,
            stroke_width,
            &self.colors,
        ))
    }

    /// Draws the current frame onto `surface`.
    pub fn render(&mut self, surface: &mut impl RenderSurface) -> Result<()> {
        self.render_scene()?.draw(surface);
        Ok(())
    }
}
