//! Pointer interaction state machine.
//!
//! A press picks a target: the first vertex whose touch circle contains the
//! press point, otherwise the whole polygon when the press lands inside it.
//! Moves then drag that target while keeping it `box_padding` away from the
//! container edges. A release ends the drag.
//!
//! The touch circle of a vertex is centered at the vertex offset by the
//! marker radius on both axes. Its radius is `marker_radius +
//! extended_touch_radius`, cached when the controller is created and only
//! recomputed by [`InteractionController::set_extended_touch_radius`] or
//! [`InteractionController::refresh_touch_radius`].

use polyplanner_core::{PointerEvent, PointerPhase, Result};
use polyplanner_geometry::{BoundingBox, Point, Polygon};
use polyplanner_settings::{clamp_padding, InteractionSettings};
use tracing::{debug, trace, warn};

use crate::draggable::Draggable;
use crate::planner_state::PlannerState;

/// Clamps one coordinate into `[padding, dimension - padding]`, testing the
/// lower bound first.
fn clamp_axis(value: f64, padding: f64, dimension: f64) -> f64 {
    if value < padding {
        padding
    } else if value > dimension - padding {
        dimension - padding
    } else {
        value
    }
}

/// Shrinks a per-axis delta so that `[min, max]` moved by it stays inside
/// `[padding, dimension - padding]`.
fn clamp_delta(delta: f64, min: f64, max: f64, padding: f64, dimension: f64) -> f64 {
    if min + delta < padding {
        padding - min
    } else if max + delta > dimension - padding {
        dimension - padding - max
    } else {
        delta
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    extended_touch_radius: i32,
    touch_marker_radius: u32,
    vertex_touch_radius: f64,
    box_padding: f64,
    draggable: Option<Draggable>,
}

impl InteractionController {
    /// Creates a controller with the default touch radius and padding.
    pub fn new(marker_radius: u32) -> Self {
        Self::with_settings(marker_radius, &InteractionSettings::default())
    }

    pub fn with_settings(marker_radius: u32, settings: &InteractionSettings) -> Self {
        let mut controller = Self {
            extended_touch_radius: settings.extended_touch_radius,
            touch_marker_radius: marker_radius,
            vertex_touch_radius: 0.0,
            box_padding: clamp_padding(settings.box_padding),
            draggable: None,
        };
        controller.recompute_touch_radius();
        controller
    }

    fn recompute_touch_radius(&mut self) {
        self.vertex_touch_radius =
            f64::from(self.touch_marker_radius) + f64::from(self.extended_touch_radius);
    }

    pub fn extended_touch_radius(&self) -> i32 {
        self.extended_touch_radius
    }

    /// Sets the extra pick tolerance and recomputes the cached touch radius.
    pub fn set_extended_touch_radius(&mut self, radius: i32) {
        self.extended_touch_radius = radius;
        self.recompute_touch_radius();
    }

    /// Recomputes the cached touch radius for a new marker radius.
    pub fn refresh_touch_radius(&mut self, marker_radius: u32) {
        self.touch_marker_radius = marker_radius;
        self.recompute_touch_radius();
    }

    /// Effective pick radius around each vertex.
    pub fn vertex_touch_radius(&self) -> f64 {
        self.vertex_touch_radius
    }

    pub fn box_padding(&self) -> f64 {
        self.box_padding
    }

    /// Sets the container padding. Negative or non-finite values become 0.
    pub fn set_box_padding(&mut self, padding: f64) {
        self.box_padding = clamp_padding(padding);
    }

    pub fn draggable(&self) -> Option<&Draggable> {
        self.draggable.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.draggable.is_some()
    }

    /// Abandons the current drag, leaving the polygon where it is.
    pub fn cancel(&mut self) {
        if let Some(draggable) = self.draggable.take() {
            debug!("Drag of {} cancelled", draggable);
        }
    }

    /// Index of the first vertex whose touch circle contains `point`.
    pub fn hit_vertex(&self, polygon: &Polygon, point: &Point, marker_radius: u32) -> Option<usize> {
        let offset = f64::from(marker_radius);
        polygon.vertices().iter().position(|vertex| {
            let center = Point::new(vertex.x + offset, vertex.y + offset);
            center.distance_to(point) <= self.vertex_touch_radius
        })
    }

    /// Applies one pointer event to the polygon held by `state`.
    pub fn handle_event(&mut self, event: &PointerEvent, state: &mut PlannerState) -> Result<()> {
        let (width, height) = (state.width(), state.height());
        let marker_radius = state.marker_radius();
        let polygon = state.polygon()?;
        let position = Point::new(event.x, event.y);

        if event.phase != PointerPhase::Release && !(event.x.is_finite() && event.y.is_finite()) {
            warn!("Non-finite pointer position in {} event; ignored", event.phase);
            return Ok(());
        }

        match event.phase {
            PointerPhase::Press => self.press(position, polygon, marker_radius),
            PointerPhase::Move => self.drag_to(position, polygon, width, height),
            PointerPhase::Release => self.release(),
        }

        Ok(())
    }

    fn press(&mut self, position: Point, polygon: &Polygon, marker_radius: u32) {
        if let Some(current) = &self.draggable {
            warn!("Press at {} while dragging {}; ignored", position, current);
            return;
        }

        self.draggable = if let Some(index) = self.hit_vertex(polygon, &position, marker_radius) {
            Some(Draggable::Vertex(index))
        } else if polygon.is_inside(&position) {
            Some(Draggable::Polygon { last: position })
        } else {
            None
        };

        match &self.draggable {
            Some(draggable) => debug!("Press at {} picked {}", position, draggable),
            None => debug!("Press at {} hit nothing", position),
        }
    }

    fn drag_to(&mut self, position: Point, polygon: &mut Polygon, width: f64, height: f64) {
        let padding = self.box_padding;

        match self.draggable {
            None => trace!("Move to {} while idle; ignored", position),
            Some(Draggable::Vertex(index)) => match polygon.vertex_mut(index) {
                Some(vertex) => {
                    vertex.set(
                        clamp_axis(position.x, padding, width),
                        clamp_axis(position.y, padding, height),
                    );
                    trace!("Vertex {} moved to {}", index, vertex);
                }
                None => {
                    warn!("Vertex {} no longer exists; drag dropped", index);
                    self.draggable = None;
                }
            },
            Some(Draggable::Polygon { last }) => {
                let extent = polygon.extent();
                let (dx, dy) = Self::polygon_delta(&extent, &last, &position, padding, width, height);
                polygon.translate(dx, dy);
                self.draggable = Some(Draggable::Polygon { last: position });
                trace!("Polygon moved by ({}, {})", dx, dy);
            }
        }
    }

    fn polygon_delta(
        extent: &BoundingBox,
        last: &Point,
        position: &Point,
        padding: f64,
        width: f64,
        height: f64,
    ) -> (f64, f64) {
        let dx = clamp_delta(position.x - last.x, extent.min_x, extent.max_x, padding, width);
        let dy = clamp_delta(position.y - last.y, extent.min_y, extent.max_y, padding, height);
        (dx, dy)
    }

    fn release(&mut self) {
        if let Some(draggable) = self.draggable.take() {
            debug!("Released {}", draggable);
        }
    }
}
