//! # Polyplanner Interaction
//!
//! Turns a press/move/release pointer stream into edits of a closed polygon
//! that must stay inside a padded container.
//!
//! - [`PlannerState`] holds the container size, marker style and the lazily
//!   built initial polygon.
//! - [`InteractionController`] hit-tests presses and clamps vertex and
//!   whole-polygon drags.
//! - [`Planner`] ties both together, notifies [`CoordinatesListener`]s after
//!   every event and feeds a [`RenderSurface`].

pub mod controller;
pub mod draggable;
pub mod listener;
pub mod planner;
pub mod planner_state;
pub mod render;

pub use controller::InteractionController;
pub use draggable::Draggable;
pub use listener::{CoordinatesListener, ListenerHandle, ListenerRegistry};
pub use planner::Planner;
pub use planner_state::PlannerState;
pub use render::{Marker, RenderScene, RenderSurface, SceneColors};
