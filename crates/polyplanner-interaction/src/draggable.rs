//! What the current press-and-move gesture is manipulating.

use std::fmt;

use polyplanner_geometry::Point;

/// Target of an in-progress drag. Lives from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draggable {
    /// A single vertex, by index into the polygon's vertex list.
    Vertex(usize),
    /// The whole polygon. `last` is the previous raw pointer position.
    Polygon { last: Point },
}

impl Draggable {
    pub fn is_vertex(&self) -> bool {
        matches!(self, Draggable::Vertex(_))
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Draggable::Polygon { .. })
    }
}

impl fmt::Display for Draggable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draggable::Vertex(index) => write!(f, "vertex {}", index),
            Draggable::Polygon { last } => write!(f, "polygon from {}", last),
        }
    }
}
