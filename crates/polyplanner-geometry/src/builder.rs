//! Incremental polygon construction.
//!
//! The builder accepts vertices in winding order, tracks the running bounding
//! box and connects consecutive vertices with sides as they arrive. Closing
//! the ring adds the side from the last vertex back to the first.
//!
//! Adding a vertex after the ring was closed starts a fresh ring; only the
//! ring being built when [`PolygonBuilder::build`] is called survives.

use polyplanner_core::GeometryError;

use crate::bounds::BoundingBox;
use crate::point::Point;
use crate::polygon::{Polygon, SideIndex};

/// Minimum number of vertices in a closed ring.
pub const MIN_VERTICES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    vertices: Vec<Point>,
    sides: Vec<SideIndex>,
    bounding_box: Option<BoundingBox>,
    closed: bool,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex to the current ring.
    pub fn add_vertex(mut self, point: impl Into<Point>) -> Self {
        let point = point.into();

        if self.closed {
            self.vertices.clear();
            self.sides.clear();
            self.bounding_box = None;
            self.closed = false;
        }

        match self.bounding_box.as_mut() {
            Some(bounds) => bounds.include(&point),
            None => self.bounding_box = Some(BoundingBox::from_point(&point)),
        }

        self.vertices.push(point);
        let count = self.vertices.len();
        if count >= 2 {
            self.sides.push(SideIndex::new(count - 2, count - 1));
        }

        self
    }

    /// Appends every point of `points` in order.
    pub fn add_vertices<P: Into<Point>>(self, points: impl IntoIterator<Item = P>) -> Self {
        points.into_iter().fold(self, |builder, p| builder.add_vertex(p))
    }

    /// Closes the ring with a side from the last vertex back to the first.
    pub fn close(mut self) -> Result<Self, GeometryError> {
        if self.vertices.len() < MIN_VERTICES {
            return Err(GeometryError::NotEnoughVertices {
                count: self.vertices.len(),
            });
        }

        self.sides.push(SideIndex::new(self.vertices.len() - 1, 0));
        self.closed = true;
        Ok(self)
    }

    /// Number of vertices in the current ring.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Finishes the polygon, closing the ring first if needed.
    pub fn build(self) -> Result<Polygon, GeometryError> {
        let builder = if self.closed { self } else { self.close()? };

        let PolygonBuilder {
            vertices,
            sides,
            bounding_box,
            ..
        } = builder;

        let bounding_box = bounding_box.ok_or(GeometryError::NotEnoughVertices { count: 0 })?;
        Ok(Polygon::from_parts(vertices, sides, bounding_box))
    }
}
