//! Closed polygon ring.
//!
//! Vertices are owned by the polygon; sides are index pairs into the vertex
//! storage. Moving a vertex in place is therefore immediately visible through
//! the sides without rebuilding anything.
//!
//! The bounding box is captured when the polygon is built and is not updated
//! by later vertex edits. Use [`Polygon::extent`] for the current extent or
//! [`Polygon::refresh_bounding_box`] to re-derive the stored one.

use polyplanner_core::GeometryError;

use crate::bounds::BoundingBox;
use crate::builder::PolygonBuilder;
use crate::point::Point;
use crate::segment::Segment;

/// A side of the ring as indices into the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideIndex {
    pub start: usize,
    pub end: usize,
}

impl SideIndex {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A closed ring of at least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    sides: Vec<SideIndex>,
    bounding_box: BoundingBox,
}

impl Polygon {
    pub(crate) fn from_parts(
        vertices: Vec<Point>,
        sides: Vec<SideIndex>,
        bounding_box: BoundingBox,
    ) -> Self {
        Self {
            vertices,
            sides,
            bounding_box,
        }
    }

    /// Starts a new [`PolygonBuilder`].
    pub fn builder() -> PolygonBuilder {
        PolygonBuilder::new()
    }

    /// Builds a closed polygon from points given in winding order.
    pub fn from_points<P: Into<Point>>(
        points: impl IntoIterator<Item = P>,
    ) -> Result<Self, GeometryError> {
        PolygonBuilder::new().add_vertices(points).build()
    }

    /// Vertices in winding order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Mutable access to the vertices. The slice cannot grow or shrink, so the
    /// side indices stay valid.
    pub fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Point> {
        self.vertices.get(index)
    }

    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut Point> {
        self.vertices.get_mut(index)
    }

    /// Number of vertices (and sides).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn side_indices(&self) -> &[SideIndex] {
        &self.sides
    }

    /// Side `index` resolved against the current vertex positions.
    pub fn side(&self, index: usize) -> Option<Segment<'_>> {
        let side = self.sides.get(index)?;
        Some(Segment::new(
            &self.vertices[side.start],
            &self.vertices[side.end],
        ))
    }

    /// All sides in order, resolved against the current vertex positions.
    pub fn sides(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.sides
            .iter()
            .map(|side| Segment::new(&self.vertices[side.start], &self.vertices[side.end]))
    }

    /// Bounding box captured at build time (or at the last refresh).
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Re-derives the stored bounding box from the current vertices.
    pub fn refresh_bounding_box(&mut self) {
        self.bounding_box = self.extent();
    }

    /// Extent of the current vertex positions.
    pub fn extent(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices).unwrap_or(self.bounding_box)
    }

    /// Moves every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for vertex in &mut self.vertices {
            vertex.translate(dx, dy);
        }
    }

    /// Enclosed area (shoelace formula), independent of winding order.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.vertices[i].x * self.vertices[j].y;
            sum -= self.vertices[j].x * self.vertices[i].y;
        }
        sum.abs() / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        self.sides().map(|side| side.length()).sum()
    }
}
