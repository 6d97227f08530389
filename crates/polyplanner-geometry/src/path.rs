//! Path export for rendering collaborators.

use lyon::math::point;
use lyon::path::Path;

use crate::polygon::Polygon;

impl Polygon {
    /// Closed path starting at `vertices[0]` and following the sides in order.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let vertices = self.vertices();

        let Some(first) = vertices.first() else {
            return builder.build();
        };

        builder.begin(point(first.x as f32, first.y as f32));
        // The closing side returns to the first vertex; `close` draws it.
        for side in self.sides().take(vertices.len().saturating_sub(1)) {
            let end = side.end();
            builder.line_to(point(end.x as f32, end.y as f32));
        }
        builder.close();

        builder.build()
    }
}
