//! # Polyplanner Geometry
//!
//! Geometric primitives for editing a closed polygon region.
//!
//! ## Core Components
//!
//! - **Point**: mutable 2D coordinate with distance computation
//! - **Segment**: directed line between two live vertices with slope/intercept
//! - **Polygon**: closed ring of vertices whose sides index into the vertex
//!   storage, so in-place vertex edits are visible through every side
//! - **PolygonBuilder**: incremental ring construction with validation
//! - **Containment**: ray-casting point-in-polygon test built from
//!   orientation-based segment intersection
//!
//! ## Usage
//!
//! ```rust
//! use polyplanner_geometry::{Point, Polygon};
//!
//! let polygon = Polygon::builder()
//!     .add_vertex(Point::new(0.0, 0.0))
//!     .add_vertex(Point::new(100.0, 0.0))
//!     .add_vertex(Point::new(100.0, 100.0))
//!     .add_vertex(Point::new(0.0, 100.0))
//!     .build()
//!     .unwrap();
//!
//! assert!(polygon.is_inside(&Point::new(50.0, 50.0)));
//! assert!(!polygon.is_inside(&Point::new(150.0, 50.0)));
//! ```

pub mod bounds;
pub mod builder;
pub mod containment;
pub mod path;
pub mod point;
pub mod polygon;
pub mod segment;

pub use bounds::BoundingBox;
pub use builder::PolygonBuilder;
pub use containment::{on_segment, segments_intersect, CrossPrecision, Orientation, RAY_EXTENT_X};
pub use point::Point;
pub use polygon::{Polygon, SideIndex};
pub use segment::{LineForm, Segment};
