use polyplanner_core::GeometryError;
use polyplanner_geometry::{BoundingBox, Point, Polygon, PolygonBuilder, SideIndex};

fn square() -> Polygon {
    Polygon::from_points([(100, 100), (200, 100), (200, 200), (100, 200)]).unwrap()
}

#[test]
fn test_build_with_too_few_vertices_fails() {
    assert_eq!(
        PolygonBuilder::new().build().unwrap_err(),
        GeometryError::NotEnoughVertices { count: 0 }
    );
    assert_eq!(
        Polygon::from_points([(0, 0), (1, 1)]).unwrap_err(),
        GeometryError::NotEnoughVertices { count: 2 }
    );
}

#[test]
fn test_triangle_has_three_sides() {
    let triangle = Polygon::from_points([(0, 0), (10, 0), (5, 8)]).unwrap();
    assert_eq!(triangle.len(), 3);
    assert_eq!(triangle.sides().count(), 3);
    assert_eq!(
        triangle.side_indices(),
        &[SideIndex::new(0, 1), SideIndex::new(1, 2), SideIndex::new(2, 0)]
    );
}

#[test]
fn test_explicit_close_then_build() {
    let polygon = Polygon::builder()
        .add_vertex(Point::new(0.0, 0.0))
        .add_vertex(Point::new(4.0, 0.0))
        .add_vertex(Point::new(4.0, 3.0))
        .close()
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(polygon.side_indices().len(), 3);
}

#[test]
fn test_only_last_ring_is_built() {
    let polygon = PolygonBuilder::new()
        .add_vertices([(0, 0), (10, 0), (10, 10)])
        .close()
        .unwrap()
        .add_vertices([(50, 50), (60, 50), (60, 60), (50, 60)])
        .build()
        .unwrap();

    assert_eq!(polygon.len(), 4);
    assert_eq!(polygon.vertices()[0], Point::new(50.0, 50.0));
    assert_eq!(polygon.bounding_box(), BoundingBox::new(50.0, 50.0, 60.0, 60.0));
}

#[test]
fn test_vertices_round_trip() {
    let input = vec![
        Point::new(12.5, 3.0),
        Point::new(80.0, 7.25),
        Point::new(64.0, 90.0),
        Point::new(5.0, 44.0),
    ];
    let polygon = Polygon::from_points(input.clone()).unwrap();
    assert_eq!(polygon.vertices(), input.as_slice());
}

#[test]
fn test_sides_connect_consecutive_vertices() {
    let polygon = square();
    let n = polygon.len();
    for (i, side) in polygon.sides().enumerate() {
        assert_eq!(side.start(), &polygon.vertices()[i]);
        assert_eq!(side.end(), &polygon.vertices()[(i + 1) % n]);
    }
}

#[test]
fn test_vertex_mutation_is_visible_through_sides() {
    let mut polygon = square();
    polygon.vertices_mut()[1].update(Point::new(50.0, 50.0));

    assert_eq!(polygon.side(0).unwrap().end(), &Point::new(50.0, 50.0));
    assert_eq!(polygon.side(1).unwrap().start(), &Point::new(50.0, 50.0));

    if let Some(vertex) = polygon.vertex_mut(3) {
        vertex.set(0.0, 300.0);
    }
    assert_eq!(polygon.side(3).unwrap().start(), &Point::new(0.0, 300.0));
    assert_eq!(polygon.side(2).unwrap().end(), &Point::new(0.0, 300.0));
}

#[test]
fn test_bounding_box_is_stale_until_refreshed() {
    let mut polygon = square();
    polygon.translate(10.0, -20.0);

    assert_eq!(polygon.bounding_box(), BoundingBox::new(100.0, 100.0, 200.0, 200.0));
    assert_eq!(polygon.extent(), BoundingBox::new(110.0, 80.0, 210.0, 180.0));

    polygon.refresh_bounding_box();
    assert_eq!(polygon.bounding_box(), polygon.extent());
}

#[test]
fn test_area_and_perimeter() {
    let polygon = square();
    assert_eq!(polygon.area(), 10_000.0);
    assert_eq!(polygon.perimeter(), 400.0);

    let reversed = Polygon::from_points([(100, 200), (200, 200), (200, 100), (100, 100)]).unwrap();
    assert_eq!(reversed.area(), 10_000.0);
}

#[test]
fn test_out_of_range_access_is_none() {
    let mut polygon = square();
    assert!(polygon.vertex(4).is_none());
    assert!(polygon.vertex_mut(4).is_none());
    assert!(polygon.side(4).is_none());
}
