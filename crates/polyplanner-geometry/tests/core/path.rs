use lyon::path::Event;
use polyplanner_geometry::{Point, Polygon};

#[test]
fn test_path_starts_at_first_vertex_and_closes() {
    let polygon = Polygon::from_points([(10, 10), (50, 10), (50, 40), (10, 40)]).unwrap();
    let path = polygon.to_path();

    let events: Vec<_> = path.iter().collect();
    assert_eq!(events.len(), 5, "begin, three lines, end");

    match events[0] {
        Event::Begin { at } => {
            assert_eq!((at.x, at.y), (10.0, 10.0));
        }
        other => panic!("expected begin, got {:?}", other),
    }

    let line_ends: Vec<Point> = events
        .iter()
        .filter_map(|e| match e {
            Event::Line { to, .. } => Some(Point::new(to.x as f64, to.y as f64)),
            _ => None,
        })
        .collect();
    assert_eq!(line_ends, polygon.vertices()[1..].to_vec());

    match events[4] {
        Event::End { close, first, .. } => {
            assert!(close);
            assert_eq!((first.x, first.y), (10.0, 10.0));
        }
        other => panic!("expected end, got {:?}", other),
    }
}

#[test]
fn test_path_follows_mutated_vertices() {
    let mut polygon = Polygon::from_points([(0, 0), (10, 0), (10, 10)]).unwrap();
    polygon.vertices_mut()[1].set(20.0, 0.0);

    let path = polygon.to_path();
    let first_line = path.iter().find_map(|e| match e {
        Event::Line { to, .. } => Some((to.x, to.y)),
        _ => None,
    });
    assert_eq!(first_line, Some((20.0, 0.0)));
}
