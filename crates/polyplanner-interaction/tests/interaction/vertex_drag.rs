use polyplanner_core::PointerEvent;
use polyplanner_geometry::{Point, Polygon};
use polyplanner_interaction::{Draggable, Planner};

fn planner_with_square() -> Planner {
    let mut planner = Planner::new();
    planner.set_container_size(400.0, 400.0);
    planner.set_polygon(
        Polygon::from_points([(100, 100), (200, 100), (200, 200), (100, 200)]).unwrap(),
    );
    planner
}

#[test]
fn test_vertex_drag_is_clamped_to_padding() {
    let mut planner = planner_with_square();

    planner.handle_pointer_event(PointerEvent::press(100.0, 100.0)).unwrap();
    assert_eq!(planner.draggable(), Some(&Draggable::Vertex(0)));

    planner.handle_pointer_event(PointerEvent::moved(10.0, 10.0)).unwrap();
    assert_eq!(planner.vertices().unwrap()[0], Point::new(50.0, 50.0));

    planner.handle_pointer_event(PointerEvent::moved(390.0, 390.0)).unwrap();
    assert_eq!(planner.vertices().unwrap()[0], Point::new(350.0, 350.0));

    planner.handle_pointer_event(PointerEvent::release(390.0, 390.0)).unwrap();
    assert!(!planner.is_dragging());
}

#[test]
fn test_vertex_drag_moves_only_that_vertex() {
    let mut planner = planner_with_square();

    planner.handle_pointer_event(PointerEvent::press(200.0, 200.0)).unwrap();
    assert_eq!(planner.draggable(), Some(&Draggable::Vertex(2)));
    planner.handle_pointer_event(PointerEvent::moved(260.0, 240.0)).unwrap();

    let vertices = planner.vertices().unwrap().to_vec();
    assert_eq!(vertices[0], Point::new(100.0, 100.0));
    assert_eq!(vertices[1], Point::new(200.0, 100.0));
    assert_eq!(vertices[2], Point::new(260.0, 240.0));
    assert_eq!(vertices[3], Point::new(100.0, 200.0));

    // Sides follow the moved vertex
    let polygon = planner.polygon().unwrap();
    assert_eq!(*polygon.side(1).unwrap().end(), Point::new(260.0, 240.0));
    assert_eq!(*polygon.side(2).unwrap().start(), Point::new(260.0, 240.0));
}

#[test]
fn test_first_vertex_wins_overlapping_touch_circles() {
    let mut planner = Planner::new();
    planner.set_container_size(400.0, 400.0);
    planner.set_polygon(Polygon::from_points([(100, 100), (110, 100), (105, 150)]).unwrap());

    // (125, 120) is 5 units from both vertex 0's and vertex 1's touch centers
    planner.handle_pointer_event(PointerEvent::press(125.0, 120.0)).unwrap();
    assert_eq!(planner.draggable(), Some(&Draggable::Vertex(0)));
}

#[test]
fn test_touch_circle_boundary_is_inclusive() {
    let mut planner = planner_with_square();

    // Touch center of vertex 0 is (120, 120), radius 50
    planner.handle_pointer_event(PointerEvent::press(120.0, 70.0)).unwrap();
    assert_eq!(planner.draggable(), Some(&Draggable::Vertex(0)));
}

#[test]
fn test_touch_radius_stays_until_refreshed() {
    let mut planner = planner_with_square();
    assert_eq!(planner.controller().vertex_touch_radius(), 50.0);

    planner.set_marker_radius(40);
    assert_eq!(planner.controller().vertex_touch_radius(), 50.0);

    planner.refresh_touch_radius();
    assert_eq!(planner.controller().vertex_touch_radius(), 70.0);
}

#[test]
fn test_zero_padding_clamps_to_container() {
    let mut planner = planner_with_square();
    planner.set_box_padding(0.0);

    planner.handle_pointer_event(PointerEvent::press(100.0, 100.0)).unwrap();
    planner.handle_pointer_event(PointerEvent::moved(-10.0, 500.0)).unwrap();
    assert_eq!(planner.vertices().unwrap()[0], Point::new(0.0, 400.0));
}

#[test]
fn test_non_finite_move_leaves_vertex_in_place() {
    let mut planner = planner_with_square();

    planner.handle_pointer_event(PointerEvent::press(100.0, 100.0)).unwrap();
    planner.handle_pointer_event(PointerEvent::moved(f64::NAN, 120.0)).unwrap();

    assert_eq!(planner.vertices().unwrap()[0], Point::new(100.0, 100.0));
    assert_eq!(planner.draggable(), Some(&Draggable::Vertex(0)));

    planner.handle_pointer_event(PointerEvent::moved(60.0, 60.0)).unwrap();
    assert_eq!(planner.vertices().unwrap()[0], Point::new(60.0, 60.0));
}

#[test]
fn test_non_finite_press_starts_nothing() {
    let mut planner = planner_with_square();

    planner.handle_pointer_event(PointerEvent::press(f64::NAN, f64::NAN)).unwrap();
    assert!(!planner.is_dragging());
}
