#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

#[test]
fn center_of_doubled_canvas_maps_to_intrinsic_center() {
    let rect = Rect::new(0.0, 0.0, 600.0, 300.0);
    let size = SurfaceSize::new(300.0, 150.0);
    let point = client_to_canvas(Point::new(300.0, 150.0), rect, size).unwrap();
    assert!(approx(point, Point::new(150.0, 75.0)));
}

#[test]
fn mapping_subtracts_element_offset() {
    let rect = Rect::new(40.0, 120.0, 300.0, 150.0);
    let size = SurfaceSize::new(300.0, 150.0);
    let point = client_to_canvas(Point::new(50.0, 125.0), rect, size).unwrap();
    assert!(approx(point, Point::new(10.0, 5.0)));
}

#[test]
fn shrunk_canvas_scales_up() {
    let rect = Rect::new(10.0, 10.0, 150.0, 75.0);
    let size = SurfaceSize::new(300.0, 150.0);
    let point = client_to_canvas(Point::new(160.0, 85.0), rect, size).unwrap();
    assert!(approx(point, Point::new(300.0, 150.0)));
}

#[test]
fn non_uniform_scaling_is_per_axis() {
    let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
    let size = SurfaceSize::new(300.0, 150.0);
    let point = client_to_canvas(Point::new(100.0, 100.0), rect, size).unwrap();
    assert!(approx(point, Point::new(100.0, 50.0)));
}

#[test]
fn points_outside_the_element_are_still_mapped() {
    let rect = Rect::new(100.0, 100.0, 300.0, 150.0);
    let size = SurfaceSize::new(300.0, 150.0);
    let point = client_to_canvas(Point::new(90.0, 80.0), rect, size).unwrap();
    assert!(approx(point, Point::new(-10.0, -20.0)));
}

#[test]
fn collapsed_element_yields_nothing() {
    let size = SurfaceSize::new(300.0, 150.0);
    let client = Point::new(5.0, 5.0);
    assert!(client_to_canvas(client, Rect::new(0.0, 0.0, 0.0, 150.0), size).is_none());
    assert!(client_to_canvas(client, Rect::new(0.0, 0.0, 300.0, 0.0), size).is_none());
    assert!(client_to_canvas(client, Rect::new(0.0, 0.0, -1.0, 150.0), size).is_none());
}

#[test]
fn non_finite_input_yields_nothing() {
    let rect = Rect::new(0.0, 0.0, 300.0, 150.0);
    let size = SurfaceSize::new(300.0, 150.0);
    assert!(client_to_canvas(Point::new(f64::NAN, 1.0), rect, size).is_none());
    assert!(client_to_canvas(Point::new(1.0, 1.0), Rect::new(f64::NAN, 0.0, 1.0, 1.0), size).is_none());
}

#[test]
fn normalize_point_passes_finite_points() {
    let point = Point::new(3.0, 4.0);
    assert_eq!(normalize_point(point), Some(point));
}
