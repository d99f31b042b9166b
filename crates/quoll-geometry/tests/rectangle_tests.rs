//! Integration tests for the rectangle value type.

use quoll_geometry::Rectangle;

#[test]
fn test_new_stores_both_lengths() {
    let rect = Rectangle::new(10.0, 20.0);
    assert!((rect.width - 10.0).abs() < f64::EPSILON);
    assert!((rect.height - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_area_is_width_times_height() {
    let rect = Rectangle::new(10.0, 20.0);
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_area_of_degenerate_rectangle_is_zero() {
    let flat = Rectangle::new(0.0, 37.5);
    assert!(flat.area().abs() < f64::EPSILON);

    let point = Rectangle::default();
    assert!(point.area().abs() < f64::EPSILON);
}

#[test]
fn test_fractional_sides() {
    let rect = Rectangle::new(2.5, 4.0);
    assert!((rect.area() - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_serializes_width_before_height() {
    let rect = Rectangle::new(10.0, 20.0);
    let text = serde_json::to_string(&rect).unwrap();
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
}
