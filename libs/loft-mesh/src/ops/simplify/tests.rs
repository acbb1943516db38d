//! # Simplification Tests

use super::*;
use approx::assert_abs_diff_eq;

fn zigzag() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.05, 0.0),
        Point3::new(2.0, -0.05, 0.0),
        Point3::new(3.0, 2.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(5.0, 0.02, 0.0),
        Point3::new(6.0, 0.0, 0.0),
    ]
}

#[test]
fn test_collinear_middle_dropped() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
    ];
    assert_eq!(simplify(&pts, 0.01), vec![pts[0], pts[2]]);
}

#[test]
fn test_short_input_unchanged() {
    let pts = [Point3::ZERO, Point3::X];
    assert_eq!(simplify(&pts, 1.0), pts.to_vec());
    assert_eq!(simplify_closed(&pts, 1.0), pts.to_vec());
    assert!(simplify(&[], 1.0).is_empty());
}

#[test]
fn test_keeps_endpoints_and_peak() {
    let pts = zigzag();
    let out = simplify(&pts, 0.1);
    assert_eq!(out.first(), pts.first());
    assert_eq!(out.last(), pts.last());
    assert!(out.contains(&Point3::new(3.0, 2.0, 0.0)));
    assert!(out.len() <= pts.len());
    // Small wiggles are within tolerance
    assert!(!out.contains(&Point3::new(1.0, 0.05, 0.0)));
    assert!(!out.contains(&Point3::new(5.0, 0.02, 0.0)));
}

#[test]
fn test_point_exactly_at_tolerance_dropped() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.5, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    assert_eq!(simplify(&pts, 0.5).len(), 2);
    assert_eq!(simplify(&pts, 0.49).len(), 3);
}

#[test]
fn test_zero_tolerance_keeps_non_collinear() {
    let pts = zigzag();
    assert_eq!(simplify(&pts, 0.0), pts);
}

#[test]
fn test_idempotent() {
    let pts = zigzag();
    let once = simplify(&pts, 0.1);
    let twice = simplify(&once, 0.1);
    assert_eq!(once, twice);
}

#[test]
fn test_closed_drops_closing_point() {
    let square = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 0.0),
    ];
    let out = simplify_closed(&square, 0.01);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], square[0]);
    assert_ne!(out.last(), Some(&square[0]));
}

#[test]
fn test_closed_drops_redundant_edge_points() {
    let square = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 0.0),
    ];
    let out = simplify_closed(&square, 0.01);
    assert_eq!(
        out,
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    );
}

#[test]
fn test_perpendicular_distance() {
    let d = perpendicular_distance(Point3::new(1.0, 3.0, 0.0), Point3::ZERO, Point3::X);
    assert_abs_diff_eq!(d, 3.0, epsilon = 1e-12);
    // Zero-length base
    assert_eq!(perpendicular_distance(Point3::Y, Point3::X, Point3::X), 0.0);
}

#[test]
fn test_open_loop_without_closing_point() {
    // Sampled loops never repeat their first point; the open variant keeps
    // every corner.
    let square = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(simplify(&square, 0.01), square.to_vec());
}
