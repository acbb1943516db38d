//! # Segmentation Tests

use super::*;
use approx::assert_abs_diff_eq;

fn notch() -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(4.0, 4.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
        Point3::new(0.0, 4.0, 0.0),
    ]
}

fn reversed(points: &[Point3]) -> Vec<Point3> {
    points.iter().rev().copied().collect()
}

#[test]
fn test_turning_angle_convex_and_reflex() {
    let ccw = 1.0;
    // Right-angle left turn on a counter-clockwise loop
    let convex = turning_angle(Point3::ZERO, Point3::X, Point3::new(1.0, 1.0, 0.0), ccw);
    assert_abs_diff_eq!(convex, 90.0, epsilon = 1e-9);
    // Right turn on the same loop is reflex
    let reflex = turning_angle(Point3::ZERO, Point3::X, Point3::new(1.0, -1.0, 0.0), ccw);
    assert_abs_diff_eq!(reflex, 270.0, epsilon = 1e-9);
    // Orientation flips the meaning
    let cw = turning_angle(Point3::ZERO, Point3::X, Point3::new(1.0, -1.0, 0.0), -1.0);
    assert_abs_diff_eq!(cw, 90.0, epsilon = 1e-9);
}

#[test]
fn test_turning_angle_straight() {
    let a = turning_angle(Point3::ZERO, Point3::X, Point3::new(2.0, 0.0, 0.0), 1.0);
    assert_abs_diff_eq!(a, 180.0, epsilon = 1e-9);
}

#[test]
fn test_convex_loop_is_one_run() {
    let square = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(segment_convex_runs(&square), vec![square.clone()]);
    let cw = reversed(&square);
    assert_eq!(segment_convex_runs(&cw), vec![cw]);
}

#[test]
fn test_one_reflex_vertex_splits_in_two() {
    let pts = notch();
    let runs = segment_convex_runs(&pts);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0], pts[..4].to_vec());
    assert_eq!(runs[1], vec![pts[3], pts[4], pts[0]]);
    assert!(runs.iter().all(|r| r.len() >= 3));
}

#[test]
fn test_runs_cover_every_loop_point() {
    let pts = notch();
    let runs = segment_convex_runs(&pts);
    for p in &pts {
        assert!(runs.iter().any(|r| r.contains(p)), "missing {p:?}");
    }
}

#[test]
fn test_clockwise_notch_splits_at_same_vertex() {
    // Clockwise, still starting from the origin
    let mut pts = reversed(&notch());
    pts.rotate_right(1);
    assert_eq!(pts[0], Point3::ZERO);

    let runs = segment_convex_runs(&pts);
    assert_eq!(runs.len(), 2);
    let reflex = Point3::new(2.0, 2.0, 0.0);
    assert!(runs.iter().all(|r| r.contains(&reflex)));
}

#[test]
fn test_short_leading_run_folds_into_last() {
    // The reflex vertex is the loop's second point, so the run before it is
    // too short and the closing run picks up the first point instead.
    let mut pts = notch();
    pts.rotate_left(2);
    let runs = segment_convex_runs(&pts);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].len(), pts.len());
    assert_eq!(runs[0][0], Point3::new(2.0, 2.0, 0.0));
    assert_eq!(runs[0].last(), Some(&pts[0]));
}

#[test]
fn test_too_short_loop() {
    assert!(segment_convex_runs(&[Point3::ZERO, Point3::X]).is_empty());
}
