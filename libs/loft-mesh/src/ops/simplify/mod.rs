//! # Curve Simplification
//!
//! Douglas-Peucker reduction of point sequences.
//!
//! ## Algorithm
//!
//! 1. Keep the first and last points
//! 2. For a range `[start, end]`, find the interior point farthest from the
//!    chord `start → end` (strictly greater distance wins, so the first
//!    maximum is chosen)
//! 3. If that distance exceeds the tolerance, keep it and process both halves
//! 4. Otherwise every interior point of the range is dropped
//!
//! Ranges are processed from an explicit work stack, so deep inputs cannot
//! overflow the call stack.
//!
//! A closed loop given with its closing point repeated has a zero-length
//! outer chord. The closed variant first splits such a loop at the point
//! farthest from its start, then proceeds as above.

#[cfg(test)]
mod tests;

use crate::geometry::{cross, distance, length, subtract, Point3};
use loft_config::constants::EPSILON;
use tracing::debug;

/// Simplifies an open point sequence.
///
/// Inputs with fewer than 3 points are returned unchanged.
///
/// # Example
///
/// ```rust
/// use loft_mesh::ops::simplify;
/// use loft_mesh::Point3;
///
/// let line = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(5.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
/// ];
/// let out = simplify(&line, 0.01);
/// assert_eq!(out, vec![line[0], line[2]]);
/// ```
pub fn simplify(points: &[Point3], tolerance: f64) -> Vec<Point3> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let keep = keep_mask(points, tolerance, false);
    collect_kept(points, &keep)
}

/// Simplifies a closed loop given with its closing point repeated at the end.
///
/// The repeated closing point is always removed from the result, so the
/// output follows the closed-curve convention. Inputs with fewer than 3
/// points are returned unchanged.
pub fn simplify_closed(points: &[Point3], tolerance: f64) -> Vec<Point3> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut keep = keep_mask(points, tolerance, true);
    let last = keep.len() - 1;
    keep[last] = false;
    collect_kept(points, &keep)
}

fn keep_mask(points: &[Point3], tolerance: f64, closed: bool) -> Vec<bool> {
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = Vec::new();
    match closed.then(|| farthest_from_start(points)).flatten() {
        Some(seed) => {
            keep[seed] = true;
            stack.push((seed, last));
            stack.push((0, seed));
        }
        None => stack.push((0usize, last)),
    }
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let a = points[start];
        let b = points[end];

        let mut max_dist = 0.0;
        let mut split = None;
        for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = perpendicular_distance(*p, a, b);
            if dist > tolerance && dist > max_dist {
                max_dist = dist;
                split = Some(i);
            }
        }

        if let Some(index) = split {
            keep[index] = true;
            stack.push((index, end));
            stack.push((start, index));
        }
    }
    keep
}

/// Index of the interior point farthest from the start of a loop whose last
/// point repeats its first.
fn farthest_from_start(points: &[Point3]) -> Option<usize> {
    let start = points[0];
    let last = points.len() - 1;
    if distance(start, points[last]) >= EPSILON {
        return None;
    }
    let mut max_dist = 0.0;
    let mut seed = None;
    for (i, p) in points.iter().enumerate().take(last).skip(1) {
        let dist = distance(start, *p);
        if dist > max_dist {
            max_dist = dist;
            seed = Some(i);
        }
    }
    seed
}

fn collect_kept(points: &[Point3], keep: &[bool]) -> Vec<Point3> {
    let result: Vec<Point3> = points
        .iter()
        .zip(keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect();
    debug!(before = points.len(), after = result.len(), "Simplified curve");
    result
}

/// Distance from `p` to the line through `a` and `b`.
///
/// Zero when `a` and `b` coincide.
pub(crate) fn perpendicular_distance(p: Point3, a: Point3, b: Point3) -> f64 {
    let ab = subtract(b, a);
    let ap = subtract(p, a);
    let base = length(ab);
    if base < EPSILON {
        return 0.0;
    }
    length(cross(ab, ap)) / base
}
