//! # Loft Bridging
//!
//! Stitches consecutive cross-sections into a triangle band.
//!
//! ## Algorithm
//!
//! 1. Rotate the upper loop so its start faces the lower loop's start
//! 2. Close both loops by repeating their first point
//! 3. Walk both loops with one cursor each, always advancing the side whose
//!    next point makes the shorter diagonal
//! 4. Drain whichever loop has points left
//!
//! Every triangle is stored as `(a, c, b)` where `a` is on the lower loop,
//! which gives outward normals for counter-clockwise loops stacked upward.


use crate::geometry::{distance, Point3};
use crate::mesh::MeshBuilder;
use loft_config::constants::{CLOSURE_EPSILON, MIN_LOOP_POINTS};
use tracing::debug;

/// Rotates `current` so it lines up point-for-point with `previous`.
///
/// Every rotation `k` is scored by `Σ distance(previous[i], current[(i + k) % n])`
/// over `i < min(n, m)`; the lowest score wins and ties keep the smallest
/// `k`. This is `O(n·m)` and runs once per pair of cross-sections, so it
/// dominates bridging time on dense samples.
///
/// Inputs with fewer than three points on either side are returned as-is.
pub fn align_to_previous(previous: &[Point3], current: &[Point3]) -> Vec<Point3> {
    let n = current.len();
    let m = previous.len();
    if n < MIN_LOOP_POINTS || m < MIN_LOOP_POINTS {
        return current.to_vec();
    }

    let shared = n.min(m);
    let mut best_score = f64::MAX;
    let mut best_offset = 0;

    for offset in 0..n {
        let score: f64 = (0..shared)
            .map(|i| distance(previous[i], current[(i + offset) % n]))
            .sum();
        if score < best_score {
            best_score = score;
            best_offset = offset;
        }
    }

    debug!(offset = best_offset, "Aligned cross-section");
    let mut rotated = current.to_vec();
    rotated.rotate_left(best_offset);
    rotated
}

/// Returns `points` with the first point repeated at the end, unless the
/// last point already lies within [`CLOSURE_EPSILON`] of it.
pub fn close_loop(points: &[Point3]) -> Vec<Point3> {
    let mut closed = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if distance(first, last) > CLOSURE_EPSILON {
            closed.push(first);
        }
    }
    closed
}

fn closest_index(target: Point3, points: &[Point3]) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::MAX;
    for (i, p) in points.iter().enumerate() {
        let d = distance(target, *p);
        if d < best_distance {
            best_distance = d;
            best_index = i;
        }
    }
    best_index
}

/// Triangulates the band between two loops into `builder`.
///
/// Returns the number of triangles added. Sliver triangles are skipped, so
/// for closed point counts `n` and `m` the result lies between
/// `max(n, m) - 1` and `n + m - 2`.
///
/// # Example
///
/// ```rust
/// use loft_mesh::ops::bridge;
/// use loft_mesh::{MeshBuilder, Point3};
///
/// let square = |s: f64, z: f64| {
///     let lo = (1.0 - s) / 2.0;
///     let hi = lo + s;
///     vec![
///         Point3::new(lo, lo, z),
///         Point3::new(hi, lo, z),
///         Point3::new(hi, hi, z),
///         Point3::new(lo, hi, z),
///     ]
/// };
/// let mut builder = MeshBuilder::new();
/// let added = bridge(&square(1.0, 0.0), &square(0.8, 5.0), &mut builder);
/// assert_eq!(added, 8);
/// assert_eq!(builder.finish().vertex_count(), 8);
/// ```
pub fn bridge(lower: &[Point3], upper: &[Point3], builder: &mut MeshBuilder) -> usize {
    if lower.is_empty() || upper.is_empty() {
        return 0;
    }

    let start = closest_index(lower[0], upper);
    let mut upper = upper.to_vec();
    upper.rotate_left(start);

    let lower = close_loop(lower);
    let upper = close_loop(&upper);

    let before = builder.triangle_count();
    let mut add = |a: Point3, b: Point3, c: Point3| {
        builder.push_triangle(a, c, b);
    };

    let (mut i, mut j) = (0, 0);
    while i + 1 < lower.len() && j + 1 < upper.len() {
        let a = lower[i];
        let b = upper[j];
        let a_next = lower[i + 1];
        let b_next = upper[j + 1];

        if distance(a_next, b) < distance(a, b_next) {
            add(a, b, a_next);
            i += 1;
        } else {
            add(a, b, b_next);
            j += 1;
        }
    }

    while i + 1 < lower.len() {
        add(lower[i], upper[j], lower[i + 1]);
        i += 1;
    }
    while j + 1 < upper.len() {
        add(lower[i], upper[j], upper[j + 1]);
        j += 1;
    }

    builder.triangle_count() - before
}

/// Bridges every consecutive pair of cross-sections.
///
/// Each upper section is aligned to the (already aligned) section below it
/// before bridging. Pairs where either side has fewer than three points are
/// skipped. Returns the number of triangles added.
pub fn lateral_surface(curves: &[Vec<Point3>], builder: &mut MeshBuilder) -> usize {
    let Some(first) = curves.first() else {
        return 0;
    };

    let mut added = 0;
    let mut lower = first.clone();
    for upper in &curves[1..] {
        let aligned = align_to_previous(&lower, upper);
        if lower.len() >= MIN_LOOP_POINTS && aligned.len() >= MIN_LOOP_POINTS {
            added += bridge(&lower, &aligned, builder);
        }
        lower = aligned;
    }

    debug!(sections = curves.len(), triangles = added, "Built lateral surface");
    added
}
