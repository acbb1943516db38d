//! # Convex Segmentation
//!
//! Splits a closed loop into runs that can each be fan-capped on their own.
//!
//! Every vertex gets an interior angle in degrees, oriented by the loop's
//! winding: below 180° at convex vertices, above 180° at reflex ones. A run
//! ends at each reflex vertex, and the next run starts from that same vertex.

#[cfg(test)]
mod tests;

use crate::geometry::{angle_between, cross, signed_area_xy, vector_between, Point3};
use loft_config::constants::MIN_LOOP_POINTS;
use tracing::debug;

/// Interior angle at `curr`, in degrees within `[0, 360)`.
///
/// `orientation` is the sign of the loop's signed area: positive for
/// counter-clockwise loops. Straight vertices and zero-length edges give
/// 180°.
pub fn turning_angle(prev: Point3, curr: Point3, next: Point3, orientation: f64) -> f64 {
    let incoming = vector_between(prev, curr);
    let outgoing = vector_between(curr, next);
    let deflection = angle_between(incoming, outgoing).to_degrees();
    let turn = cross(incoming, outgoing).z * orientation.signum();
    if turn < 0.0 {
        180.0 + deflection
    } else {
        180.0 - deflection
    }
}

/// Splits `points` (a closed loop without a repeated closing point) into
/// convex runs.
///
/// Each run has at least three points. When the loop has no reflex vertex a
/// single run holding the whole loop is returned. When splits occur, the
/// last run is closed back onto the loop's first point so the runs cover
/// every edge between them.
///
/// # Example
///
/// ```rust
/// use loft_mesh::ops::segment_convex_runs;
/// use loft_mesh::Point3;
///
/// // Square with one corner pushed in
/// let notch = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
///     Point3::new(4.0, 4.0, 0.0),
///     Point3::new(2.0, 2.0, 0.0),
///     Point3::new(0.0, 4.0, 0.0),
/// ];
/// let runs = segment_convex_runs(&notch);
/// assert_eq!(runs.len(), 2);
/// ```
pub fn segment_convex_runs(points: &[Point3]) -> Vec<Vec<Point3>> {
    let count = points.len();
    if count < MIN_LOOP_POINTS {
        return Vec::new();
    }
    let orientation = signed_area_xy(points);

    let mut runs = Vec::new();
    let mut current: Vec<Point3> = Vec::new();
    let mut split = false;

    for i in 0..count {
        let prev = points[(i + count - 1) % count];
        let curr = points[i];
        let next = points[(i + 1) % count];

        current.push(curr);

        if turning_angle(prev, curr, next, orientation) > 180.0 {
            if current.len() >= MIN_LOOP_POINTS {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            current.push(curr);
            split = true;
        }
    }

    if split && current.first() != Some(&points[0]) {
        current.push(points[0]);
    }
    if current.len() >= MIN_LOOP_POINTS {
        runs.push(current);
    }

    debug!(points = count, runs = runs.len(), "Segmented loop into convex runs");
    runs
}
