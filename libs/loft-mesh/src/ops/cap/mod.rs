//! # Caps
//!
//! Closes the open ends of a loft.
//!
//! - [`fan_cap`]: one fan around a given center
//! - [`convex_cap`] / [`convex_cap_into`]: split a non-convex ring into convex
//!   runs and fan each around its own centroid
//! - [`multi_ring_cap`]: one fan per ring, for a tip that split into
//!   several loops


use crate::curve::Curve;
use crate::geometry::{centroid, Point3};
use crate::mesh::{Mesh, MeshBuilder};
use crate::ops::segment::segment_convex_runs;
use crate::ops::simplify::simplify;
use loft_config::constants::MIN_LOOP_POINTS;
use tracing::debug;

/// Fans `ring` around `center`, wrap-around edge included.
///
/// Emits `(center, p[k], p[k + 1])` per edge. Rings with fewer than three
/// points are skipped. Returns the number of triangles added.
pub fn fan_cap(ring: &[Point3], center: Point3, builder: &mut MeshBuilder) -> usize {
    let n = ring.len();
    if n < MIN_LOOP_POINTS {
        return 0;
    }

    (0..n)
        .filter(|&k| builder.push_triangle(center, ring[k], ring[(k + 1) % n]))
        .count()
}

/// Caps a possibly non-convex ring, one independent mesh per convex run.
///
/// The ring is simplified with `tolerance`, split by
/// [`segment_convex_runs`], and each run is fanned around its centroid.
pub fn convex_cap(ring: &[Point3], tolerance: f64) -> Vec<Mesh> {
    convex_runs(ring, tolerance)
        .iter()
        .map(|run| {
            let mut builder = MeshBuilder::new();
            fan_cap(run, centroid(run), &mut builder);
            builder.finish()
        })
        .collect()
}

/// Like [`convex_cap`], but writes every run into one shared builder.
///
/// Returns the number of triangles added.
pub fn convex_cap_into(ring: &[Point3], tolerance: f64, builder: &mut MeshBuilder) -> usize {
    convex_runs(ring, tolerance)
        .iter()
        .map(|run| fan_cap(run, centroid(run), builder))
        .sum()
}

fn convex_runs(ring: &[Point3], tolerance: f64) -> Vec<Vec<Point3>> {
    let simplified = simplify(ring, tolerance);
    let runs = segment_convex_runs(&simplified);
    debug!(runs = runs.len(), "Convex cap");
    runs
}

/// Fans each ring around its matching center.
///
/// Rings and centers are paired up to the shorter of the two lists. Open
/// rings and rings with fewer than three points are skipped. Returns the
/// number of triangles added.
pub fn multi_ring_cap(rings: &[Curve], centers: &[Point3], builder: &mut MeshBuilder) -> usize {
    rings
        .iter()
        .zip(centers)
        .filter(|(ring, _)| ring.is_closed() && ring.len() >= MIN_LOOP_POINTS)
        .map(|(ring, center)| fan_cap(ring.points(), *center, builder))
        .sum()
}
