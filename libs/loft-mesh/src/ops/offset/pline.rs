//! Offset collaborator backed by `cavalier_contours`.

use super::CurveOffset;
use crate::curve::Curve;
use crate::geometry::Point3;
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use loft_config::constants::{approx_zero, MATCH_TOLERANCE, MIN_LOOP_POINTS};
use tracing::debug;

/// Offsets closed curves with `cavalier_contours` parallel offsets.
///
/// Arcs survive the round trip as bulges. Results lie at the elevation of
/// the input's first point.
///
/// # Example
///
/// ```rust
/// use loft_mesh::ops::{CurveOffset, PlineOffset};
/// use loft_mesh::{Curve, Point3};
///
/// let square = Curve::closed(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 0.0),
///     Point3::new(0.0, 10.0, 0.0),
/// ]);
/// let inset = PlineOffset.offset(&square, -1.0, 0.01);
/// assert_eq!(inset.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlineOffset;

impl CurveOffset for PlineOffset {
    fn offset(&self, curve: &Curve, distance: f64, tolerance: f64) -> Vec<Curve> {
        if !curve.is_closed() || curve.len() < MIN_LOOP_POINTS {
            return Vec::new();
        }
        if approx_zero(distance) {
            return vec![curve.clone()];
        }

        let elevation = curve.first_point().map_or(0.0, |p| p.z);
        let pline = to_polyline(curve);
        if pline.vertex_count() < MIN_LOOP_POINTS {
            return Vec::new();
        }

        // Positive cavalier offsets go left of the tangent: inward for a
        // counter-clockwise loop.
        let amount = if pline.area() >= 0.0 { -distance } else { distance };

        let results: Vec<Curve> = pline
            .parallel_offset(amount)
            .iter()
            .filter_map(|shape| from_polyline(shape, elevation, tolerance))
            .collect();

        debug!(distance, loops = results.len(), "Offset curve");
        results
    }
}

fn to_polyline(curve: &Curve) -> Polyline<f64> {
    let (points, bulges) = dedup_vertices(
        curve.points().iter().copied().zip((0..curve.len()).map(|i| curve.bulge(i))),
        MATCH_TOLERANCE,
    );

    let mut pline = Polyline::new();
    for (p, bulge) in points.iter().zip(bulges) {
        pline.add_vertex(PlineVertex::new(p.x, p.y, bulge));
    }
    pline.set_is_closed(true);
    pline
}

fn from_polyline(shape: &Polyline<f64>, elevation: f64, tolerance: f64) -> Option<Curve> {
    let vertices = (0..shape.vertex_count()).map(|i| {
        let v = shape.at(i);
        (Point3::new(v.x, v.y, elevation), v.bulge)
    });
    let (points, bulges) = dedup_vertices(vertices, tolerance);
    if points.len() < MIN_LOOP_POINTS {
        return None;
    }
    Some(Curve::with_bulges(points, bulges, shape.is_closed()))
}

/// Drops vertices closer than `min_spacing` to the previous kept vertex,
/// including the wrap-around pair.
///
/// A dropped vertex hands its bulge to the kept vertex before it, since that
/// vertex now starts the dropped vertex's outgoing segment.
fn dedup_vertices(
    vertices: impl Iterator<Item = (Point3, f64)>,
    min_spacing: f64,
) -> (Vec<Point3>, Vec<f64>) {
    let mut points: Vec<Point3> = Vec::new();
    let mut bulges: Vec<f64> = Vec::new();

    for (p, bulge) in vertices {
        let too_close = points
            .last()
            .is_some_and(|prev| prev.distance(p) < min_spacing);
        if too_close {
            if let Some(prev_bulge) = bulges.last_mut() {
                *prev_bulge = bulge;
            }
        } else {
            points.push(p);
            bulges.push(bulge);
        }
    }

    if points.len() > 1 && points[0].distance(points[points.len() - 1]) < min_spacing {
        points.pop();
        bulges.pop();
    }
    (points, bulges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_moves_bulge_back() {
        let input = vec![
            (Point3::new(0.0, 0.0, 0.0), 0.0),
            (Point3::new(1.0, 0.0, 0.0), 0.1),
            (Point3::new(1.0, 1e-9, 0.0), 0.5),
            (Point3::new(1.0, 1.0, 0.0), 0.0),
        ];
        let (points, bulges) = dedup_vertices(input.into_iter(), 1e-6);
        assert_eq!(points.len(), 3);
        assert_eq!(bulges, vec![0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_dedup_wraps_around() {
        let input = vec![
            (Point3::new(0.0, 0.0, 0.0), 0.0),
            (Point3::new(1.0, 0.0, 0.0), 0.0),
            (Point3::new(1.0, 1.0, 0.0), 0.0),
            (Point3::new(0.0, 0.0, 0.0), 0.0),
        ];
        let (points, _) = dedup_vertices(input.into_iter(), 1e-6);
        assert_eq!(points.len(), 3);
    }
}
