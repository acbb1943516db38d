//! # Curves
//!
//! Ordered point sequences tagged open or closed, with optional per-vertex
//! bulge values describing circular arcs in the XY plane.
//!
//! ## Bulge Convention
//!
//! The bulge stored at vertex `i` describes the segment from `i` to `i + 1`
//! (wrapping for closed curves): `bulge = tan(sweep / 4)`. Zero is a straight
//! line, positive sweeps counter-clockwise, `1.0` is a half circle.
//!
//! ## Closing Point
//!
//! A closed curve never stores its first point again at the end. Constructors
//! strip a trailing duplicate so every producer upholds this.

use crate::geometry::{self, distance, Extents, Point3};
use loft_config::constants::{approx_zero, EPSILON, MATCH_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

// =============================================================================
// CURVE
// =============================================================================

/// An ordered sequence of points, open or closed.
///
/// # Example
///
/// ```rust
/// use loft_mesh::{Curve, Point3};
///
/// let square = Curve::closed(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 0.0), // stripped
/// ]);
/// assert_eq!(square.len(), 4);
/// assert!((square.perimeter() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point3>,
    /// Either empty (all straight) or one value per point.
    bulges: Vec<f64>,
    closed: bool,
}

impl Curve {
    /// Creates an open polyline.
    pub fn open(points: Vec<Point3>) -> Self {
        Self {
            points,
            bulges: Vec::new(),
            closed: false,
        }
    }

    /// Creates a closed polyline, stripping a duplicated closing point.
    pub fn closed(points: Vec<Point3>) -> Self {
        let mut curve = Self {
            points,
            bulges: Vec::new(),
            closed: true,
        };
        curve.strip_closing_duplicate();
        curve
    }

    /// Creates a curve whose segments may be arcs.
    ///
    /// `bulges` is padded with zeros or truncated to the point count.
    pub fn with_bulges(points: Vec<Point3>, mut bulges: Vec<f64>, closed: bool) -> Self {
        bulges.resize(points.len(), 0.0);
        let mut curve = Self {
            points,
            bulges,
            closed,
        };
        if closed {
            curve.strip_closing_duplicate();
        }
        curve
    }

    /// Creates a full circle in the XY plane at elevation `center.z`.
    ///
    /// The circle is made of two half-circle arcs, starting at angle 0 and
    /// running counter-clockwise.
    pub fn circle(center: Point3, radius: f64) -> Self {
        Self::with_bulges(
            vec![
                center + Point3::new(radius, 0.0, 0.0),
                center + Point3::new(-radius, 0.0, 0.0),
            ],
            vec![1.0, 1.0],
            true,
        )
    }

    fn strip_closing_duplicate(&mut self) {
        if self.points.len() > 1 {
            let first = self.points[0];
            let last = self.points[self.points.len() - 1];
            if distance(first, last) <= MATCH_TOLERANCE {
                self.points.pop();
                if self.bulges.len() > self.points.len() {
                    // The bulge of the dropped vertex is unused; the bulge at
                    // the new last vertex now describes the closing segment.
                    self.bulges.pop();
                }
            }
        }
    }

    /// The curve's points (no closing duplicate for closed curves).
    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consumes the curve and returns its points.
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    /// Bulge of the segment starting at vertex `index`.
    #[inline]
    pub fn bulge(&self, index: usize) -> f64 {
        self.bulges.get(index).copied().unwrap_or(0.0)
    }

    /// True when any segment is an arc.
    pub fn has_arcs(&self) -> bool {
        self.bulges.iter().any(|b| !approx_zero(*b))
    }

    /// True for closed curves.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the curve.
    pub fn first_point(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Point where a walk along the curve ends.
    ///
    /// For a closed curve that is the first point again.
    pub fn end_point(&self) -> Option<Point3> {
        if self.closed {
            self.first_point()
        } else {
            self.points.last().copied()
        }
    }

    /// Number of segments: `n` for closed curves, `n - 1` for open ones.
    pub fn segment_count(&self) -> usize {
        match (self.closed, self.points.len()) {
            (_, 0 | 1) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }

    /// Decomposes the curve into line and arc primitives.
    pub fn primitives(&self) -> Vec<Primitive> {
        let n = self.points.len();
        (0..self.segment_count())
            .map(|i| {
                let start = self.points[i];
                let end = self.points[(i + 1) % n];
                Primitive::from_bulge(start, end, self.bulge(i))
            })
            .collect()
    }

    /// Total length along all primitives.
    pub fn perimeter(&self) -> f64 {
        self.primitives().iter().map(Primitive::length).sum()
    }

    /// Evaluates the point at normalized arc-length parameter `t` in `[0, 1]`.
    ///
    /// Returns `None` for an empty curve.
    pub fn point_at(&self, t: f64) -> Option<Point3> {
        let perimeter = self.perimeter();
        self.point_at_length(t.clamp(0.0, 1.0) * perimeter)
    }

    /// Evaluates the point at arc length `s` from the start.
    pub fn point_at_length(&self, s: f64) -> Option<Point3> {
        let first = self.first_point()?;
        let mut remaining = s.max(0.0);
        let mut last = first;
        for primitive in self.primitives() {
            let len = primitive.length();
            if remaining <= len {
                let fraction = if len < EPSILON { 0.0 } else { remaining / len };
                return Some(primitive.point_at(fraction));
            }
            remaining -= len;
            last = primitive.end();
        }
        Some(last)
    }

    /// Returns a copy with every point moved to elevation `z`.
    pub fn with_elevation(&self, z: f64) -> Self {
        let mut curve = self.clone();
        for p in &mut curve.points {
            p.z = z;
        }
        curve
    }

    /// Arithmetic mean of the points.
    pub fn centroid(&self) -> Point3 {
        geometry::centroid(&self.points)
    }

    /// Bounding box of the curve, including the outermost points of arcs.
    pub fn extents(&self) -> Option<Extents> {
        let mut points = self.points.clone();
        for primitive in self.primitives() {
            if let Primitive::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } = primitive
            {
                let (lo, hi) = if sweep >= 0.0 {
                    (start_angle, start_angle + sweep)
                } else {
                    (start_angle + sweep, start_angle)
                };
                let mut quadrant = (lo / FRAC_PI_2).ceil();
                while quadrant * FRAC_PI_2 <= hi {
                    points.push(arc_point(center, radius, quadrant * FRAC_PI_2));
                    quadrant += 1.0;
                }
            }
        }
        Extents::of(&points)
    }
}

// =============================================================================
// PRIMITIVES
// =============================================================================

/// A single line or arc segment of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Straight segment.
    Line {
        /// Segment start.
        start: Point3,
        /// Segment end.
        end: Point3,
    },
    /// Circular arc in the XY plane at elevation `center.z`.
    Arc {
        /// Arc center.
        center: Point3,
        /// Arc radius.
        radius: f64,
        /// Angle of the start point in radians.
        start_angle: f64,
        /// Signed sweep in radians, positive counter-clockwise.
        sweep: f64,
    },
}

impl Primitive {
    /// Builds the primitive for the segment `start → end` with the given bulge.
    ///
    /// Near-zero bulges and near-zero chords produce lines.
    pub fn from_bulge(start: Point3, end: Point3, bulge: f64) -> Self {
        let chord = (end - start).truncate();
        let chord_len = chord.length();
        if approx_zero(bulge) || chord_len < EPSILON {
            return Primitive::Line { start, end };
        }

        let sweep = 4.0 * bulge.atan();
        let radius = chord_len * (1.0 + bulge * bulge) / (4.0 * bulge.abs());

        // Center lies on the chord's left normal for positive bulges
        let dir = chord / chord_len;
        let normal = glam::DVec2::new(-dir.y, dir.x);
        let mid = (start.truncate() + end.truncate()) * 0.5;
        let center_offset = chord_len * (1.0 - bulge * bulge) / (4.0 * bulge);
        let center2 = mid + normal * center_offset;

        let start_angle = (start.y - center2.y).atan2(start.x - center2.x);
        Primitive::Arc {
            center: Point3::new(center2.x, center2.y, start.z),
            radius,
            start_angle,
            sweep,
        }
    }

    /// Length of the primitive; `|sweep| * radius` for arcs.
    pub fn length(&self) -> f64 {
        match *self {
            Primitive::Line { start, end } => distance(start, end),
            Primitive::Arc { radius, sweep, .. } => sweep.abs() * radius,
        }
    }

    /// Start point.
    pub fn start(&self) -> Point3 {
        self.point_at(0.0)
    }

    /// End point.
    pub fn end(&self) -> Point3 {
        self.point_at(1.0)
    }

    /// Point at `fraction` in `[0, 1]` along the primitive.
    pub fn point_at(&self, fraction: f64) -> Point3 {
        match *self {
            Primitive::Line { start, end } => start.lerp(end, fraction),
            Primitive::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => arc_point(center, radius, start_angle + sweep * fraction),
        }
    }
}

/// Point on a circle of `radius` around `center` at `angle` radians.
#[inline]
pub(crate) fn arc_point(center: Point3, radius: f64, angle: f64) -> Point3 {
    Point3::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
        center.z,
    )
}

/// Bulge for an arc of the given signed sweep.
#[inline]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn unit_square() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_closed_strips_duplicate() {
        let mut pts = unit_square();
        pts.push(Point3::new(0.0, 0.0, 0.0));
        let curve = Curve::closed(pts);
        assert_eq!(curve.len(), 4);
        assert!(curve.is_closed());
    }

    #[test]
    fn test_open_keeps_duplicate() {
        let mut pts = unit_square();
        pts.push(Point3::new(0.0, 0.0, 0.0));
        assert_eq!(Curve::open(pts).len(), 5);
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(Curve::closed(unit_square()).segment_count(), 4);
        assert_eq!(Curve::open(unit_square()).segment_count(), 3);
        assert_eq!(Curve::open(vec![Point3::ZERO]).segment_count(), 0);
    }

    #[test]
    fn test_perimeter_closed_and_open() {
        assert_abs_diff_eq!(Curve::closed(unit_square()).perimeter(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Curve::open(unit_square()).perimeter(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_half_circle_bulge() {
        let p = Primitive::from_bulge(Point3::new(1.0, 0.0, 2.0), Point3::new(-1.0, 0.0, 2.0), 1.0);
        match p {
            Primitive::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(center.z, 2.0);
                assert_abs_diff_eq!(radius, 1.0, epsilon = 1e-12);
                assert_abs_diff_eq!(start_angle, 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(sweep, PI, epsilon = 1e-12);
            }
            Primitive::Line { .. } => panic!("expected arc"),
        }
        assert_abs_diff_eq!(p.length(), PI, epsilon = 1e-12);
        // Counter-clockwise half circle passes through (0, 1)
        let mid = p.point_at(0.5);
        assert_abs_diff_eq!(mid.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noise_bulge_is_straight() {
        let curve = Curve::with_bulges(unit_square(), vec![1e-12, -1e-12], true);
        assert!(!curve.has_arcs());
        let p = Primitive::from_bulge(Point3::ZERO, Point3::X, 1e-12);
        assert!(matches!(p, Primitive::Line { .. }));
    }

    #[test]
    fn test_negative_bulge_sweeps_clockwise() {
        let p = Primitive::from_bulge(Point3::new(1.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0), -1.0);
        let mid = p.point_at(0.5);
        assert_abs_diff_eq!(mid.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_arc_endpoints() {
        let bulge = bulge_from_sweep(FRAC_PI_2);
        let start = Point3::new(1.0, 0.0, 0.0);
        let end = Point3::new(0.0, 1.0, 0.0);
        let p = Primitive::from_bulge(start, end, bulge);
        assert!(p.start().abs_diff_eq(start, 1e-12));
        assert!(p.end().abs_diff_eq(end, 1e-12));
        assert_abs_diff_eq!(p.length(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_perimeter() {
        let circle = Curve::circle(Point3::new(5.0, 5.0, 1.0), 2.0);
        assert!(circle.has_arcs());
        assert_eq!(circle.primitives().len(), 2);
        assert_abs_diff_eq!(circle.perimeter(), 4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_extents_include_arc_extremes() {
        let ext = Curve::circle(Point3::ZERO, 2.0).extents().unwrap();
        assert_abs_diff_eq!(ext.width(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ext.height(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at_walks_segments() {
        let curve = Curve::open(unit_square());
        let p = curve.point_at(0.5).unwrap();
        assert!(p.abs_diff_eq(Point3::new(1.0, 0.5, 0.0), 1e-12));
        assert!(curve.point_at(1.0).unwrap().abs_diff_eq(Point3::new(0.0, 1.0, 0.0), 1e-12));
        assert!(curve.point_at(0.0).unwrap().abs_diff_eq(Point3::ZERO, 1e-12));
    }

    #[test]
    fn test_point_at_empty_curve() {
        assert!(Curve::default().point_at(0.5).is_none());
    }

    #[test]
    fn test_end_point() {
        assert_eq!(Curve::closed(unit_square()).end_point(), Some(Point3::ZERO));
        assert_eq!(
            Curve::open(unit_square()).end_point(),
            Some(Point3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_with_elevation_clones() {
        let base = Curve::closed(unit_square());
        let raised = base.with_elevation(7.0);
        assert!(raised.points().iter().all(|p| p.z == 7.0));
        assert!(base.points().iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_bulges_padded() {
        let curve = Curve::with_bulges(unit_square(), vec![0.5], true);
        assert_eq!(curve.bulge(0), 0.5);
        assert_eq!(curve.bulge(3), 0.0);
        assert_eq!(curve.bulge(10), 0.0);
    }
}
