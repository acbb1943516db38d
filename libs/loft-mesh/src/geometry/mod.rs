//! # Geometry Kernel
//!
//! Pure vector helpers shared by every pipeline stage. Points and vectors are
//! both `glam::DVec3`; the two aliases only document intent.
//!
//! Zero-length vectors are guarded with [`EPSILON`] instead of producing NaN.


use loft_config::constants::{DEGENERATE_AREA, EPSILON};
use serde::{Deserialize, Serialize};

pub use glam::DVec3 as Point3;
pub use glam::DVec3 as Vec3;

/// Vector pointing from `a` to `b`.
#[inline]
pub fn vector_between(a: Point3, b: Point3) -> Vec3 {
    b - a
}

/// Component-wise `a - b`.
#[inline]
pub fn subtract(a: Point3, b: Point3) -> Vec3 {
    a - b
}

/// Cross product `u × v`.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// Euclidean length of `v`.
#[inline]
pub fn length(v: Vec3) -> f64 {
    v.length()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point3, b: Point3) -> f64 {
    length(vector_between(a, b))
}

/// Arithmetic mean of the points, or the origin for an empty slice.
///
/// # Example
///
/// ```rust
/// use loft_mesh::geometry::{centroid, Point3};
///
/// let c = centroid(&[Point3::ZERO, Point3::new(2.0, 4.0, 6.0)]);
/// assert_eq!(c, Point3::new(1.0, 2.0, 3.0));
/// ```
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::ZERO;
    }
    let sum = points.iter().fold(Point3::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// Returns 0 when either vector is shorter than [`EPSILON`]. The cosine is
/// clamped before `acos` so rounding never produces NaN.
///
/// # Example
///
/// ```rust
/// use loft_mesh::geometry::{angle_between, Vec3};
///
/// let a = angle_between(Vec3::X, Vec3::Y);
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(angle_between(Vec3::ZERO, Vec3::Y), 0.0);
/// ```
pub fn angle_between(u: Vec3, v: Vec3) -> f64 {
    let len_u = length(u);
    let len_v = length(v);
    if len_u < EPSILON || len_v < EPSILON {
        return 0.0;
    }
    let cos_theta = (u.dot(v) / (len_u * len_v)).clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// Area of the triangle `abc`: half the cross-product magnitude.
#[inline]
pub fn triangle_area(a: Point3, b: Point3, c: Point3) -> f64 {
    length(cross(vector_between(a, b), vector_between(a, c))) * 0.5
}

/// True when the triangle's area is below [`DEGENERATE_AREA`].
#[inline]
pub fn is_degenerate(a: Point3, b: Point3, c: Point3) -> bool {
    triangle_area(a, b, c) < DEGENERATE_AREA
}

/// Signed area of the loop projected onto the XY plane.
///
/// Positive for counter-clockwise loops, negative for clockwise ones. The
/// loop is implicitly closed from the last point back to the first.
pub fn signed_area_xy(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice * 0.5
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Extents {
    /// Computes the extents of `points`, or `None` when empty.
    pub fn of(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Size along X.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Size along Y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Size along Z.
    #[inline]
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Length of the box diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        distance(self.min, self.max)
    }
}
