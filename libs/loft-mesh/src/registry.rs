//! # Vertex Registry
//!
//! Maps point coordinates to dense vertex indices so every distinct position
//! in a mesh build receives exactly one index.
//!
//! Keys are coordinates quantized to [`REGISTRY_QUANTUM`]. Raw `f64` equality
//! would split `0.0` from `-0.0` and fragment vertices on binary noise left
//! by different arithmetic paths to the same point.
//!
//! Keys are exact for finite coordinates up to [`MAX_COORDINATE`] in
//! magnitude. Beyond that the `i64` keys saturate and distinct points would
//! merge, so [`MeshBuilder`](crate::MeshBuilder) rejects such triangles via
//! [`VertexRegistry::supports`].

use crate::geometry::Point3;
use crate::mesh::Mesh;
use loft_config::constants::{MAX_COORDINATE, REGISTRY_QUANTUM};
use std::collections::HashMap;

/// Quantized coordinate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey([i64; 3]);

impl VertexKey {
    fn quantize(point: Point3) -> Self {
        let q = |v: f64| (v / REGISTRY_QUANTUM).round() as i64;
        Self([q(point.x), q(point.y), q(point.z)])
    }
}

/// Point-to-index lookup shared by every producer in one mesh build.
///
/// # Example
///
/// ```rust
/// use loft_mesh::{Point3, VertexRegistry};
///
/// let mut registry = VertexRegistry::new();
/// let a = registry.add(Point3::new(1.0, 2.0, 3.0));
/// let b = registry.add(Point3::new(4.0, 5.0, 6.0));
/// assert_eq!(registry.add(Point3::new(1.0, 2.0, 3.0)), a);
/// assert_eq!((a, b), (0, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    vertices: Vec<Point3>,
    index: HashMap<VertexKey, u32>,
}

impl VertexRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `point` is finite and within [`MAX_COORDINATE`] on every
    /// axis, so its key is exact.
    pub fn supports(point: Point3) -> bool {
        point.is_finite() && point.abs().max_element() <= MAX_COORDINATE
    }

    /// Returns the index for `point`, allocating the next one if unseen.
    ///
    /// The first coordinate registered for a key is the one stored. Points
    /// outside [`supports`](Self::supports) get saturated keys and may merge.
    pub fn add(&mut self, point: Point3) -> u32 {
        let key = VertexKey::quantize(point);
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.vertices.len() as u32;
        self.vertices.push(point);
        self.index.insert(key, index);
        index
    }

    /// Looks up `point` without inserting it.
    pub fn get(&self, point: Point3) -> Option<u32> {
        self.index.get(&VertexKey::quantize(point)).copied()
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no vertex has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in index order.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Consumes the registry and pairs its vertices with `triangles`.
    pub fn into_mesh(self, triangles: Vec<[u32; 3]>) -> Mesh {
        Mesh::from_parts(self.vertices, triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_same_index() {
        let mut registry = VertexRegistry::new();
        let p = Point3::new(0.25, -1.5, 3.0);
        let first = registry.add(p);
        let second = registry.add(p);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_points_in_insertion_order() {
        let mut registry = VertexRegistry::new();
        let points: Vec<Point3> = (0..10)
            .map(|i| Point3::new(i as f64, (i * i) as f64, -(i as f64)))
            .collect();
        let indices: Vec<u32> = points.iter().map(|p| registry.add(*p)).collect();
        assert_eq!(indices, (0..10).collect::<Vec<u32>>());
        assert_eq!(registry.vertices(), points.as_slice());
    }

    #[test]
    fn test_signed_zero_collapses() {
        let mut registry = VertexRegistry::new();
        let a = registry.add(Point3::new(0.0, 1.0, 0.0));
        let b = registry.add(Point3::new(-0.0, 1.0, -0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_binary_noise_collapses() {
        let mut registry = VertexRegistry::new();
        let a = registry.add(Point3::new(0.1 + 0.2, 0.0, 0.0));
        let b = registry.add(Point3::new(0.3, 0.0, 0.0));
        assert_eq!(a, b);
        // First coordinate wins
        assert_eq!(registry.vertices()[0].x, 0.1 + 0.2);
    }

    #[test]
    fn test_nearby_points_stay_distinct() {
        let mut registry = VertexRegistry::new();
        let a = registry.add(Point3::new(1.0, 0.0, 0.0));
        let b = registry.add(Point3::new(1.0 + 1e-6, 0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_supports_finite_points_in_range() {
        assert!(VertexRegistry::supports(Point3::new(-MAX_COORDINATE, 0.0, 1.0)));
        assert!(!VertexRegistry::supports(Point3::new(2.0 * MAX_COORDINATE, 0.0, 0.0)));
        assert!(!VertexRegistry::supports(Point3::new(f64::NAN, 0.0, 0.0)));
        assert!(!VertexRegistry::supports(Point3::new(0.0, f64::INFINITY, 0.0)));
    }

    #[test]
    fn test_get_does_not_insert() {
        let mut registry = VertexRegistry::new();
        assert_eq!(registry.get(Point3::ONE), None);
        assert!(registry.is_empty());
        registry.add(Point3::ONE);
        assert_eq!(registry.get(Point3::ONE), Some(0));
    }

    #[test]
    fn test_into_mesh() {
        let mut registry = VertexRegistry::new();
        let a = registry.add(Point3::ZERO);
        let b = registry.add(Point3::X);
        let c = registry.add(Point3::Y);
        let mesh = registry.into_mesh(vec![[a, b, c]]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
    }
}
