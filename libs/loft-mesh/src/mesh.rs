//! # Mesh Data Structure
//!
//! Triangle mesh output plus the builder every pipeline stage writes into.
//!
//! Producers never add vertices to a [`Mesh`] directly: they push triangles by
//! position into a [`MeshBuilder`], which resolves each corner through the
//! shared [`VertexRegistry`].

use crate::geometry::{is_degenerate, triangle_area, Extents, Point3};
use crate::registry::VertexRegistry;
use loft_config::constants::DEGENERATE_AREA;
use serde::{Deserialize, Serialize};

/// A triangle mesh with deduplicated vertices and index triples.
///
/// # Example
///
/// ```rust
/// use loft_mesh::{MeshBuilder, Point3};
///
/// let mut builder = MeshBuilder::new();
/// builder.push_triangle(Point3::ZERO, Point3::X, Point3::Y);
/// let mesh = builder.finish();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<Point3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from raw parts.
    pub fn from_parts(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corner positions of triangle `index`.
    pub fn triangle_points(&self, index: usize) -> [Point3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Sum of all triangle areas.
    pub fn surface_area(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.triangle_points(i);
                triangle_area(a, b, c)
            })
            .sum()
    }

    /// Computes the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Extents> {
        Extents::of(&self.vertices)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No triangle has an area below [`DEGENERATE_AREA`]
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            triangle_area(v0, v1, v2) >= DEGENERATE_AREA
        })
    }
}

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Accumulates triangles for one mesh build.
///
/// Owns the build's [`VertexRegistry`]; dropped or finished at the end of the
/// build, never shared across builds.
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    registry: VertexRegistry,
    triangles: Vec<[u32; 3]>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the triangle `(a, b, c)` exactly as ordered.
    ///
    /// Returns false, adding nothing, when the triangle is degenerate or a
    /// corner lies outside [`VertexRegistry::supports`].
    pub fn push_triangle(&mut self, a: Point3, b: Point3, c: Point3) -> bool {
        if ![a, b, c].into_iter().all(VertexRegistry::supports) {
            return false;
        }
        if is_degenerate(a, b, c) {
            return false;
        }
        let ia = self.registry.add(a);
        let ib = self.registry.add(b);
        let ic = self.registry.add(c);
        if ia == ib || ib == ic || ia == ic {
            return false;
        }
        self.triangles.push([ia, ib, ic]);
        true
    }

    /// Number of triangles added so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The shared vertex registry.
    #[inline]
    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    /// Consumes the builder and returns the finished mesh.
    pub fn finish(self) -> Mesh {
        self.registry.into_mesh(self.triangles)
    }
}
