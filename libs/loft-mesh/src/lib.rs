//! # Loft Mesh
//!
//! Triangulated loft surfaces from stacks of curve cross-sections.
//! Curves go in as points with optional arc bulges; an indexed triangle
//! mesh with deduplicated vertices comes out.
//!
//! ## Architecture
//!
//! ```text
//! Curve → simplify / offset layers / sample → align + bridge → caps → Mesh
//! ```
//!
//! ## Modules
//!
//! - [`curve`]: polylines with bulges, arc-aware measures
//! - [`ops`]: the individual geometric steps
//! - [`pipeline`]: configured end-to-end builds ([`LoftBuilder`])
//! - [`registry`] / [`mesh`]: vertex deduplication and the output mesh
//!
//! Offsetting is delegated to an [`ops::offset::CurveOffset`] collaborator;
//! [`ops::offset::PlineOffset`] is the default one.
//!
//! ## Usage
//!
//! ```rust
//! use loft_mesh::{MeshBuilder, Point3};
//! use loft_mesh::ops::{bridge, fan_cap};
//!
//! let square = |size: f64, z: f64| -> Vec<Point3> {
//!     let lo = (1.0 - size) / 2.0;
//!     let hi = lo + size;
//!     vec![
//!         Point3::new(lo, lo, z),
//!         Point3::new(hi, lo, z),
//!         Point3::new(hi, hi, z),
//!         Point3::new(lo, hi, z),
//!     ]
//! };
//!
//! let mut builder = MeshBuilder::new();
//! bridge(&square(1.0, 0.0), &square(0.5, 1.0), &mut builder);
//! fan_cap(&square(0.5, 1.0), Point3::new(0.5, 0.5, 1.0), &mut builder);
//!
//! let mesh = builder.finish();
//! assert_eq!(mesh.triangle_count(), 12);
//! assert_eq!(mesh.vertex_count(), 9);
//! ```

pub mod curve;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod ops;
pub mod pipeline;
pub mod registry;

pub use curve::{Curve, Primitive};
pub use diagnostics::Diagnostic;
pub use error::{LoftError, LoftResult};
pub use geometry::{Extents, Point3, Vec3};
pub use mesh::{Mesh, MeshBuilder};
pub use pipeline::{CapStyle, LoftBuilder, LoftOutput};
pub use registry::VertexRegistry;
