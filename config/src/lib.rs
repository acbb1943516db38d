//! # Loft Config
//!
//! Centralized tolerances and tunable parameters for the loft mesh pipeline.
//! Every epsilon, search bound and default density lives here so the geometry
//! crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use loft_config::constants::{approx_zero, EPSILON, DEGENERATE_AREA};
//!
//! // Vectors shorter than EPSILON are treated as zero-length
//! let length: f64 = 1e-9;
//! assert!(length < EPSILON);
//! assert!(approx_zero(1e-12));
//!
//! // Triangles below DEGENERATE_AREA never reach the output mesh
//! assert!(DEGENERATE_AREA > EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Unit Agnostic**: Values are in drawing units, conversion happens upstream
//! - **Validated Snapshots**: [`constants::PipelineConfig`] rejects values that
//!   would stall a sampling walk or a binary search

pub mod constants;
