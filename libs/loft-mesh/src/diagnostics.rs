//! # Diagnostics
//!
//! Non-fatal events reported alongside a mesh. A build that produces
//! diagnostics still succeeds; the caller decides whether to surface them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition encountered during a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The offset collaborator returned nothing for this layer.
    SkippedLayer {
        /// Requested offset distance.
        offset: f64,
        /// Requested elevation.
        elevation: f64,
    },
    /// A curve had too few points to take part in triangulation.
    DegenerateCurve {
        /// Position of the curve in its stage's input.
        index: usize,
        /// Points remaining after processing.
        points: usize,
    },
    /// A binary search found no valid value in its interval.
    NoConvergence {
        /// Lower bound searched.
        min: f64,
        /// Upper bound searched.
        max: f64,
    },
    /// Fewer than two usable curves were left for the lateral surface.
    InsufficientCurves {
        /// Usable curves found.
        found: usize,
    },
    /// Cap rings and centers had different lengths; the extras were ignored.
    MismatchedRings {
        /// Number of rings.
        rings: usize,
        /// Number of centers.
        centers: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedLayer { offset, elevation } => write!(
                f,
                "Offset {offset} at elevation {elevation} produced no curves; layer skipped"
            ),
            Diagnostic::DegenerateCurve { index, points } => {
                write!(f, "Curve {index} has only {points} points; skipped")
            }
            Diagnostic::NoConvergence { min, max } => {
                write!(f, "No valid offset found in [{min}, {max}]")
            }
            Diagnostic::InsufficientCurves { found } => {
                write!(f, "Need at least 2 curves to loft, found {found}")
            }
            Diagnostic::MismatchedRings { rings, centers } => {
                write!(f, "{rings} rings but {centers} centers; extras ignored")
            }
        }
    }
}
