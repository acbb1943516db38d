//! # Configuration Constants
//!
//! Centralized constants for the loft pipeline. Geometry predicates, search
//! termination, vertex deduplication and default sampling densities are all
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point guards for vectors and triangles
//! - **Search**: Binary search and offset tolerances
//! - **Sampling**: Default densities and simplification tolerances
//! - **Adaptive**: Size-driven parameter ranges

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length below which a vector is treated as zero.
///
/// Angle computations return 0 instead of dividing by a vanishing length.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::EPSILON;
///
/// let len: f64 = 1e-9;
/// assert!(len < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-8;

/// Minimum triangle area accepted into a mesh.
///
/// Candidate triangles whose area (half the cross-product magnitude) falls
/// below this value are dropped by the bridging triangulator.
pub const DEGENERATE_AREA: f64 = 1e-6;

/// Distance above which a loop's first and last points are considered apart.
///
/// The bridging triangulator appends the first point when the loop is not
/// already closed by this measure.
pub const CLOSURE_EPSILON: f64 = 1e-6;

/// Tolerance for matching a sampled curve's first and last points.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::MATCH_TOLERANCE;
///
/// let gap: f64 = 1e-9;
/// assert!(gap <= MATCH_TOLERANCE);
/// ```
pub const MATCH_TOLERANCE: f64 = 1e-6;

/// Quantization step for vertex registry keys.
///
/// Coordinates are divided by this value and rounded to `i64`, so binary
/// noise below the quantum maps to the same vertex.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::REGISTRY_QUANTUM;
///
/// fn key(value: f64) -> i64 {
///     (value / REGISTRY_QUANTUM).round() as i64
/// }
///
/// assert_eq!(key(0.1 + 0.2), key(0.3));
/// assert_eq!(key(-0.0), key(0.0));
/// ```
pub const REGISTRY_QUANTUM: f64 = 1e-9;

/// Largest coordinate magnitude the vertex registry keys exactly.
///
/// `i64` keys at [`REGISTRY_QUANTUM`] saturate near 9.2e9, where distinct
/// points would share a key. Triangles reaching past this bound are
/// rejected.
pub const MAX_COORDINATE: f64 = 1e9;

/// Minimum number of points for a loop to be triangulated or capped.
pub const MIN_LOOP_POINTS: usize = 3;

// =============================================================================
// SEARCH CONSTANTS
// =============================================================================

/// Interval width at which offset binary searches stop.
pub const SEARCH_TOLERANCE: f64 = 0.01;

/// Tolerance forwarded to the offset collaborator.
pub const OFFSET_TOLERANCE: f64 = 0.01;

/// Hard cap on binary search iterations.
///
/// Halving any finite interval below [`SEARCH_TOLERANCE`] takes far fewer
/// steps; the cap only matters for non-finite bounds.
pub const MAX_SEARCH_ITERATIONS: usize = 128;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default Douglas-Peucker tolerance for cross-section curves.
pub const DEFAULT_DP_TOLERANCE: f64 = 0.001;

/// Default sampling step (base density) for cross-section curves.
pub const DEFAULT_SAMPLING_STEP: f64 = 0.005;

/// Douglas-Peucker tolerance applied to a normalized generatrix.
pub const GENERATRIX_TOLERANCE: f64 = 0.1;

/// Chord step used when linearizing arcs of a generatrix.
pub const ARC_TOLERANCE: f64 = 0.01;

/// Base density used when lofting between two open curves.
pub const OPEN_PAIR_DENSITY: f64 = 0.05;

/// Minimum step used when lofting between two open curves.
pub const OPEN_PAIR_MIN_STEP: f64 = 0.05;

/// Simplification tolerance used when lofting between two open curves.
pub const OPEN_PAIR_TOLERANCE: f64 = 0.02;

// =============================================================================
// ADAPTIVE PARAMETER RANGES
// =============================================================================

/// Object diagonal at which adaptive parameters saturate.
pub const ADAPTIVE_REFERENCE_SIZE: f64 = 1000.0;

/// Douglas-Peucker tolerance range `(min, max)` for adaptive parameters.
pub const ADAPTIVE_DP_RANGE: (f64, f64) = (0.01, 0.3);

/// Sampling step range `(min, max)` for adaptive parameters.
pub const ADAPTIVE_STEP_RANGE: (f64, f64) = (0.2, 2.0);

// =============================================================================
// PIPELINE CONFIG
// =============================================================================

/// Validated snapshot of the pipeline's tunable parameters.
///
/// # Examples
/// ```
/// use loft_config::constants::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.sampling_step > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Douglas-Peucker tolerance for sampled cross-sections.
    pub dp_tolerance: f64,
    /// Base sampling density for cross-sections.
    pub sampling_step: f64,
    /// Tolerance forwarded to the offset collaborator.
    pub offset_tolerance: f64,
    /// Interval width at which binary searches stop.
    pub search_tolerance: f64,
    /// Douglas-Peucker tolerance for the generatrix.
    pub generatrix_tolerance: f64,
    /// Chord step used when linearizing generatrix arcs.
    pub arc_tolerance: f64,
}

impl PipelineConfig {
    /// Builds a configuration from the two most-tuned values, validating them.
    ///
    /// The tolerance may be zero; the step must be strictly positive.
    ///
    /// # Examples
    /// ```
    /// use loft_config::constants::{ConfigError, PipelineConfig};
    /// let cfg = PipelineConfig::new(0.01, 0.5).expect("valid config");
    /// assert_eq!(cfg.sampling_step, 0.5);
    ///
    /// let err = PipelineConfig::new(0.01, 0.0).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidStep(0.0));
    /// ```
    pub fn new(dp_tolerance: f64, sampling_step: f64) -> Result<Self, ConfigError> {
        Self {
            dp_tolerance,
            sampling_step,
            ..Self::default()
        }
        .validated()
    }

    /// Checks every field and returns the configuration unchanged when valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.dp_tolerance >= 0.0 && self.dp_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.dp_tolerance));
        }
        if !(self.generatrix_tolerance >= 0.0 && self.generatrix_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.generatrix_tolerance));
        }
        if !(self.sampling_step > 0.0 && self.sampling_step.is_finite()) {
            return Err(ConfigError::InvalidStep(self.sampling_step));
        }
        if !(self.arc_tolerance > 0.0 && self.arc_tolerance.is_finite()) {
            return Err(ConfigError::InvalidStep(self.arc_tolerance));
        }
        if !(self.offset_tolerance > 0.0 && self.offset_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.offset_tolerance));
        }
        if !(self.search_tolerance > 0.0 && self.search_tolerance.is_finite()) {
            return Err(ConfigError::InvalidSearchTolerance(self.search_tolerance));
        }
        Ok(self)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dp_tolerance: DEFAULT_DP_TOLERANCE,
            sampling_step: DEFAULT_SAMPLING_STEP,
            offset_tolerance: OFFSET_TOLERANCE,
            search_tolerance: SEARCH_TOLERANCE,
            generatrix_tolerance: GENERATRIX_TOLERANCE,
            arc_tolerance: ARC_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when a sampling step is zero, negative or not finite.
    InvalidStep(f64),
    /// Raised when a binary search tolerance is zero, negative or not finite.
    InvalidSearchTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidStep(value) => {
                write!(f, "sampling step must be finite and positive: {value}")
            }
            ConfigError::InvalidSearchTolerance(value) => {
                write!(f, "search tolerance must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-10));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::approx_zero;
///
/// assert!(approx_zero(1e-10));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear interpolation between `min` and `max` at `t`.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// ```
#[inline]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

/// Clamps `value` into `[min, max]` without panicking on inverted bounds.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
