//! Size-driven tolerances.

use crate::error::{require_non_negative, require_positive, LoftResult};
use loft_config::constants::{
    clamp, lerp, PipelineConfig, ADAPTIVE_DP_RANGE, ADAPTIVE_REFERENCE_SIZE, ADAPTIVE_STEP_RANGE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tolerance and step scaled to an object's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveParameters {
    /// Douglas-Peucker tolerance.
    pub dp_tolerance: f64,
    /// Sampling step.
    pub sampling_step: f64,
}

impl AdaptiveParameters {
    /// Default pipeline configuration with these two values applied.
    pub fn into_config(self) -> LoftResult<PipelineConfig> {
        Ok(PipelineConfig::new(self.dp_tolerance, self.sampling_step)?)
    }
}

/// Scales tolerances with the size of the guide curve.
///
/// `scale = min(1, diagonal / 1000)` interpolates both values across their
/// ranges; the tolerance is then clamped to `[resolution / 10, resolution]`
/// and the step to `[resolution, 10 · resolution]`. Both inputs are in
/// drawing units.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`](crate::LoftError::InvalidParameter)
/// for a negative or non-finite `diagonal` or a non-positive `resolution`.
///
/// # Example
///
/// ```rust
/// use loft_mesh::pipeline::adaptive_parameters;
///
/// let small = adaptive_parameters(10.0, 0.1).unwrap();
/// let large = adaptive_parameters(5000.0, 0.1).unwrap();
/// assert!(small.sampling_step <= large.sampling_step);
/// ```
pub fn adaptive_parameters(diagonal: f64, resolution: f64) -> LoftResult<AdaptiveParameters> {
    let diagonal = require_non_negative("diagonal", diagonal)?;
    let resolution = require_positive("resolution", resolution)?;

    let scale = (diagonal / ADAPTIVE_REFERENCE_SIZE).min(1.0);
    let (dp_min, dp_max) = ADAPTIVE_DP_RANGE;
    let (step_min, step_max) = ADAPTIVE_STEP_RANGE;

    let params = AdaptiveParameters {
        dp_tolerance: clamp(lerp(dp_min, dp_max, scale), resolution / 10.0, resolution),
        sampling_step: clamp(lerp(step_min, step_max, scale), resolution, 10.0 * resolution),
    };
    debug!(
        diagonal,
        scale,
        dp_tolerance = params.dp_tolerance,
        sampling_step = params.sampling_step,
        "Adaptive parameters"
    );
    Ok(params)
}
