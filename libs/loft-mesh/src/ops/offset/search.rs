//! Binary searches over offset distance.

use super::CurveOffset;
use crate::curve::Curve;
use crate::error::{require_positive, LoftError, LoftResult};
use crate::geometry::Point3;
use loft_config::constants::{MAX_SEARCH_ITERATIONS, MIN_LOOP_POINTS, OFFSET_TOLERANCE};
use tracing::{debug, warn};

/// Finds the deepest inward offset that still yields exactly one loop.
///
/// Searches `[-min(width, height), 0]`. A midpoint is valid when the offset
/// returns exactly one curve of at least three points; valid midpoints pull
/// the upper bound inward, invalid ones push the lower bound outward. The
/// search stops once the interval is no wider than `tolerance`.
///
/// Returns a value `<= 0` to pass directly as an offset distance, or `0.0`
/// when no inward offset is valid.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`] when `tolerance` is not finite and
/// strictly positive.
pub fn max_safe_inward_offset<O: CurveOffset>(
    offsetter: &O,
    base: &Curve,
    tolerance: f64,
) -> LoftResult<f64> {
    let tolerance = require_positive("tolerance", tolerance)?;
    let Some(extents) = base.extents() else {
        return Ok(0.0);
    };

    let mut min = -extents.width().min(extents.height());
    let mut max = 0.0_f64;
    let mut safe = 0.0;
    let mut found = false;

    for _ in 0..MAX_SEARCH_ITERATIONS {
        if (max - min).abs() <= tolerance {
            break;
        }
        let mid = (min + max) / 2.0;
        let result = offsetter.offset(base, mid, OFFSET_TOLERANCE);
        let valid = result.len() == 1 && result[0].len() >= MIN_LOOP_POINTS;

        if valid {
            safe = mid;
            max = mid;
            found = true;
        } else {
            min = mid;
        }
    }

    if found {
        debug!(offset = safe, "Max safe inward offset");
    } else {
        warn!("No inward offset keeps the base curve as a single loop");
    }
    Ok(safe)
}

/// Result of [`find_convergence`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Convergence {
    /// Centroid of each curve in `curves`.
    pub centers: Vec<Point3>,
    /// Closed curves from the deepest non-empty offset.
    pub curves: Vec<Curve>,
    /// Signed distance that produced `curves`, if any offset was non-empty.
    pub offset: Option<f64>,
}

/// Finds the last offset before the base shape vanishes.
///
/// `min` and `max` bound the inward distance; each step offsets the base by
/// `-mid`. An empty result pulls `high` down, anything else raises `low` and
/// replaces the kept curves with the closed, non-degenerate ones returned.
/// Stops once `high - low` is within `search_tolerance`
/// ([`SEARCH_TOLERANCE`](loft_config::constants::SEARCH_TOLERANCE) by
/// default). `tolerance` is forwarded to the offsetter.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`] for non-finite bounds or a
/// non-positive tolerance.
pub fn find_convergence<O: CurveOffset>(
    offsetter: &O,
    base: &Curve,
    min: f64,
    max: f64,
    search_tolerance: f64,
    tolerance: f64,
) -> LoftResult<Convergence> {
    let search_tolerance = require_positive("search_tolerance", search_tolerance)?;
    let tolerance = require_positive("tolerance", tolerance)?;
    if !min.is_finite() {
        return Err(LoftError::invalid_parameter("min", min));
    }
    if !max.is_finite() {
        return Err(LoftError::invalid_parameter("max", max));
    }

    let mut low = min;
    let mut high = max;
    let mut best = Convergence::default();

    for _ in 0..MAX_SEARCH_ITERATIONS {
        if high - low <= search_tolerance {
            break;
        }
        let mid = (low + high) / 2.0;
        let offsets = offsetter.offset(base, -mid, tolerance);

        if offsets.is_empty() {
            high = mid;
        } else {
            low = mid;
            let curves: Vec<Curve> = offsets
                .into_iter()
                .filter(|c| c.is_closed() && c.len() >= MIN_LOOP_POINTS)
                .collect();
            best = Convergence {
                centers: curves.iter().map(Curve::centroid).collect(),
                curves,
                offset: Some(-mid),
            };
        }
    }

    match best.offset {
        Some(offset) => debug!(offset, loops = best.curves.len(), "Found convergence"),
        None => warn!(min, max, "Offsets were empty across the whole search range"),
    }
    Ok(best)
}
