//! Layer stacks from offset schedules.

use super::{CurveOffset, Layer, LayerStack};
use crate::curve::Curve;
use crate::diagnostics::Diagnostic;
use crate::error::{LoftError, LoftResult};
use crate::geometry::Point3;
use tracing::{debug, warn};

/// Offsets `base` once per `(offset, elevation)` pair.
///
/// Pairs whose offset comes back empty are skipped and reported as
/// [`Diagnostic::SkippedLayer`]. Every point of a produced curve is moved to
/// the pair's elevation.
pub fn build_layer_stack<O: CurveOffset>(
    offsetter: &O,
    base: &Curve,
    pairs: &[(f64, f64)],
    tolerance: f64,
) -> (LayerStack, Vec<Diagnostic>) {
    let mut stack = LayerStack::new();
    let mut diagnostics = Vec::new();

    for &(offset, elevation) in pairs {
        let curves = offsetter.offset(base, offset, tolerance);
        if curves.is_empty() {
            warn!(offset, elevation, "Offset produced no curves; skipping layer");
            diagnostics.push(Diagnostic::SkippedLayer { offset, elevation });
            continue;
        }

        stack.push(Layer {
            offset,
            elevation,
            curves: curves.iter().map(|c| c.with_elevation(elevation)).collect(),
        });
    }

    debug!(
        layers = stack.len(),
        skipped = diagnostics.len(),
        "Built layer stack"
    );
    (stack, diagnostics)
}

/// Maps generatrix points to `(offset, elevation)` pairs.
///
/// A point's x is its offset from the base curve and its y the height of
/// the cross-section.
pub fn layers_from_generatrix(generatrix: &[Point3]) -> Vec<(f64, f64)> {
    generatrix.iter().map(|p| (p.x, p.y)).collect()
}

/// Repeatedly offsets the previous layer by `step`.
///
/// The bases form layer 0. Each following layer holds every curve produced
/// from the previous one, so a split still counts as one layer. Stops after
/// `max_layers` layers or when a layer comes back empty.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`] when `step` is zero or not finite.
pub fn offset_layers_iterative<O: CurveOffset>(
    offsetter: &O,
    bases: &[Curve],
    step: f64,
    max_layers: usize,
    tolerance: f64,
) -> LoftResult<LayerStack> {
    if !step.is_finite() || step == 0.0 {
        return Err(LoftError::invalid_parameter("step", step));
    }

    let elevation = bases
        .first()
        .and_then(Curve::first_point)
        .map_or(0.0, |p| p.z);

    let mut stack = LayerStack::new();
    let mut current = bases.to_vec();
    let mut depth = 0;

    while depth < max_layers && !current.is_empty() {
        let next: Vec<Curve> = current
            .iter()
            .flat_map(|curve| offsetter.offset(curve, step, tolerance))
            .collect();
        stack.push(Layer {
            offset: step * depth as f64,
            elevation,
            curves: current,
        });
        current = next;
        depth += 1;
    }

    debug!(layers = stack.len(), "Generated iterative offset layers");
    Ok(stack)
}
