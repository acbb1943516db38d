//! # Curve Sampling
//!
//! Converts curves into point sequences suitable for bridging.
//!
//! Two strategies are provided:
//! - [`sample_by_length`]: fixed arc-length steps along the whole perimeter
//! - [`sample_primitives`]: arcs subdivided by length, lines kept as their
//!   endpoints
//!
//! Both drop a trailing point that matches the first within
//! [`MATCH_TOLERANCE`], so sampled closed curves never repeat their start.


use crate::curve::{Curve, Primitive};
use crate::error::{require_positive, LoftResult};
use crate::geometry::{distance, Point3};
use crate::ops::offset::Layer;
use loft_config::constants::MATCH_TOLERANCE;
use tracing::debug;

/// Samples `curve` every `step` units of arc length.
///
/// The first and last points of the walk are always included; intermediate
/// points sit at `s = step, 2·step, …` while `s + step` stays below the
/// perimeter.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`](crate::LoftError::InvalidParameter)
/// when `step` is not finite and strictly positive.
pub fn sample_by_length(curve: &Curve, step: f64) -> LoftResult<Vec<Point3>> {
    let step = require_positive("step", step)?;
    let (Some(first), Some(last)) = (curve.first_point(), curve.end_point()) else {
        return Ok(Vec::new());
    };

    let total = curve.perimeter();
    let mut points = vec![first];
    let mut walked = 0.0;
    while walked + step < total {
        walked += step;
        if let Some(p) = curve.point_at(walked / total) {
            points.push(p);
        }
    }
    points.push(last);

    strip_closing_match(&mut points);
    Ok(points)
}

/// Samples `curve` primitive by primitive.
///
/// An arc of length `L` is split into `max(2, ceil(L / step))` equal angular
/// steps, both endpoints included. A line contributes only its endpoints.
/// A point equal to the one just emitted is not repeated, so the shared
/// endpoint of consecutive primitives appears once.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`](crate::LoftError::InvalidParameter)
/// when `step` is not finite and strictly positive.
pub fn sample_primitives(curve: &Curve, step: f64) -> LoftResult<Vec<Point3>> {
    let step = require_positive("step", step)?;

    let primitives = curve.primitives();
    if primitives.is_empty() {
        return Ok(curve.points().to_vec());
    }

    let mut points: Vec<Point3> = Vec::new();
    let mut emit = |p: Point3| {
        if points
            .last()
            .map_or(true, |prev| distance(*prev, p) > MATCH_TOLERANCE)
        {
            points.push(p);
        }
    };

    for primitive in &primitives {
        match *primitive {
            Primitive::Arc { .. } => {
                let steps = ((primitive.length() / step).ceil() as usize).max(2);
                for i in 0..=steps {
                    emit(primitive.point_at(i as f64 / steps as f64));
                }
            }
            Primitive::Line { start, end } => {
                emit(start);
                emit(end);
            }
        }
    }

    strip_closing_match(&mut points);
    Ok(points)
}

/// Samples every curve of every layer, flattening the result in layer order.
///
/// Layer `i` uses `distance(g[i], g[i + 1]) · base_density`, raised to at
/// least `min_step`, while a next generatrix point exists; later layers use
/// `base_density` directly.
///
/// # Errors
///
/// Returns [`LoftError::InvalidParameter`](crate::LoftError::InvalidParameter)
/// when a derived step is not finite and strictly positive.
pub fn sample_layers(
    layers: &[Layer],
    generatrix: &[Point3],
    base_density: f64,
    min_step: f64,
) -> LoftResult<Vec<Vec<Point3>>> {
    let mut sampled = Vec::new();

    for (i, layer) in layers.iter().enumerate() {
        let step = match (generatrix.get(i), generatrix.get(i + 1)) {
            (Some(p1), Some(p2)) => (distance(*p1, *p2) * base_density).max(min_step),
            _ => base_density,
        };

        for curve in &layer.curves {
            sampled.push(sample_primitives(curve, step)?);
        }
    }

    debug!(layers = layers.len(), curves = sampled.len(), "Sampled layers");
    Ok(sampled)
}

fn strip_closing_match(points: &mut Vec<Point3>) {
    if points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if distance(first, last) <= MATCH_TOLERANCE {
            points.pop();
        }
    }
}
