//! # Offset Layers
//!
//! Parallel-contour generation for the loft's cross-sections.
//!
//! The offset itself is delegated to a [`CurveOffset`] collaborator. This
//! module only decides which distances to ask for and what to keep:
//!
//! - [`build_layer_stack`]: one offset per `(offset, elevation)` pair
//! - [`max_safe_inward_offset`]: deepest inward offset that stays one loop
//! - [`find_convergence`]: last non-empty offset before the shape vanishes
//! - [`offset_layers_iterative`]: repeated fixed-step offsets
//!
//! ## Sign Convention
//!
//! Negative distances shrink a closed curve, positive distances grow it.


mod layers;
mod pline;
mod search;

pub use layers::{build_layer_stack, layers_from_generatrix, offset_layers_iterative};
pub use pline::PlineOffset;
pub use search::{find_convergence, max_safe_inward_offset, Convergence};

use crate::curve::Curve;
use serde::{Deserialize, Serialize};

/// Offsets a closed curve by a signed distance.
///
/// An empty result is a normal outcome: the shape vanished or is not
/// offsettable at that distance. One input may also split into several
/// loops.
pub trait CurveOffset {
    /// Returns the curves at `distance` from `curve`, computed to `tolerance`.
    fn offset(&self, curve: &Curve, distance: f64, tolerance: f64) -> Vec<Curve>;
}

impl<T: CurveOffset + ?Sized> CurveOffset for &T {
    fn offset(&self, curve: &Curve, distance: f64, tolerance: f64) -> Vec<Curve> {
        (**self).offset(curve, distance, tolerance)
    }
}

/// Curves sharing one offset distance and elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Offset distance applied to the base curve.
    pub offset: f64,
    /// Elevation (z) of every point in the layer.
    pub elevation: f64,
    /// One curve, or several when the offset split the shape.
    pub curves: Vec<Curve>,
}

/// Ordered layers, base first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer on top.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Layers from base to tip.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layer was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of curves across all layers.
    pub fn curve_count(&self) -> usize {
        self.layers.iter().map(|l| l.curves.len()).sum()
    }

    /// Consumes the stack, base layer first.
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Flattens the stack into its curves, in layer order.
    pub fn into_curves(self) -> Vec<Curve> {
        self.layers.into_iter().flat_map(|l| l.curves).collect()
    }
}
