//! # Loft Pipeline
//!
//! End-to-end mesh builds from plain curves.
//!
//! ## Modes
//!
//! - **Closed profile**: an open generatrix sweeps a closed base curve. Each
//!   generatrix point `(x, y)` becomes an offset of the base by `x` at height
//!   `y`; the resulting cross-sections are bridged and optionally capped.
//! - **Open pair**: an open generatrix and an open guide curve are bridged
//!   directly.
//!
//! A separate [`LoftBuilder::converged_cap`] closes a tip that split into
//! several loops.


mod adaptive;

pub use adaptive::{adaptive_parameters, AdaptiveParameters};

use crate::curve::Curve;
use crate::diagnostics::Diagnostic;
use crate::error::LoftResult;
use crate::geometry::{centroid, Point3};
use crate::mesh::{Mesh, MeshBuilder};
use crate::ops::cap::{convex_cap_into, fan_cap, multi_ring_cap};
use crate::ops::loft::lateral_surface;
use crate::ops::offset::{
    build_layer_stack, find_convergence, layers_from_generatrix, CurveOffset, Layer, LayerStack,
};
use crate::ops::sample::{sample_layers, sample_primitives};
use crate::ops::simplify::simplify;
use loft_config::constants::{
    approx_equal, PipelineConfig, MIN_LOOP_POINTS, OPEN_PAIR_DENSITY, OPEN_PAIR_MIN_STEP,
    OPEN_PAIR_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How an open end of the loft is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapStyle {
    /// One fan around the ring's centroid.
    #[default]
    Fan,
    /// Convex runs, each fanned around its own centroid.
    Convex,
}

/// A finished mesh and the non-fatal events met while building it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoftOutput {
    /// The triangulated surface.
    pub mesh: Mesh,
    /// Skipped layers, degenerate curves and similar events.
    pub diagnostics: Vec<Diagnostic>,
}

/// Configured entry point for loft builds.
///
/// # Example
///
/// ```rust
/// use loft_config::constants::PipelineConfig;
/// use loft_mesh::pipeline::{CapStyle, LoftBuilder};
///
/// let builder = LoftBuilder::new(PipelineConfig::default())
///     .unwrap()
///     .with_caps(true, true)
///     .with_cap_style(CapStyle::Convex);
/// assert_eq!(builder.cap_style(), CapStyle::Convex);
/// ```
#[derive(Debug, Clone)]
pub struct LoftBuilder {
    config: PipelineConfig,
    cap_top: bool,
    cap_bottom: bool,
    cap_style: CapStyle,
}

impl LoftBuilder {
    /// Creates a builder, validating `config`.
    ///
    /// Caps the top with a fan and leaves the bottom open by default.
    pub fn new(config: PipelineConfig) -> LoftResult<Self> {
        Ok(Self {
            config: config.validated()?,
            cap_top: true,
            cap_bottom: false,
            cap_style: CapStyle::default(),
        })
    }

    /// Chooses which ends of a closed-profile loft are capped.
    pub fn with_caps(mut self, top: bool, bottom: bool) -> Self {
        self.cap_top = top;
        self.cap_bottom = bottom;
        self
    }

    /// Chooses how caps are triangulated.
    pub fn with_cap_style(mut self, style: CapStyle) -> Self {
        self.cap_style = style;
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The cap triangulation style.
    pub fn cap_style(&self) -> CapStyle {
        self.cap_style
    }

    /// Linearizes arcs, moves the first point to the origin and simplifies.
    pub fn normalize_generatrix(&self, generatrix: &Curve) -> LoftResult<Vec<Point3>> {
        let points = sample_primitives(generatrix, self.config.arc_tolerance)?;
        let Some(&origin) = points.first() else {
            return Ok(Vec::new());
        };
        let translated: Vec<Point3> = points.iter().map(|p| *p - origin).collect();
        Ok(simplify(&translated, self.config.generatrix_tolerance))
    }

    /// Sweeps the closed `base` along the open `generatrix`.
    ///
    /// # Errors
    ///
    /// Fails only when a derived sampling step is not positive.
    pub fn closed_profile<O: CurveOffset>(
        &self,
        generatrix: &Curve,
        base: &Curve,
        offsetter: &O,
    ) -> LoftResult<LoftOutput> {
        let generatrix = self.normalize_generatrix(generatrix)?;
        let pairs = layers_from_generatrix(&generatrix);

        let (stack, diagnostics) =
            build_layer_stack(offsetter, base, &pairs, self.config.offset_tolerance);
        let layers = align_with_pairs(stack, &pairs);

        let sampled = sample_layers(
            &layers,
            &generatrix,
            self.config.sampling_step,
            self.config.dp_tolerance,
        )?;
        let curves: Vec<Vec<Point3>> = sampled
            .iter()
            .map(|c| simplify(c, self.config.dp_tolerance))
            .collect();

        Ok(self.assemble(curves, diagnostics, true))
    }

    /// Bridges an open generatrix directly to an open guide curve.
    ///
    /// The guide is sampled with the generatrix-driven batch sampler and the
    /// generatrix becomes the first cross-section. No caps are added.
    ///
    /// # Errors
    ///
    /// Fails only when a derived sampling step is not positive.
    pub fn open_pair(&self, generatrix: &Curve, guide: &Curve) -> LoftResult<LoftOutput> {
        let generatrix = self.normalize_generatrix(generatrix)?;
        let guide_layer = Layer {
            offset: 0.0,
            elevation: guide.first_point().map_or(0.0, |p| p.z),
            curves: vec![guide.clone()],
        };

        let mut sampled = sample_layers(
            &[guide_layer],
            &generatrix,
            OPEN_PAIR_DENSITY,
            OPEN_PAIR_MIN_STEP,
        )?;
        sampled.insert(0, generatrix);

        let curves: Vec<Vec<Point3>> = sampled
            .iter()
            .map(|c| simplify(c, OPEN_PAIR_TOLERANCE))
            .collect();

        Ok(self.assemble(curves, Vec::new(), false))
    }

    /// Caps the deepest inward offset of `base` before it vanishes.
    ///
    /// Searches inward distances in `[min, max]` with [`find_convergence`],
    /// down to the configured `search_tolerance`, and fans every surviving
    /// loop around its centroid.
    ///
    /// # Errors
    ///
    /// Fails for non-finite bounds.
    pub fn converged_cap<O: CurveOffset>(
        &self,
        base: &Curve,
        offsetter: &O,
        min: f64,
        max: f64,
    ) -> LoftResult<LoftOutput> {
        let convergence = find_convergence(
            offsetter,
            base,
            min,
            max,
            self.config.search_tolerance,
            self.config.offset_tolerance,
        )?;
        if convergence.offset.is_none() {
            return Ok(LoftOutput {
                mesh: Mesh::new(),
                diagnostics: vec![Diagnostic::NoConvergence { min, max }],
            });
        }
        Ok(self.ring_cap(&convergence.curves, &convergence.centers))
    }

    /// Fans each ring around its matching center into a fresh mesh.
    pub fn ring_cap(&self, rings: &[Curve], centers: &[Point3]) -> LoftOutput {
        let mut diagnostics = Vec::new();
        if rings.len() != centers.len() {
            warn!(
                rings = rings.len(),
                centers = centers.len(),
                "Ring and center counts differ"
            );
            diagnostics.push(Diagnostic::MismatchedRings {
                rings: rings.len(),
                centers: centers.len(),
            });
        }

        let mut builder = MeshBuilder::new();
        let triangles = multi_ring_cap(rings, centers, &mut builder);
        debug!(rings = rings.len(), triangles, "Capped rings");
        LoftOutput {
            mesh: builder.finish(),
            diagnostics,
        }
    }

    fn assemble(
        &self,
        curves: Vec<Vec<Point3>>,
        mut diagnostics: Vec<Diagnostic>,
        caps: bool,
    ) -> LoftOutput {
        for (index, curve) in curves.iter().enumerate() {
            if curve.len() < MIN_LOOP_POINTS {
                diagnostics.push(Diagnostic::DegenerateCurve {
                    index,
                    points: curve.len(),
                });
            }
        }

        // Degenerate sections are dropped so their neighbours bridge directly
        let usable: Vec<Vec<Point3>> = curves
            .into_iter()
            .filter(|c| c.len() >= MIN_LOOP_POINTS)
            .collect();
        let (Some(first), Some(last)) = (usable.first(), usable.last()) else {
            return insufficient(0, diagnostics);
        };
        if usable.len() < 2 {
            return insufficient(usable.len(), diagnostics);
        }

        let mut builder = MeshBuilder::new();
        lateral_surface(&usable, &mut builder);

        if caps && self.cap_top {
            self.cap(last, &mut builder);
        }
        if caps && self.cap_bottom {
            // Reversed so the bottom faces away from the top
            let reversed: Vec<Point3> = first.iter().rev().copied().collect();
            self.cap(&reversed, &mut builder);
        }

        let mesh = builder.finish();
        info!(
            sections = usable.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            diagnostics = diagnostics.len(),
            "Built loft mesh"
        );
        LoftOutput { mesh, diagnostics }
    }

    fn cap(&self, ring: &[Point3], builder: &mut MeshBuilder) -> usize {
        match self.cap_style {
            CapStyle::Fan => fan_cap(ring, centroid(ring), builder),
            CapStyle::Convex => convex_cap_into(ring, self.config.dp_tolerance, builder),
        }
    }
}

fn insufficient(found: usize, mut diagnostics: Vec<Diagnostic>) -> LoftOutput {
    warn!(found, "Not enough cross-sections to loft");
    diagnostics.push(Diagnostic::InsufficientCurves { found });
    LoftOutput {
        mesh: Mesh::new(),
        diagnostics,
    }
}

/// Re-inserts skipped layers as empty ones so layer `i` matches pair `i`.
///
/// The batch sampler derives each layer's step from the generatrix point
/// with the same index.
fn align_with_pairs(stack: LayerStack, pairs: &[(f64, f64)]) -> Vec<Layer> {
    let mut built = stack.into_layers().into_iter().peekable();
    pairs
        .iter()
        .map(|&(offset, elevation)| {
            match built.next_if(|l| {
                approx_equal(l.offset, offset) && approx_equal(l.elevation, elevation)
            }) {
                Some(layer) => layer,
                None => Layer {
                    offset,
                    elevation,
                    curves: Vec::new(),
                },
            }
        })
        .collect()
}
