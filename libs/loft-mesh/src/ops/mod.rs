//! # Loft Operations
//!
//! The geometry pipeline, one stage per module:
//!
//! ```text
//! simplify → sample → offset (layers) → loft (bridge) → cap
//!                                          segment ↗
//! ```

pub mod cap;
pub mod loft;
pub mod offset;
pub mod sample;
pub mod segment;
pub mod simplify;

pub use cap::{convex_cap, convex_cap_into, fan_cap, multi_ring_cap};
pub use loft::{align_to_previous, bridge, close_loop, lateral_surface};
pub use offset::{
    build_layer_stack, find_convergence, layers_from_generatrix, max_safe_inward_offset,
    offset_layers_iterative, Convergence, CurveOffset, Layer, LayerStack, PlineOffset,
};
pub use sample::{sample_by_length, sample_layers, sample_primitives};
pub use segment::{segment_convex_runs, turning_angle};
pub use simplify::{simplify, simplify_closed};
