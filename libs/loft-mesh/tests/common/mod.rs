//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use loft_mesh::ops::CurveOffset;
use loft_mesh::{Curve, Mesh, Point3};
use std::collections::HashMap;
use std::f64::consts::TAU;

pub fn polygon_circle(center: Point3, radius: f64, segments: usize) -> Curve {
    Curve::closed(
        (0..segments)
            .map(|i| {
                let a = TAU * i as f64 / segments as f64;
                center + Point3::new(radius * a.cos(), radius * a.sin(), 0.0)
            })
            .collect(),
    )
}

pub fn square(size: f64, z: f64) -> Curve {
    Curve::closed(vec![
        Point3::new(0.0, 0.0, z),
        Point3::new(size, 0.0, z),
        Point3::new(size, size, z),
        Point3::new(0.0, size, z),
    ])
}

/// Treats every input as a 32-gon around its centroid.
pub struct CircleOffset;

impl CurveOffset for CircleOffset {
    fn offset(&self, curve: &Curve, distance: f64, _tolerance: f64) -> Vec<Curve> {
        let center = curve.centroid();
        let radius = curve
            .points()
            .iter()
            .map(|p| p.distance(center))
            .sum::<f64>()
            / curve.len() as f64;
        let r = radius + distance;
        if r <= 1e-9 {
            return Vec::new();
        }
        vec![polygon_circle(center, r, 32)]
    }
}

/// Undirected edge usage counts over the whole mesh.
pub fn edge_usage(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
    let mut edges = HashMap::new();
    for tri in mesh.triangles() {
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    edges
}
