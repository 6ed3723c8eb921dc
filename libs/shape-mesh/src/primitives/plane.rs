//! # Plane Primitive
//!
//! A flat XZ rectangle facing +Y. Always emitted double-sided.

use glam::{DVec2, DVec3};

use super::ShapeGenerator;
use crate::params::{ShapeKind, Sidedness};

/// Rectangle spanning `x_size` by `z_size`, centered on the origin.
///
/// ```text
///   p0 (-x,-z) ---- p3 (+x,-z)
///      |               |
///   p1 (-x,+z) ---- p2 (+x,+z)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    x_size: f64,
    z_size: f64,
}

impl Plane {
    pub fn new(x_size: f64, z_size: f64) -> Self {
        Self { x_size, z_size }
    }

    pub fn x_size(&self) -> f64 {
        self.x_size
    }

    pub fn z_size(&self) -> f64 {
        self.z_size
    }
}

impl ShapeGenerator for Plane {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Plane
    }

    fn half_extents(&self) -> DVec3 {
        DVec3::new(self.x_size / 2.0, 0.0, self.z_size / 2.0)
    }

    fn front_vertex_count(&self) -> usize {
        4
    }

    fn front_triangle_count(&self) -> usize {
        2
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        let DVec3 { x, z, .. } = self.half_extents();
        [
            DVec3::new(-x, 0.0, -z),
            DVec3::new(-x, 0.0, z),
            DVec3::new(x, 0.0, z),
            DVec3::new(x, 0.0, -z),
        ]
        .into_iter()
        .map(|v| v - offset)
        .collect()
    }

    fn front_normals(&self) -> Vec<DVec3> {
        vec![DVec3::Y; 4]
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        vec![DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X]
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        vec![[0, 1, 2], [2, 3, 0]]
    }

    /// A lone plane is invisible from below, so both faces are always kept.
    fn resolve_sidedness(&self, _requested: Sidedness) -> Sidedness {
        Sidedness::Double
    }
}
