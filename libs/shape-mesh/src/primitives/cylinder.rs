//! # Cylinder Primitive
//!
//! Capped cylinder centered on the origin.
//!
//! ## Vertex Layout
//!
//! ```text
//! [0, n]            bottom disc: center, rim 0..n-1   (y = -h/2, normal -Y)
//! [n+1, 2n+1]       top disc: center, rim 0..n-1      (y = +h/2, normal +Y)
//! [2n+2, 4n+3]      pairs (bottom i, top i) for i in 0..=n
//! ```
//!
//! The layout is the frustum's with equal radii, so generation delegates
//! to [`Frustum`].

use glam::{DVec2, DVec3};

use super::{Frustum, ShapeGenerator};
use crate::params::ShapeKind;

/// Cylinder with a single radius for both discs.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::Cylinder;
/// use shape_mesh::{ShapeGenerator, Sidedness};
///
/// let cylinder = Cylinder::new(4.0, 2.0, 126);
/// assert_eq!(cylinder.vertex_count(Sidedness::Single), 508);
/// assert_eq!(cylinder.index_count(Sidedness::Single), 1512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    inner: Frustum,
}

impl Cylinder {
    /// Side counts are clamped into `[MIN_SIDE_COUNT, MAX_SIDE_COUNT]`.
    pub fn new(height: f64, radius: f64, sides: u32) -> Self {
        Self {
            inner: Frustum::new(height, radius, radius, sides),
        }
    }

    pub fn height(&self) -> f64 {
        self.inner.height()
    }

    pub fn radius(&self) -> f64 {
        self.inner.bottom_radius()
    }

    pub fn sides(&self) -> u32 {
        self.inner.sides()
    }
}

impl ShapeGenerator for Cylinder {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cylinder
    }

    fn half_extents(&self) -> DVec3 {
        self.inner.half_extents()
    }

    fn front_vertex_count(&self) -> usize {
        self.inner.front_vertex_count()
    }

    fn front_triangle_count(&self) -> usize {
        self.inner.front_triangle_count()
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        self.inner.front_vertices(offset)
    }

    fn front_normals(&self) -> Vec<DVec3> {
        self.inner.front_normals()
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        self.inner.front_uvs()
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        self.inner.front_triangles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Sidedness;
    use crate::pivot::Pivot;
    use crate::primitives::test_support::{assert_counts, assert_outward_winding};
    use approx::assert_relative_eq;

    #[test]
    fn test_counts() {
        let cylinder = Cylinder::new(2.0, 1.0, 10);
        assert_eq!(cylinder.vertex_count(Sidedness::Single), 44);
        assert_eq!(cylinder.triangle_count(Sidedness::Single), 40);
        assert_eq!(cylinder.vertex_count(Sidedness::Double), 88);
        assert_counts(&cylinder, Sidedness::Single);
        assert_counts(&cylinder, Sidedness::Double);
    }

    #[test]
    fn test_sides_ceiling() {
        let cylinder = Cylinder::new(1.0, 1.0, 1_000_000);
        assert_eq!(cylinder.sides(), config::constants::MAX_SIDE_COUNT);
        assert_eq!(cylinder.vertex_count(Sidedness::Single), 4 * 2001);
    }

    #[test]
    fn test_kind_is_cylinder() {
        assert_eq!(Cylinder::new(1.0, 1.0, 3).kind(), ShapeKind::Cylinder);
    }

    #[test]
    fn test_band_on_radius() {
        let cylinder = Cylinder::new(2.0, 1.5, 32);
        let vertices = cylinder.front_vertices(DVec3::ZERO);
        for v in &vertices[2 * 33..] {
            assert_relative_eq!(DVec2::new(v.x, v.z).length(), 1.5, epsilon = 1e-12);
            assert_eq!(v.y.abs(), 1.0);
        }
    }

    #[test]
    fn test_disc_normals() {
        let normals = Cylinder::new(2.0, 1.0, 8).front_normals();
        assert!(normals[..9].iter().all(|n| *n == DVec3::NEG_Y));
        assert!(normals[9..18].iter().all(|n| *n == DVec3::Y));
    }

    #[test]
    fn test_winding() {
        let cylinder = Cylinder::new(2.0, 1.0, 3);
        assert_outward_winding(&cylinder, Sidedness::Single);
        assert_outward_winding(&cylinder, Sidedness::Double);
    }

    #[test]
    fn test_pivots() {
        let cylinder = Cylinder::new(4.0, 2.0, 8);
        assert_eq!(cylinder.vertex_offset(Pivot::Top), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(cylinder.vertex_offset(Pivot::Front), DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(cylinder.vertex_offset(Pivot::Center), DVec3::ZERO);
    }
}
