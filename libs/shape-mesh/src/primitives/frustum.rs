//! # Frustum Primitive
//!
//! A truncated cone: bottom disc, top disc and a lateral band, each disc
//! with its own radius. Both discs share one side count, taken from the
//! larger radius.

use config::constants::{MAX_SIDE_COUNT, MIN_SIDE_COUNT};
use glam::{DVec2, DVec3};

use super::round::{self, Facing};
use super::ShapeGenerator;
use crate::params::ShapeKind;

/// Capped frustum centered on the origin.
///
/// Vertex layout matches [`Cylinder`](super::Cylinder): bottom disc, top
/// disc, then `sides + 1` (bottom, top) band pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    height: f64,
    top_radius: f64,
    bottom_radius: f64,
    sides: u32,
}

impl Frustum {
    /// Side counts are clamped into `[MIN_SIDE_COUNT, MAX_SIDE_COUNT]`.
    pub fn new(height: f64, top_radius: f64, bottom_radius: f64, sides: u32) -> Self {
        Self {
            height,
            top_radius,
            bottom_radius,
            sides: sides.clamp(MIN_SIDE_COUNT, MAX_SIDE_COUNT),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top_radius(&self) -> f64 {
        self.top_radius
    }

    pub fn bottom_radius(&self) -> f64 {
        self.bottom_radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    fn max_radius(&self) -> f64 {
        self.top_radius.max(self.bottom_radius)
    }
}

impl ShapeGenerator for Frustum {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Frustum
    }

    fn half_extents(&self) -> DVec3 {
        let radius = self.max_radius();
        DVec3::new(radius, self.height / 2.0, radius)
    }

    fn front_vertex_count(&self) -> usize {
        2 * round::disc_vertex_count(self.sides) + round::band_vertex_count(self.sides)
    }

    fn front_triangle_count(&self) -> usize {
        4 * self.sides as usize
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        let half_height = self.height / 2.0;
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_vertices(&mut out, self.bottom_radius, -half_height, self.sides, offset);
        round::push_disc_vertices(&mut out, self.top_radius, half_height, self.sides, offset);
        round::push_band_vertices(
            &mut out,
            (self.bottom_radius, -half_height),
            (self.top_radius, half_height),
            self.sides,
            offset,
        );
        out
    }

    fn front_normals(&self) -> Vec<DVec3> {
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_normals(&mut out, Facing::Down, self.sides);
        round::push_disc_normals(&mut out, Facing::Up, self.sides);
        round::push_band_normals(&mut out, self.sides);
        out
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_uvs(&mut out, self.sides);
        round::push_disc_uvs(&mut out, self.sides);
        round::push_band_uvs(&mut out, self.sides);
        out
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        let disc = round::disc_vertex_count(self.sides) as u32;
        let mut out = Vec::with_capacity(self.front_triangle_count());
        round::push_disc_triangles(&mut out, 0, self.sides, Facing::Down);
        round::push_disc_triangles(&mut out, disc, self.sides, Facing::Up);
        round::push_band_triangles(&mut out, 2 * disc, self.sides);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Sidedness;
    use crate::pivot::Pivot;
    use crate::primitives::test_support::{assert_counts, assert_outward_winding};

    #[test]
    fn test_counts() {
        let frustum = Frustum::new(5.0, 2.0, 3.0, 20);
        assert_eq!(frustum.vertex_count(Sidedness::Single), 4 * 21);
        assert_eq!(frustum.triangle_count(Sidedness::Single), 80);
        assert_counts(&frustum, Sidedness::Single);
        assert_counts(&frustum, Sidedness::Double);
    }

    #[test]
    fn test_sides_clamped() {
        assert_eq!(Frustum::new(1.0, 1.0, 2.0, 0).sides(), MIN_SIDE_COUNT);
        let frustum = Frustum::new(1.0, 1.0, 2.0, u32::MAX);
        assert_eq!(frustum.sides(), MAX_SIDE_COUNT);
        assert_counts(&frustum, Sidedness::Double);
    }

    #[test]
    fn test_disc_radii() {
        let frustum = Frustum::new(5.0, 2.0, 3.0, 4);
        let vertices = frustum.front_vertices(DVec3::ZERO);
        // rim 0 sits on +X
        assert_eq!(vertices[1], DVec3::new(3.0, -2.5, 0.0));
        assert_eq!(vertices[6], DVec3::new(2.0, 2.5, 0.0));
    }

    #[test]
    fn test_winding() {
        for (top, bottom) in [(2.0, 3.0), (3.0, 2.0), (0.5, 0.5)] {
            let frustum = Frustum::new(5.0, top, bottom, 24);
            assert_outward_winding(&frustum, Sidedness::Single);
            assert_outward_winding(&frustum, Sidedness::Double);
        }
    }

    #[test]
    fn test_lateral_pivot_uses_larger_radius() {
        let frustum = Frustum::new(5.0, 2.0, 3.0, 8);
        assert_eq!(frustum.vertex_offset(Pivot::Left), DVec3::new(-3.0, 0.0, 0.0));
        assert_eq!(frustum.vertex_offset(Pivot::Back), DVec3::new(0.0, 0.0, -3.0));
        assert_eq!(frustum.vertex_offset(Pivot::Top), DVec3::new(0.0, 2.5, 0.0));
    }
}
