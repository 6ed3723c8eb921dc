//! # Cone Primitive
//!
//! A bottom disc plus a fan of triangles up to the apex.
//!
//! ## Vertex Layout
//!
//! ```text
//! [0, n]          bottom disc: center, rim 0..n-1      (y = -h/2)
//! [n+1, 3n+2]     pairs (rim i, apex) for i in 0..=n
//! ```

use config::constants::{MAX_SIDE_COUNT, MIN_SIDE_COUNT};
use glam::{DVec2, DVec3};

use super::round::{self, Facing};
use super::ShapeGenerator;
use crate::params::ShapeKind;

/// Right circular cone standing on the XZ plane, centered vertically.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::Cone;
/// use shape_mesh::{ShapeGenerator, Sidedness};
///
/// let cone = Cone::new(3.0, 1.0, 8);
/// assert_eq!(cone.vertex_count(Sidedness::Single), 27);
/// assert_eq!(cone.triangle_count(Sidedness::Single), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    height: f64,
    radius: f64,
    sides: u32,
}

impl Cone {
    /// Side counts are clamped into `[MIN_SIDE_COUNT, MAX_SIDE_COUNT]`.
    pub fn new(height: f64, radius: f64, sides: u32) -> Self {
        Self {
            height,
            radius,
            sides: sides.clamp(MIN_SIDE_COUNT, MAX_SIDE_COUNT),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl ShapeGenerator for Cone {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cone
    }

    fn half_extents(&self) -> DVec3 {
        DVec3::new(self.radius, self.height / 2.0, self.radius)
    }

    fn front_vertex_count(&self) -> usize {
        round::disc_vertex_count(self.sides) + round::band_vertex_count(self.sides)
    }

    fn front_triangle_count(&self) -> usize {
        2 * self.sides as usize
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        let half_height = self.height / 2.0;
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_vertices(&mut out, self.radius, -half_height, self.sides, offset);
        round::push_band_vertices(
            &mut out,
            (self.radius, -half_height),
            (0.0, half_height),
            self.sides,
            offset,
        );
        out
    }

    fn front_normals(&self) -> Vec<DVec3> {
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_normals(&mut out, Facing::Down, self.sides);
        round::push_band_normals(&mut out, self.sides);
        out
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        let mut out = Vec::with_capacity(self.front_vertex_count());
        round::push_disc_uvs(&mut out, self.sides);
        for i in 0..=self.sides {
            out.push(DVec2::new(f64::from(i) / f64::from(self.sides), 0.0));
            out.push(DVec2::new(0.5, 1.0));
        }
        out
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        let mut out = Vec::with_capacity(self.front_triangle_count());
        round::push_disc_triangles(&mut out, 0, self.sides, Facing::Down);

        let base = round::disc_vertex_count(self.sides) as u32;
        for i in 0..self.sides {
            let p = base + 2 * i;
            out.push([p, p + 1, p + 2]);
        }
        out
    }
}
