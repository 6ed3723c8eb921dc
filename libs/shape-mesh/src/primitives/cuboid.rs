//! # Box Primitive
//!
//! Axis-aligned box centered on the origin. Each of the six faces gets its
//! own four vertices so normals and UVs stay flat per face.
//!
//! ## Corner Layout
//!
//! ```text
//!        p4 -------- p7
//!       /|          /|
//!     p5 -------- p6 |        +Y
//!      | p0 -------|-p1        |
//!      |/          |/          +-- +X
//!     p3 -------- p2          /
//!                           +Z
//! ```

use glam::{DVec2, DVec3};

use super::ShapeGenerator;
use crate::params::ShapeKind;

/// Corner indices and outward normal of each face, in emission order.
const FACES: [([usize; 4], DVec3); 6] = [
    ([1, 2, 3, 0], DVec3::NEG_Y), // bottom
    ([4, 5, 6, 7], DVec3::Y),     // top
    ([3, 5, 4, 0], DVec3::NEG_X), // left
    ([1, 7, 6, 2], DVec3::X),     // right
    ([2, 6, 5, 3], DVec3::Z),     // front
    ([0, 4, 7, 1], DVec3::NEG_Z), // back
];

/// Texture coordinates shared by every face quad.
const QUAD_UVS: [DVec2; 4] = [DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X];

/// Box with independent sizes along each axis.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_mesh::primitives::Cuboid;
/// use shape_mesh::{ShapeGenerator, Sidedness};
///
/// let cuboid = Cuboid::new(2.0, 2.0, 2.0);
/// assert_eq!(cuboid.vertex_count(Sidedness::Single), 24);
/// assert_eq!(cuboid.half_extents(), DVec3::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    size: DVec3,
}

impl Cuboid {
    pub fn new(x_size: f64, y_size: f64, z_size: f64) -> Self {
        Self {
            size: DVec3::new(x_size, y_size, z_size),
        }
    }

    pub fn size(&self) -> DVec3 {
        self.size
    }

    fn corners(&self) -> [DVec3; 8] {
        let DVec3 { x, y, z } = self.half_extents();
        [
            DVec3::new(-x, -y, -z),
            DVec3::new(x, -y, -z),
            DVec3::new(x, -y, z),
            DVec3::new(-x, -y, z),
            DVec3::new(-x, y, -z),
            DVec3::new(-x, y, z),
            DVec3::new(x, y, z),
            DVec3::new(x, y, -z),
        ]
    }
}

impl ShapeGenerator for Cuboid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Box
    }

    fn half_extents(&self) -> DVec3 {
        self.size / 2.0
    }

    fn front_vertex_count(&self) -> usize {
        FACES.len() * 4
    }

    fn front_triangle_count(&self) -> usize {
        FACES.len() * 2
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        let corners = self.corners();
        FACES
            .iter()
            .flat_map(|(quad, _)| quad.iter().map(|&corner| corners[corner] - offset))
            .collect()
    }

    fn front_normals(&self) -> Vec<DVec3> {
        FACES
            .iter()
            .flat_map(|&(_, normal)| [normal; 4])
            .collect()
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        FACES.iter().flat_map(|_| QUAD_UVS).collect()
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        (0..FACES.len() as u32)
            .flat_map(|face| {
                let base = face * 4;
                [[base, base + 1, base + 2], [base + 2, base + 3, base]]
            })
            .collect()
    }
}
