//! # Primitives
//!
//! One generator per shape kind. Each generator knows its front-facing
//! layout; the provided methods on [`ShapeGenerator`] apply sidedness and
//! produce the final parallel buffers.
//!
//! ## Vertex Order
//!
//! ```text
//! Single: [front]
//! Double: [front][front reversed, normals negated]
//! ```
//!
//! Front triangles wind counter-clockwise when viewed from the side their
//! normals point to.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod frustum;
pub mod plane;
mod round;
mod sided;
pub mod sphere;

pub use cone::Cone;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use frustum::Frustum;
pub use plane::Plane;
pub use sphere::Sphere;

use glam::{DVec2, DVec3};

use crate::params::{ShapeKind, ShapeParams, Sidedness};
use crate::pivot::Pivot;
use crate::tessellation::side_count_with_arc;

/// Produces the buffers of one shape.
///
/// Implementors describe the front-facing mesh only. Buffer lengths from
/// the counting methods always match the buffers the `generate_*` methods
/// return for the same sidedness.
pub trait ShapeGenerator {
    fn kind(&self) -> ShapeKind;

    /// Distance from the geometric center to the bounding faces per axis.
    fn half_extents(&self) -> DVec3;

    fn front_vertex_count(&self) -> usize;

    fn front_triangle_count(&self) -> usize;

    /// Front positions with `offset` subtracted from each.
    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3>;

    fn front_normals(&self) -> Vec<DVec3>;

    fn front_uvs(&self) -> Vec<DVec2>;

    fn front_triangles(&self) -> Vec<[u32; 3]>;

    /// The sidedness actually emitted for a requested one.
    fn resolve_sidedness(&self, requested: Sidedness) -> Sidedness {
        requested
    }

    /// Translation subtracted from raw vertices for `pivot`.
    fn vertex_offset(&self, pivot: Pivot) -> DVec3 {
        pivot.offset(self.half_extents())
    }

    fn vertex_count(&self, sidedness: Sidedness) -> usize {
        self.front_vertex_count() * self.resolve_sidedness(sidedness).multiplier()
    }

    fn triangle_count(&self, sidedness: Sidedness) -> usize {
        self.front_triangle_count() * self.resolve_sidedness(sidedness).multiplier()
    }

    fn index_count(&self, sidedness: Sidedness) -> usize {
        self.triangle_count(sidedness) * 3
    }

    fn generate_vertices(&self, sidedness: Sidedness, offset: DVec3) -> Vec<DVec3> {
        let front = self.front_vertices(offset);
        match self.resolve_sidedness(sidedness) {
            Sidedness::Single => front,
            Sidedness::Double => sided::mirror_vertices(front),
        }
    }

    fn generate_normals(&self, sidedness: Sidedness) -> Vec<DVec3> {
        let front = self.front_normals();
        match self.resolve_sidedness(sidedness) {
            Sidedness::Single => front,
            Sidedness::Double => sided::mirror_normals(front),
        }
    }

    fn generate_uvs(&self, sidedness: Sidedness) -> Vec<DVec2> {
        let front = self.front_uvs();
        match self.resolve_sidedness(sidedness) {
            Sidedness::Single => front,
            Sidedness::Double => sided::mirror_uvs(front),
        }
    }

    fn generate_triangles(&self, sidedness: Sidedness) -> Vec<[u32; 3]> {
        let front = self.front_triangles();
        match self.resolve_sidedness(sidedness) {
            Sidedness::Single => front,
            Sidedness::Double => sided::mirror_triangles(front, self.front_vertex_count()),
        }
    }
}

/// A generator for any shape kind.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{Shape, ShapeGenerator, ShapeParams, Sidedness};
///
/// let shape = Shape::from_params(&ShapeParams::cylinder(4.0, 2.0), 0.1);
/// // 126 sides: two discs of 127 vertices and a band of 254
/// assert_eq!(shape.vertex_count(Sidedness::Single), 508);
/// assert_eq!(shape.triangle_count(Sidedness::Double), 1008);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Box(Cuboid),
    Cone(Cone),
    Cylinder(Cylinder),
    Frustum(Frustum),
    Sphere(Sphere),
}

impl Shape {
    /// Builds the generator for `params`, deriving side counts from
    /// `arc_length`.
    pub fn from_params(params: &ShapeParams, arc_length: f64) -> Self {
        match *params {
            ShapeParams::Plane { x_size, z_size } => Shape::Plane(Plane::new(x_size, z_size)),
            ShapeParams::Box {
                x_size,
                y_size,
                z_size,
            } => Shape::Box(Cuboid::new(x_size, y_size, z_size)),
            ShapeParams::Cone { height, radius } => {
                Shape::Cone(Cone::new(height, radius, side_count_with_arc(radius, arc_length)))
            }
            ShapeParams::Cylinder { height, radius } => Shape::Cylinder(Cylinder::new(
                height,
                radius,
                side_count_with_arc(radius, arc_length),
            )),
            ShapeParams::Frustum {
                height,
                top_radius,
                bottom_radius,
            } => Shape::Frustum(Frustum::new(
                height,
                top_radius,
                bottom_radius,
                side_count_with_arc(top_radius.max(bottom_radius), arc_length),
            )),
            ShapeParams::Sphere { radius } => Shape::Sphere(Sphere::new(radius)),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $shape:ident => $body:expr) => {
        match $self {
            Shape::Plane($shape) => $body,
            Shape::Box($shape) => $body,
            Shape::Cone($shape) => $body,
            Shape::Cylinder($shape) => $body,
            Shape::Frustum($shape) => $body,
            Shape::Sphere($shape) => $body,
        }
    };
}

impl ShapeGenerator for Shape {
    fn kind(&self) -> ShapeKind {
        dispatch!(self, s => s.kind())
    }

    fn half_extents(&self) -> DVec3 {
        dispatch!(self, s => s.half_extents())
    }

    fn front_vertex_count(&self) -> usize {
        dispatch!(self, s => s.front_vertex_count())
    }

    fn front_triangle_count(&self) -> usize {
        dispatch!(self, s => s.front_triangle_count())
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        dispatch!(self, s => s.front_vertices(offset))
    }

    fn front_normals(&self) -> Vec<DVec3> {
        dispatch!(self, s => s.front_normals())
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        dispatch!(self, s => s.front_uvs())
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        dispatch!(self, s => s.front_triangles())
    }

    fn resolve_sidedness(&self, requested: Sidedness) -> Sidedness {
        dispatch!(self, s => s.resolve_sidedness(requested))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Checks shared by the per-shape tests.

    use super::*;
    use config::constants::DEGENERATE_AREA_EPSILON;

    /// Asserts buffer lengths agree with the counting methods.
    pub fn assert_counts(shape: &impl ShapeGenerator, sidedness: Sidedness) {
        let vertices = shape.generate_vertices(sidedness, DVec3::ZERO);
        let normals = shape.generate_normals(sidedness);
        let uvs = shape.generate_uvs(sidedness);
        let triangles = shape.generate_triangles(sidedness);

        assert_eq!(vertices.len(), shape.vertex_count(sidedness));
        assert_eq!(normals.len(), vertices.len());
        assert_eq!(uvs.len(), vertices.len());
        assert_eq!(triangles.len(), shape.triangle_count(sidedness));
        assert!(triangles
            .iter()
            .flatten()
            .all(|&i| (i as usize) < vertices.len()));
    }

    /// Asserts every non-degenerate triangle winds counter-clockwise about
    /// the normals of its corners.
    pub fn assert_outward_winding(shape: &impl ShapeGenerator, sidedness: Sidedness) {
        let vertices = shape.generate_vertices(sidedness, DVec3::ZERO);
        let normals = shape.generate_normals(sidedness);

        for (t, [a, b, c]) in shape.generate_triangles(sidedness).into_iter().enumerate() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
            if face.length() < DEGENERATE_AREA_EPSILON {
                continue;
            }
            for corner in [a, b, c] {
                assert!(
                    face.dot(normals[corner]) > 0.0,
                    "triangle {t} winds against the normal of vertex {corner}"
                );
            }
        }
    }
}
