//! # Mesh Assembler
//!
//! Runs a generator's steps in a fixed order and packs the results into
//! one immutable [`MeshBuffers`].
//!
//! ```text
//! offset → lengths → vertices → normals → triangles → uvs
//! ```

use std::sync::OnceLock;

use config::constants::DEFAULT_ARC_LENGTH;

use crate::buffers::MeshBuffers;
use crate::params::{ShapeParams, Sidedness};
use crate::pivot::Pivot;
use crate::primitives::{Shape, ShapeGenerator};

/// Generates the full buffer set of `generator`.
///
/// In debug builds, each buffer's length is checked against the count the
/// generator reported up front.
pub fn assemble(
    name: impl Into<String>,
    generator: &impl ShapeGenerator,
    sidedness: Sidedness,
    pivot: Pivot,
) -> MeshBuffers {
    let name = name.into();
    let offset = generator.vertex_offset(pivot);

    let vertex_count = generator.vertex_count(sidedness);
    let triangle_count = generator.triangle_count(sidedness);

    let vertices = generator.generate_vertices(sidedness, offset);
    let normals = generator.generate_normals(sidedness);
    let triangles = generator.generate_triangles(sidedness);
    let uvs = generator.generate_uvs(sidedness);

    debug_assert_eq!(vertices.len(), vertex_count, "vertex buffer length");
    debug_assert_eq!(normals.len(), vertex_count, "normal buffer length");
    debug_assert_eq!(uvs.len(), vertex_count, "uv buffer length");
    debug_assert_eq!(triangles.len(), triangle_count, "triangle buffer length");

    log::debug!(
        "assembled {name} ({}, {:?}, pivot {pivot}): {vertex_count} vertices, {triangle_count} triangles",
        generator.kind(),
        generator.resolve_sidedness(sidedness),
    );

    MeshBuffers::from_parts_unchecked(name, vertices, normals, uvs, triangles)
}

/// A named shape that assembles its buffers once, on first request.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{Pivot, ShapeMesh, ShapeParams, Sidedness};
///
/// let mesh = ShapeMesh::new("Ball", ShapeParams::sphere(5.0), Sidedness::Single, Pivot::Center);
/// let first = mesh.mesh();
/// let second = mesh.mesh();
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(first.index_count(), 9216);
/// ```
#[derive(Debug)]
pub struct ShapeMesh {
    name: String,
    shape: Shape,
    sidedness: Sidedness,
    pivot: Pivot,
    cache: OnceLock<MeshBuffers>,
}

impl ShapeMesh {
    /// Creates a shape tessellated at the default arc length.
    pub fn new(
        name: impl Into<String>,
        params: ShapeParams,
        sidedness: Sidedness,
        pivot: Pivot,
    ) -> Self {
        Self::from_shape(
            name,
            Shape::from_params(&params, DEFAULT_ARC_LENGTH),
            sidedness,
            pivot,
        )
    }

    pub fn from_shape(
        name: impl Into<String>,
        shape: Shape,
        sidedness: Sidedness,
        pivot: Pivot,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            sidedness,
            pivot,
            cache: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The sidedness actually emitted, which may differ from the requested
    /// one for planes.
    pub fn sidedness(&self) -> Sidedness {
        self.shape.resolve_sidedness(self.sidedness)
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Whether the buffers have been assembled yet.
    pub fn is_assembled(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Returns the assembled buffers, generating them on first call.
    pub fn mesh(&self) -> &MeshBuffers {
        if let Some(buffers) = self.cache.get() {
            log::trace!("mesh cache hit for {}", self.name);
            return buffers;
        }
        self.cache
            .get_or_init(|| assemble(self.name.clone(), &self.shape, self.sidedness, self.pivot))
    }

    /// Consumes the shape, returning its buffers.
    pub fn into_mesh(self) -> MeshBuffers {
        let Self {
            name,
            shape,
            sidedness,
            pivot,
            cache,
        } = self;
        cache
            .into_inner()
            .unwrap_or_else(|| assemble(name, &shape, sidedness, pivot))
    }
}
