//! # Mesh Buffers
//!
//! The four parallel buffers a renderer consumes: positions, normals, UVs
//! and triangle indices, plus the mesh's display name.

use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::error::{MeshError, MeshResult};

/// An immutable set of renderable mesh buffers.
///
/// All geometry is f64 internally. Export to f32 only happens through the
/// `*_f32` helpers at the GPU boundary.
///
/// Invariants: `vertices`, `normals` and `uvs` have equal length, and every
/// triangle index is below that length.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{build, Pivot, ShapeParams, Sidedness};
///
/// let mesh = build(ShapeParams::cuboid(2.0, 2.0, 2.0), Sidedness::Single, Pivot::Center, "Crate");
/// assert_eq!(mesh.name(), "Crate");
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffers {
    name: String,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Unit vertex normals, parallel to `vertices`
    normals: Vec<DVec3>,
    /// Texture coordinates, parallel to `vertices`
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Assembles buffers, checking the length and index invariants.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> MeshResult<Self> {
        let buffers = Self::from_parts_unchecked(name.into(), vertices, normals, uvs, triangles);
        buffers.validate()?;
        Ok(buffers)
    }

    pub(crate) fn from_parts_unchecked(
        name: String,
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            name,
            vertices,
            normals,
            uvs,
            triangles,
        }
    }

    /// Display name handed to the rendering consumer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of flattened triangle indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - Normals and UVs have one entry per vertex
    /// - All triangle indices are in range
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();

        if self.normals.len() != vertex_count {
            return Err(MeshError::length_mismatch(
                "normals",
                vertex_count,
                self.normals.len(),
            ));
        }
        if self.uvs.len() != vertex_count {
            return Err(MeshError::length_mismatch("uvs", vertex_count, self.uvs.len()));
        }

        if let Some(&index) = self
            .triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Returns a copy with every vertex moved by `offset`.
    ///
    /// Normals and UVs are unchanged.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            ..self.clone()
        }
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.normals)
    }

    /// Exports UVs as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_vec3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshBuffers {
        MeshBuffers::new(
            "Tri",
            vec![DVec3::ZERO, DVec3::X, DVec3::Z],
            vec![DVec3::Y; 3],
            vec![DVec2::ZERO, DVec2::X, DVec2::Y],
            vec![[0, 2, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_new_valid() {
        let mesh = triangle();
        assert_eq!(mesh.name(), "Tri");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle(0), [0, 2, 1]);
        assert_eq!(mesh.vertex(1), DVec3::X);
    }

    #[test]
    fn test_new_rejects_short_normals() {
        let err = MeshBuffers::new(
            "Bad",
            vec![DVec3::ZERO, DVec3::X, DVec3::Z],
            vec![DVec3::Y; 2],
            vec![DVec2::ZERO; 3],
            vec![[0, 1, 2]],
        )
        .unwrap_err();
        assert_eq!(err, MeshError::length_mismatch("normals", 3, 2));
    }

    #[test]
    fn test_new_rejects_short_uvs() {
        let err = MeshBuffers::new(
            "Bad",
            vec![DVec3::ZERO; 3],
            vec![DVec3::Y; 3],
            vec![DVec2::ZERO; 4],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, MeshError::length_mismatch("uvs", 3, 4));
    }

    #[test]
    fn test_new_rejects_index_out_of_range() {
        let err = MeshBuffers::new(
            "Bad",
            vec![DVec3::ZERO; 3],
            vec![DVec3::Y; 3],
            vec![DVec2::ZERO; 3],
            vec![[0, 1, 3]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_bounding_box() {
        let mesh = triangle();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        let mesh = MeshBuffers::new("Empty", vec![], vec![], vec![], vec![]).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_translated_moves_only_positions() {
        let mesh = triangle();
        let moved = mesh.translated(DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(moved.vertex(0), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(moved.normals(), mesh.normals());
        assert_eq!(moved.uvs(), mesh.uvs());
        assert_eq!(moved.triangles(), mesh.triangles());
    }

    #[test]
    fn test_gpu_exports() {
        let mesh = triangle();
        assert_eq!(
            mesh.vertices_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(mesh.normals_f32().len(), 9);
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 2, 1]);
    }
}
