//! # Shape Factory
//!
//! Entry point for callers: turns shape parameters into assembled buffers.
//!
//! ## Usage
//!
//! ```rust
//! use config::MeshConfig;
//! use shape_mesh::{Pivot, ShapeDescriptor, ShapeFactory, ShapeParams, Sidedness};
//!
//! let factory = ShapeFactory::new(MeshConfig::strict());
//! let meshes = factory.build_all(&[
//!     ShapeDescriptor::new(ShapeParams::cuboid(1.0, 1.0, 1.0)).with_sidedness(Sidedness::Single),
//!     ShapeDescriptor::new(ShapeParams::sphere(0.0)).with_pivot(Pivot::Top),
//! ]);
//! assert_eq!(meshes[0].as_ref().unwrap().vertex_count(), 24);
//! assert!(meshes[1].is_err());
//! ```

use config::MeshConfig;
use rayon::prelude::*;

use crate::assembler::assemble;
use crate::buffers::MeshBuffers;
use crate::error::MeshResult;
use crate::params::{ShapeDescriptor, ShapeParams, Sidedness};
use crate::pivot::Pivot;
use crate::primitives::Shape;

/// Builds one mesh with the default, permissive configuration.
///
/// Degenerate extents are accepted and yield degenerate but index-safe
/// geometry.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{build, Pivot, ShapeParams, Sidedness};
///
/// let plane = build(ShapeParams::plane(5.0, 5.0), Sidedness::Single, Pivot::Center, "Floor");
/// assert_eq!(plane.vertex_count(), 8);
/// assert_eq!(plane.index_count(), 12);
/// ```
pub fn build(
    params: ShapeParams,
    sidedness: Sidedness,
    pivot: Pivot,
    name: impl Into<String>,
) -> MeshBuffers {
    let shape = Shape::from_params(&params, MeshConfig::default().arc_length);
    assemble(name, &shape, sidedness, pivot)
}

/// Builds meshes under one [`MeshConfig`].
///
/// Holds no state besides its configuration, so one factory can serve any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeFactory {
    config: MeshConfig,
}

impl ShapeFactory {
    pub fn new(config: MeshConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Builds one mesh, validating extents first if the configuration asks
    /// for it.
    pub fn build(
        &self,
        params: ShapeParams,
        sidedness: Sidedness,
        pivot: Pivot,
        name: impl Into<String>,
    ) -> MeshResult<MeshBuffers> {
        if self.config.validate_extents {
            params.validate()?;
        }
        let shape = Shape::from_params(&params, self.config.arc_length);
        Ok(assemble(name, &shape, sidedness, pivot))
    }

    pub fn build_descriptor(&self, descriptor: &ShapeDescriptor) -> MeshResult<MeshBuffers> {
        self.build(
            descriptor.shape,
            descriptor.sidedness,
            descriptor.pivot,
            descriptor.display_name(),
        )
    }

    /// Builds every descriptor in parallel.
    ///
    /// Results keep the input order. One failing descriptor does not stop
    /// the others.
    pub fn build_all(&self, descriptors: &[ShapeDescriptor]) -> Vec<MeshResult<MeshBuffers>> {
        let results: Vec<_> = descriptors
            .par_iter()
            .map(|descriptor| self.build_descriptor(descriptor))
            .collect();

        log::debug!(
            "built batch of {} meshes ({} failed)",
            results.len(),
            results.iter().filter(|result| result.is_err()).count()
        );
        results
    }

    /// Parses a JSON array of descriptors and builds them all.
    ///
    /// Fails on malformed JSON or on the first descriptor that fails to
    /// build, in input order.
    pub fn build_json(&self, json: &str) -> MeshResult<Vec<MeshBuffers>> {
        let descriptors: Vec<ShapeDescriptor> = serde_json::from_str(json)?;
        self.build_all(&descriptors).into_iter().collect()
    }
}
