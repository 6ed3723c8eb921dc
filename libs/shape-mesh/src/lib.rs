//! # Shape Mesh
//!
//! Procedural mesh generation for parametric shapes: plane, box, cone,
//! cylinder, frustum and sphere.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParams → Shape (ShapeGenerator) → assemble → MeshBuffers
//!                                         ↑
//!                      ShapeMesh (cached) / ShapeFactory (batch, JSON)
//! ```
//!
//! Each build yields four parallel buffers (positions, normals, UVs,
//! triangle indices) in a right-handed, Y-up frame. Front faces wind
//! counter-clockwise seen from outside.
//!
//! ## Usage
//!
//! ```rust
//! use shape_mesh::{build, Pivot, ShapeParams, Sidedness};
//!
//! let can = build(ShapeParams::cylinder(4.0, 2.0), Sidedness::Double, Pivot::Bottom, "Can");
//! assert!(can.validate().is_ok());
//! assert_eq!(can.bounding_box().0.y, 0.0);
//! ```

pub mod assembler;
pub mod buffers;
pub mod error;
pub mod factory;
pub mod params;
pub mod pivot;
pub mod primitives;
pub mod tessellation;

pub use assembler::{assemble, ShapeMesh};
pub use buffers::MeshBuffers;
pub use error::{MeshError, MeshResult};
pub use factory::{build, ShapeFactory};
pub use params::{ShapeDescriptor, ShapeKind, ShapeParams, Sidedness};
pub use pivot::Pivot;
pub use primitives::{Shape, ShapeGenerator};
