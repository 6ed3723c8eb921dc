//! # Mesh Errors
//!
//! Error types for shape mesh generation.
//!
//! Degenerate extents are not an error unless validation is enabled in
//! [`config::MeshConfig`]. Tessellation clamping is never an error.

use config::ConfigError;
use thiserror::Error;

use crate::params::ShapeKind;

/// Errors that can occur while describing, building, or checking a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A shape kind name did not match any known shape.
    #[error("Unknown shape kind: '{0}'")]
    UnknownShapeKind(String),

    /// A pivot name did not match any known pivot.
    #[error("Unknown pivot: '{0}'")]
    UnknownPivot(String),

    /// A sidedness name did not match any known sidedness.
    #[error("Unknown sidedness: '{0}'")]
    UnknownSidedness(String),

    /// An extent was zero, negative, or not finite while validation was on.
    #[error("Invalid {kind} dimension: {field} = {value} (must be positive and finite)")]
    InvalidDimension {
        kind: ShapeKind,
        field: &'static str,
        value: f64,
    },

    /// Parallel buffers disagree in length.
    #[error("Buffer length mismatch in {buffer}: expected {expected}, got {actual}")]
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A triangle references a vertex past the end of the vertex buffer.
    #[error("Triangle index out of range: {index} (vertex count: {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// A shape descriptor could not be parsed.
    #[error("Invalid shape descriptor: {0}")]
    InvalidDescriptor(String),

    /// Configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(kind: ShapeKind, field: &'static str, value: f64) -> Self {
        Self::InvalidDimension { kind, field, value }
    }

    /// Creates a buffer length mismatch error.
    pub fn length_mismatch(buffer: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            buffer,
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDescriptor(err.to_string())
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_dimension(ShapeKind::Cone, "radius", -1.0);
        let msg = err.to_string();
        assert!(msg.contains("cone"));
        assert!(msg.contains("radius"));
        assert!(msg.contains("-1"));

        let err = MeshError::length_mismatch("normals", 24, 23);
        assert!(err.to_string().contains("normals"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidArcLength(0.0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
