//! # Shape Parameters
//!
//! Shape kinds, their geometric extents, sidedness, and the serializable
//! descriptor the factory builds from.

use std::fmt;
use std::str::FromStr;

use config::constants::{
    DEFAULT_BOX_NAME, DEFAULT_CONE_NAME, DEFAULT_CYLINDER_NAME, DEFAULT_FRUSTUM_NAME,
    DEFAULT_PLANE_NAME, DEFAULT_SPHERE_NAME,
};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::pivot::Pivot;

/// The fieldless discriminant of [`ShapeParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Plane,
    Box,
    Cone,
    Cylinder,
    Frustum,
    Sphere,
}

impl ShapeKind {
    /// All shape kinds in declaration order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Plane,
        ShapeKind::Box,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Frustum,
        ShapeKind::Sphere,
    ];

    /// Lowercase name used in descriptors and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Box => "box",
            ShapeKind::Cone => "cone",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Frustum => "frustum",
            ShapeKind::Sphere => "sphere",
        }
    }

    /// Display name given to a mesh built without an explicit name.
    pub fn default_name(self) -> &'static str {
        match self {
            ShapeKind::Plane => DEFAULT_PLANE_NAME,
            ShapeKind::Box => DEFAULT_BOX_NAME,
            ShapeKind::Cone => DEFAULT_CONE_NAME,
            ShapeKind::Cylinder => DEFAULT_CYLINDER_NAME,
            ShapeKind::Frustum => DEFAULT_FRUSTUM_NAME,
            ShapeKind::Sphere => DEFAULT_SPHERE_NAME,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeshError::UnknownShapeKind(s.to_string()))
    }
}

/// Geometric extents of a shape, one variant per kind.
///
/// Extents are never mutated after construction. Non-positive values are
/// accepted and produce degenerate geometry unless validation is requested.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{ShapeKind, ShapeParams};
///
/// let params = ShapeParams::frustum(5.0, 2.0, 3.0);
/// assert_eq!(params.kind(), ShapeKind::Frustum);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParams {
    Plane {
        x_size: f64,
        z_size: f64,
    },
    Box {
        x_size: f64,
        y_size: f64,
        z_size: f64,
    },
    Cone {
        height: f64,
        radius: f64,
    },
    Cylinder {
        height: f64,
        radius: f64,
    },
    Frustum {
        height: f64,
        top_radius: f64,
        bottom_radius: f64,
    },
    Sphere {
        radius: f64,
    },
}

impl ShapeParams {
    pub fn plane(x_size: f64, z_size: f64) -> Self {
        Self::Plane { x_size, z_size }
    }

    pub fn cuboid(x_size: f64, y_size: f64, z_size: f64) -> Self {
        Self::Box {
            x_size,
            y_size,
            z_size,
        }
    }

    pub fn cone(height: f64, radius: f64) -> Self {
        Self::Cone { height, radius }
    }

    pub fn cylinder(height: f64, radius: f64) -> Self {
        Self::Cylinder { height, radius }
    }

    pub fn frustum(height: f64, top_radius: f64, bottom_radius: f64) -> Self {
        Self::Frustum {
            height,
            top_radius,
            bottom_radius,
        }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Returns the kind of shape these parameters describe.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Plane { .. } => ShapeKind::Plane,
            ShapeParams::Box { .. } => ShapeKind::Box,
            ShapeParams::Cone { .. } => ShapeKind::Cone,
            ShapeParams::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParams::Frustum { .. } => ShapeKind::Frustum,
            ShapeParams::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Named extents in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeParams::Plane { x_size, z_size } => vec![("x_size", x_size), ("z_size", z_size)],
            ShapeParams::Box {
                x_size,
                y_size,
                z_size,
            } => vec![("x_size", x_size), ("y_size", y_size), ("z_size", z_size)],
            ShapeParams::Cone { height, radius } | ShapeParams::Cylinder { height, radius } => {
                vec![("height", height), ("radius", radius)]
            }
            ShapeParams::Frustum {
                height,
                top_radius,
                bottom_radius,
            } => vec![
                ("height", height),
                ("top_radius", top_radius),
                ("bottom_radius", bottom_radius),
            ],
            ShapeParams::Sphere { radius } => vec![("radius", radius)],
        }
    }

    /// Checks every extent is finite and strictly positive.
    ///
    /// Reports the first offending field.
    pub fn validate(&self) -> MeshResult<()> {
        let kind = self.kind();
        match self
            .dimensions()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            Some((field, value)) => Err(MeshError::invalid_dimension(kind, field, value)),
            None => Ok(()),
        }
    }
}

/// Whether a mesh renders from its outward face only or from both faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sidedness {
    Single,
    #[default]
    Double,
}

impl Sidedness {
    /// Number of copies of each face group the sidedness emits.
    #[inline]
    pub fn multiplier(self) -> usize {
        match self {
            Sidedness::Single => 1,
            Sidedness::Double => 2,
        }
    }
}

impl From<bool> for Sidedness {
    /// `true` means double-sided.
    fn from(double_sided: bool) -> Self {
        if double_sided {
            Sidedness::Double
        } else {
            Sidedness::Single
        }
    }
}

impl FromStr for Sidedness {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Sidedness::Single),
            "double" => Ok(Sidedness::Double),
            _ => Err(MeshError::UnknownSidedness(s.to_string())),
        }
    }
}

/// A serializable request for one mesh.
///
/// Missing `sidedness` defaults to double-sided, missing `pivot` to the
/// center, and a missing `name` to the kind's default name.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{Pivot, ShapeDescriptor};
///
/// let json = r#"{ "shape": { "kind": "cylinder", "height": 4.0, "radius": 1.0 }, "pivot": "bottom" }"#;
/// let desc: ShapeDescriptor = serde_json::from_str(json).unwrap();
/// assert_eq!(desc.pivot, Pivot::Bottom);
/// assert_eq!(desc.display_name(), "CylinderMesh");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub shape: ShapeParams,
    #[serde(default)]
    pub sidedness: Sidedness,
    #[serde(default)]
    pub pivot: Pivot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ShapeDescriptor {
    pub fn new(shape: ShapeParams) -> Self {
        Self {
            shape,
            sidedness: Sidedness::default(),
            pivot: Pivot::default(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_sidedness(mut self, sidedness: Sidedness) -> Self {
        self.sidedness = sidedness;
        self
    }

    #[must_use]
    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The explicit name, or the kind's default name.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.shape.kind().default_name())
    }
}
