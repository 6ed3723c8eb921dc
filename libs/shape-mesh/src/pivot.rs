//! # Pivot
//!
//! Anchor placement of a mesh's local origin.
//!
//! Axis convention is right-handed with Y up: Top is +Y, Right is +X and
//! Front is +Z.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Where the local origin of a generated mesh sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pivot {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Pivot {
    /// All pivots in declaration order.
    pub const ALL: [Pivot; 7] = [
        Pivot::Center,
        Pivot::Top,
        Pivot::Bottom,
        Pivot::Left,
        Pivot::Right,
        Pivot::Front,
        Pivot::Back,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Pivot::Center => "center",
            Pivot::Top => "top",
            Pivot::Bottom => "bottom",
            Pivot::Left => "left",
            Pivot::Right => "right",
            Pivot::Front => "front",
            Pivot::Back => "back",
        }
    }

    /// Translation subtracted from every raw vertex.
    ///
    /// `half_extents` is the distance from the shape's geometric center to
    /// its bounding faces along each axis. Shapes with no extent along an
    /// axis pass zero there, so the matching pivots resolve to no offset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use shape_mesh::Pivot;
    ///
    /// let half = DVec3::new(1.0, 2.5, 3.0);
    /// assert_eq!(Pivot::Top.offset(half), DVec3::new(0.0, 2.5, 0.0));
    /// assert_eq!(Pivot::Left.offset(half), DVec3::new(-1.0, 0.0, 0.0));
    /// assert_eq!(Pivot::Center.offset(half), DVec3::ZERO);
    /// ```
    pub fn offset(self, half_extents: DVec3) -> DVec3 {
        match self {
            Pivot::Center => DVec3::ZERO,
            Pivot::Top => DVec3::new(0.0, half_extents.y, 0.0),
            Pivot::Bottom => DVec3::new(0.0, -half_extents.y, 0.0),
            Pivot::Left => DVec3::new(-half_extents.x, 0.0, 0.0),
            Pivot::Right => DVec3::new(half_extents.x, 0.0, 0.0),
            Pivot::Front => DVec3::new(0.0, 0.0, half_extents.z),
            Pivot::Back => DVec3::new(0.0, 0.0, -half_extents.z),
        }
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pivot {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pivot::ALL
            .into_iter()
            .find(|pivot| pivot.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeshError::UnknownPivot(s.to_string()))
    }
}
