//! # Configuration Constants
//!
//! Centralized constants for the shape mesh pipeline. Tessellation limits,
//! fixed sphere resolution, and the degenerate-triangle threshold are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Degenerate-triangle threshold
//! - **Tessellation**: Arc length and side count bounds for round shapes
//! - **Sphere Resolution**: Fixed longitude/latitude segment counts
//! - **Names**: Default display names per shape kind

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Area below which a triangle is treated as degenerate.
///
/// Sphere pole rows and zero-radius caps produce triangles with two
/// coincident corners; checks that depend on a face normal skip them.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default arc length of one polygon side on a circular cross-section.
///
/// The side count of a circle is its circumference divided by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ARC_LENGTH;
///
/// let radius = 2.0;
/// let sides = (std::f64::consts::TAU * radius / DEFAULT_ARC_LENGTH).round();
/// assert_eq!(sides, 126.0);
/// ```
pub const DEFAULT_ARC_LENGTH: f64 = 0.1;

/// Minimum number of sides for any circular cross-section.
///
/// A triangle is the smallest closed polygon.
pub const MIN_SIDE_COUNT: u32 = 3;

/// Maximum number of sides for any circular cross-section.
///
/// Hard safety limit bounding the worst-case buffer size.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SIDE_COUNT;
///
/// let requested: u32 = 62_832; // radius 1000 at the default arc length
/// assert_eq!(requested.min(MAX_SIDE_COUNT), 2000);
/// ```
pub const MAX_SIDE_COUNT: u32 = 2000;

// =============================================================================
// SPHERE RESOLUTION
// =============================================================================

/// Number of longitude segments around a sphere.
pub const SPHERE_LONGITUDE_SEGMENTS: u32 = 48;

/// Number of latitude segments from pole to pole.
pub const SPHERE_LATITUDE_SEGMENTS: u32 = 32;

// =============================================================================
// DEFAULT NAMES
// =============================================================================

/// Default display name of a generated plane.
pub const DEFAULT_PLANE_NAME: &str = "PlaneMesh";

/// Default display name of a generated box.
pub const DEFAULT_BOX_NAME: &str = "BoxMesh";

/// Default display name of a generated cone.
pub const DEFAULT_CONE_NAME: &str = "ConeMesh";

/// Default display name of a generated cylinder.
pub const DEFAULT_CYLINDER_NAME: &str = "CylinderMesh";

/// Default display name of a generated frustum.
pub const DEFAULT_FRUSTUM_NAME: &str = "FrustumMesh";

/// Default display name of a generated sphere.
pub const DEFAULT_SPHERE_NAME: &str = "SphereMesh";
