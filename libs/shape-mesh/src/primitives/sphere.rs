//! # Sphere Primitive
//!
//! UV sphere on a fixed longitude/latitude grid.
//!
//! Grid vertex `(lat, lon)` sits at polar angle `φ = π·lat/LAT` and
//! azimuth `λ = 2π·lon/LON`:
//!
//! ```text
//! (sin φ·cos λ, cos φ, sin φ·sin λ)·r
//! ```
//!
//! Row `lat` holds `LON + 1` vertices; the last column repeats the first
//! so the texture seam gets U = 1. Rows 0 and `LAT` collapse onto the
//! poles.

use config::constants::{SPHERE_LATITUDE_SEGMENTS, SPHERE_LONGITUDE_SEGMENTS};
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};

use super::ShapeGenerator;
use crate::params::ShapeKind;

const LON: u32 = SPHERE_LONGITUDE_SEGMENTS;
const LAT: u32 = SPHERE_LATITUDE_SEGMENTS;
const ROW: u32 = LON + 1;

/// # Example
///
/// ```rust
/// use shape_mesh::primitives::Sphere;
/// use shape_mesh::{ShapeGenerator, Sidedness};
///
/// let sphere = Sphere::new(1.0);
/// assert_eq!(sphere.vertex_count(Sidedness::Single), 1617);
/// assert_eq!(sphere.triangle_count(Sidedness::Single), 3072);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit directions in row-major (latitude, longitude) order.
    fn directions() -> impl Iterator<Item = DVec3> {
        (0..=LAT).flat_map(|lat| {
            let (sin_phi, cos_phi) = (PI * f64::from(lat) / f64::from(LAT)).sin_cos();
            (0..=LON).map(move |lon| {
                let (sin_lambda, cos_lambda) =
                    (TAU * f64::from(lon % LON) / f64::from(LON)).sin_cos();
                DVec3::new(sin_phi * cos_lambda, cos_phi, sin_phi * sin_lambda)
            })
        })
    }
}

impl ShapeGenerator for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn half_extents(&self) -> DVec3 {
        DVec3::splat(self.radius)
    }

    fn front_vertex_count(&self) -> usize {
        (ROW * (LAT + 1)) as usize
    }

    fn front_triangle_count(&self) -> usize {
        (2 * LON * LAT) as usize
    }

    fn front_vertices(&self, offset: DVec3) -> Vec<DVec3> {
        Self::directions()
            .map(|direction| direction * self.radius - offset)
            .collect()
    }

    /// Normals are the unit directions, independent of the radius.
    fn front_normals(&self) -> Vec<DVec3> {
        Self::directions().collect()
    }

    fn front_uvs(&self) -> Vec<DVec2> {
        (0..=LAT)
            .flat_map(|lat| {
                let v = 1.0 - f64::from(lat) / f64::from(LAT);
                (0..=LON).map(move |lon| DVec2::new(f64::from(lon) / f64::from(LON), v))
            })
            .collect()
    }

    fn front_triangles(&self) -> Vec<[u32; 3]> {
        let mut out = Vec::with_capacity(self.front_triangle_count());
        for lat in 0..LAT {
            for lon in 0..LON {
                let current = lat * ROW + lon;
                let next = current + ROW;
                out.push([current, current + 1, next]);
                out.push([next, current + 1, next + 1]);
            }
        }
        out
    }
}
