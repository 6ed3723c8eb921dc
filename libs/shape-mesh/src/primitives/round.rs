//! # Round Building Blocks
//!
//! Discs and lateral bands shared by the cone, cylinder and frustum.
//!
//! Rim point `i` of `n` sits at angle `θ = i·2π/n`:
//!
//! ```text
//! (r·cos θ, y, r·sin θ)
//! ```
//!
//! A disc is a center vertex followed by `n` rim vertices. A band is
//! `n + 1` (bottom, top) pairs, the last pair repeating the first so the
//! texture seam gets its own U = 1 column.

use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Which way a disc faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    Down,
    Up,
}

impl Facing {
    fn normal(self) -> DVec3 {
        match self {
            Facing::Down => DVec3::NEG_Y,
            Facing::Up => DVec3::Y,
        }
    }
}

/// Unit direction `(cos θ, sin θ)` of rim step `step` out of `sides`.
///
/// Step `sides` wraps to step 0 so seam vertices coincide exactly.
#[inline]
pub(crate) fn rim_direction(step: u32, sides: u32) -> DVec2 {
    let angle = f64::from(step % sides) * TAU / f64::from(sides);
    let (sin, cos) = angle.sin_cos();
    DVec2::new(cos, sin)
}

#[inline]
fn rim_point(direction: DVec2, radius: f64, y: f64) -> DVec3 {
    DVec3::new(direction.x * radius, y, direction.y * radius)
}

#[inline]
pub(crate) fn disc_vertex_count(sides: u32) -> usize {
    sides as usize + 1
}

#[inline]
pub(crate) fn band_vertex_count(sides: u32) -> usize {
    2 * (sides as usize + 1)
}

pub(crate) fn push_disc_vertices(
    out: &mut Vec<DVec3>,
    radius: f64,
    y: f64,
    sides: u32,
    offset: DVec3,
) {
    out.push(DVec3::new(0.0, y, 0.0) - offset);
    out.extend((0..sides).map(|i| rim_point(rim_direction(i, sides), radius, y) - offset));
}

pub(crate) fn push_disc_normals(out: &mut Vec<DVec3>, facing: Facing, sides: u32) {
    out.extend(std::iter::repeat(facing.normal()).take(disc_vertex_count(sides)));
}

/// Center at (0.5, 0.5), rim on the inscribed circle of the unit square.
pub(crate) fn push_disc_uvs(out: &mut Vec<DVec2>, sides: u32) {
    let center = DVec2::splat(0.5);
    out.push(center);
    out.extend((0..sides).map(|i| center + 0.5 * rim_direction(i, sides)));
}

/// Fan around the center vertex at `base`.
pub(crate) fn push_disc_triangles(out: &mut Vec<[u32; 3]>, base: u32, sides: u32, facing: Facing) {
    let center = base;
    for i in 1..sides {
        let (current, next) = (base + i, base + i + 1);
        out.push(match facing {
            Facing::Down => [center, current, next],
            Facing::Up => [center, next, current],
        });
    }
    let (last, first) = (base + sides, base + 1);
    out.push(match facing {
        Facing::Down => [center, last, first],
        Facing::Up => [center, first, last],
    });
}

/// Band pairs from a bottom ring to a top ring.
///
/// A zero `top_radius` collapses every top vertex onto the apex.
pub(crate) fn push_band_vertices(
    out: &mut Vec<DVec3>,
    bottom: (f64, f64),
    top: (f64, f64),
    sides: u32,
    offset: DVec3,
) {
    let (bottom_radius, bottom_y) = bottom;
    let (top_radius, top_y) = top;
    for i in 0..=sides {
        let direction = rim_direction(i, sides);
        out.push(rim_point(direction, bottom_radius, bottom_y) - offset);
        out.push(rim_point(direction, top_radius, top_y) - offset);
    }
}

/// Horizontal radial normals, one per pair.
pub(crate) fn push_band_normals(out: &mut Vec<DVec3>, sides: u32) {
    for i in 0..=sides {
        let direction = rim_direction(i, sides);
        let normal = DVec3::new(direction.x, 0.0, direction.y);
        out.push(normal);
        out.push(normal);
    }
}

/// U runs 0 to 1 around the band, V is 0 at the bottom and 1 at the top.
pub(crate) fn push_band_uvs(out: &mut Vec<DVec2>, sides: u32) {
    for i in 0..=sides {
        let u = f64::from(i) / f64::from(sides);
        out.push(DVec2::new(u, 0.0));
        out.push(DVec2::new(u, 1.0));
    }
}

/// Two triangles per quad between consecutive pairs.
pub(crate) fn push_band_triangles(out: &mut Vec<[u32; 3]>, base: u32, sides: u32) {
    for i in 0..sides {
        let p = base + 2 * i;
        out.push([p, p + 1, p + 3]);
        out.push([p + 3, p + 2, p]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rim_direction_quarters() {
        let d = rim_direction(1, 4);
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rim_direction_wraps_exactly() {
        assert_eq!(rim_direction(7, 7), rim_direction(0, 7));
    }

    #[test]
    fn test_disc_layout() {
        let mut vertices = Vec::new();
        push_disc_vertices(&mut vertices, 2.0, -1.0, 4, DVec3::ZERO);
        assert_eq!(vertices.len(), disc_vertex_count(4));
        assert_eq!(vertices[0], DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(vertices[1], DVec3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_disc_triangles_close_the_fan() {
        let mut down = Vec::new();
        push_disc_triangles(&mut down, 10, 3, Facing::Down);
        assert_eq!(down, vec![[10, 11, 12], [10, 12, 13], [10, 13, 11]]);

        let mut up = Vec::new();
        push_disc_triangles(&mut up, 10, 3, Facing::Up);
        assert_eq!(up, vec![[10, 12, 11], [10, 13, 12], [10, 11, 13]]);
    }

    #[test]
    fn test_disc_uvs_inside_unit_square() {
        let mut uvs = Vec::new();
        push_disc_uvs(&mut uvs, 16);
        assert_eq!(uvs[0], DVec2::splat(0.5));
        assert!(uvs
            .iter()
            .all(|uv| (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y)));
    }

    #[test]
    fn test_band_seam() {
        let mut vertices = Vec::new();
        push_band_vertices(&mut vertices, (1.0, 0.0), (1.0, 2.0), 5, DVec3::ZERO);
        assert_eq!(vertices.len(), band_vertex_count(5));
        assert_eq!(vertices[0], vertices[10]);
        assert_eq!(vertices[1], vertices[11]);

        let mut uvs = Vec::new();
        push_band_uvs(&mut uvs, 5);
        assert_eq!(uvs[10], DVec2::new(1.0, 0.0));
        assert_eq!(uvs[11], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_band_triangles() {
        let mut triangles = Vec::new();
        push_band_triangles(&mut triangles, 4, 2);
        assert_eq!(triangles, vec![[4, 5, 7], [7, 6, 4], [6, 7, 9], [9, 8, 6]]);
    }

    #[test]
    fn test_band_normals_horizontal() {
        let mut normals = Vec::new();
        push_band_normals(&mut normals, 8);
        assert_eq!(normals.len(), band_vertex_count(8));
        for n in normals {
            assert_eq!(n.y, 0.0);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }
}
