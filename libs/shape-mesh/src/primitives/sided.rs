//! # Double-Sided Mirroring
//!
//! A double-sided mesh is the front mesh followed by a mirrored copy:
//!
//! ```text
//! front:  v0 v1 ... v(n-1)
//! mirror: v(n-1) ... v1 v0      (normals negated, UVs copied)
//! ```
//!
//! Front vertex `i` reappears at `m(i) = 2n - 1 - i`, and each front
//! triangle `(a, b, c)` gets the mirror triangle `(m(c), m(b), m(a))`.

use glam::{DVec2, DVec3};

/// Appends the items in reverse order, transformed by `map`.
fn append_reversed<T: Copy>(mut items: Vec<T>, map: impl Fn(T) -> T) -> Vec<T> {
    let len = items.len();
    items.reserve_exact(len);
    for i in (0..len).rev() {
        let item = map(items[i]);
        items.push(item);
    }
    items
}

pub(crate) fn mirror_vertices(front: Vec<DVec3>) -> Vec<DVec3> {
    append_reversed(front, |v| v)
}

pub(crate) fn mirror_normals(front: Vec<DVec3>) -> Vec<DVec3> {
    append_reversed(front, |n| -n)
}

pub(crate) fn mirror_uvs(front: Vec<DVec2>) -> Vec<DVec2> {
    append_reversed(front, |uv| uv)
}

/// Appends one reverse-wound triangle per front triangle.
///
/// `vertex_count` is the number of front vertices.
pub(crate) fn mirror_triangles(mut front: Vec<[u32; 3]>, vertex_count: usize) -> Vec<[u32; 3]> {
    let Some(last) = (2 * vertex_count).checked_sub(1) else {
        return front;
    };
    debug_assert!(
        u32::try_from(last).is_ok(),
        "mirrored vertex count {} exceeds u32 indices",
        last + 1
    );
    let last = last as u32;

    let len = front.len();
    front.reserve_exact(len);
    for i in 0..len {
        let [a, b, c] = front[i];
        front.push([last - c, last - b, last - a]);
    }
    front
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_vertices_reverses() {
        let out = mirror_vertices(vec![DVec3::X, DVec3::Y, DVec3::Z]);
        assert_eq!(out, vec![DVec3::X, DVec3::Y, DVec3::Z, DVec3::Z, DVec3::Y, DVec3::X]);
    }

    #[test]
    fn test_mirror_normals_negates() {
        let out = mirror_normals(vec![DVec3::Y, DVec3::X]);
        assert_eq!(out, vec![DVec3::Y, DVec3::X, -DVec3::X, -DVec3::Y]);
    }

    #[test]
    fn test_mirror_uvs_copies() {
        let out = mirror_uvs(vec![DVec2::ZERO, DVec2::ONE]);
        assert_eq!(out, vec![DVec2::ZERO, DVec2::ONE, DVec2::ONE, DVec2::ZERO]);
    }

    #[test]
    fn test_mirror_triangles_reverse_winding() {
        // 4 front vertices: m(i) = 7 - i
        let out = mirror_triangles(vec![[0, 1, 2], [2, 3, 0]], 4);
        assert_eq!(out, vec![[0, 1, 2], [2, 3, 0], [5, 6, 7], [7, 4, 5]]);
    }

    #[test]
    fn test_mirror_triangles_empty() {
        assert!(mirror_triangles(vec![], 0).is_empty());
    }
}
