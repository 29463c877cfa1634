//! Ear-clipping algorithm for creating a triangle mesh from a simple polygon.

use crate::math::{Point2, Real};
use crate::utils::{is_point_in_triangle, polygon_signed_area};

/// The information stored for each vertex in the ear clipping algorithm.
#[derive(Copy, Clone, Default)]
struct VertexInfo {
    /// The index of the previous vertex.
    prev: usize,
    /// The index of the next vertex.
    next: usize,
    /// Whether the interior angle at this vertex is at least 180 degrees.
    ///
    /// A vertex that is not reflex never becomes reflex again, so this is only
    /// re-evaluated for reflex vertices.
    is_reflex: bool,
}

/// Twice the signed area of the triangle `(a, b, c)`: positive if it turns left.
fn winding_value(a: &Point2, b: &Point2, c: &Point2) -> Real {
    (b.x - a.x) * (c.y - b.y) - (c.x - b.x) * (b.y - a.y)
}

fn is_reflex(is_ccw: bool, winding: Real) -> bool {
    if is_ccw {
        winding <= 0.0
    } else {
        winding >= 0.0
    }
}

/// Ear clipping triangulation algorithm.
///
/// The polygon is given by its vertices in order, and can be either clockwise
/// or counter-clockwise. It must be simple (no self-intersection, no hole).
/// The returned triangles index into `polygon` and have the same winding as
/// the polygon.
///
/// Returns `None` if the polygon has less than three vertices, or if no ear
/// could be found at some point, which happens for degenerate polygons (e.g.
/// all the vertices are collinear).
pub fn triangulate_ear_clipping(polygon: &[Point2]) -> Option<Vec<[u32; 3]>> {
    let n_vertices = polygon.len();

    if n_vertices < 3 {
        return None;
    }

    let mut vertex_info: Vec<_> = (0..n_vertices)
        .map(|i| VertexInfo {
            prev: (i + n_vertices - 1) % n_vertices,
            next: (i + 1) % n_vertices,
            is_reflex: false,
        })
        .collect();

    let corner_winding = |info: &VertexInfo, i: usize| {
        winding_value(&polygon[info.prev], &polygon[i], &polygon[info.next])
    };

    // The sign of the area is not affected by nearly collinear vertices, unlike
    // the winding of a single corner.
    let is_ccw = polygon_signed_area(polygon) > 0.0;

    for (i, info) in vertex_info.iter_mut().enumerate() {
        info.is_reflex = is_reflex(is_ccw, corner_winding(info, i));
    }

    let mut output_indices = Vec::with_capacity(n_vertices - 2);
    let mut remaining = n_vertices;
    let mut skipped = 0;
    let mut current = 0;

    while remaining > 3 {
        let VertexInfo { prev, next, .. } = vertex_info[current];

        if is_ear(polygon, &vertex_info, current) {
            output_indices.push([prev as u32, current as u32, next as u32]);

            vertex_info[prev].next = next;
            vertex_info[next].prev = prev;

            for neighbor in [prev, next] {
                if vertex_info[neighbor].is_reflex {
                    let winding = corner_winding(&vertex_info[neighbor], neighbor);
                    vertex_info[neighbor].is_reflex = is_reflex(is_ccw, winding);
                }
            }

            remaining -= 1;
            skipped = 0;
        } else {
            skipped += 1;

            if skipped > remaining {
                log::debug!(
                    "ear clipping failed: no ear among the {} remaining vertices of a {}-gon",
                    remaining,
                    n_vertices
                );
                return None;
            }
        }

        current = next;
    }

    let VertexInfo { prev, next, .. } = vertex_info[current];
    output_indices.push([prev as u32, current as u32, next as u32]);

    Some(output_indices)
}

/// Triangulates a simple polygon with ear clipping, returning a flat index buffer.
///
/// Every three consecutive indices form one triangle with the same winding as
/// the polygon. The result is empty if the polygon has less than three
/// vertices or could not be triangulated. See [`triangulate_ear_clipping`].
pub fn triangulate(polygon: &[Point2]) -> Vec<u32> {
    triangulate_ear_clipping(polygon)
        .map(|triangles| triangles.into_flattened())
        .unwrap_or_default()
}

/// A convex vertex is an ear if no reflex vertex lies inside the triangle it
/// forms with its neighbors. Convex vertices can't be inside the ear.
fn is_ear(polygon: &[Point2], vertex_info: &[VertexInfo], i: usize) -> bool {
    let info = &vertex_info[i];

    if info.is_reflex {
        return false;
    }

    let (a, b, c) = (&polygon[info.prev], &polygon[i], &polygon[info.next]);

    // Clipped vertices are never reflex so this only visits remaining vertices.
    !vertex_info.iter().enumerate().any(|(j, other)| {
        other.is_reflex
            && j != info.prev
            && j != info.next
            && is_point_in_triangle(&polygon[j], a, b, c) == Some(true)
    })
}
