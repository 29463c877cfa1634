use planecut3d::math::Point;
use planecut3d::shape::TriMesh;
use std::collections::HashMap;

mod box_cut;
mod buffer_cut;
mod cap_status;

/// The 3x1x1 box used throughout the cut tests, built from its six quads.
pub fn build_box() -> TriMesh {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(0.0, 0.0, 1.0);
    let c = Point::new(0.0, 1.0, 0.0);
    let d = Point::new(0.0, 1.0, 1.0);
    let e = Point::new(3.0, 0.0, 0.0);
    let f = Point::new(3.0, 0.0, 1.0);
    let g = Point::new(3.0, 1.0, 0.0);
    let h = Point::new(3.0, 1.0, 1.0);

    let vertices = vec![a, b, c, d, e, f, g, h];
    let (a, b, c, d, e, f, g, h) = (0, 1, 2, 3, 4, 5, 6, 7);
    let faces = [
        vec![a, b, d, c],
        vec![a, c, g, e],
        vec![c, d, h, g],
        vec![a, e, f, b],
        vec![b, f, h, d],
        vec![e, g, h, f],
    ];

    TriMesh::from_polygonal_faces(vertices, &faces).unwrap()
}

/// Checks that every directed edge of the mesh is used exactly once and that
/// its reverse is used too, i.e., the mesh is closed and consistently oriented.
pub fn assert_consistently_oriented(mesh: &TriMesh) {
    let mut edges = HashMap::new();

    for idx in mesh.indices() {
        for k in 0..3 {
            let edge = (idx[k], idx[(k + 1) % 3]);
            *edges.entry(edge).or_insert(0) += 1;
        }
    }

    for (&(i, j), count) in &edges {
        assert_eq!(*count, 1, "directed edge ({}, {}) is used {} times", i, j, count);
        assert!(
            edges.contains_key(&(j, i)),
            "directed edge ({}, {}) has no opposite",
            i,
            j
        );
    }
}
