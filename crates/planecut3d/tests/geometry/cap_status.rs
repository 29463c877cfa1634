use super::{assert_consistently_oriented, build_box};
use planecut3d::math::{Point, UnitVector, Vector};
use planecut3d::query::{CapStatus, MeshCutError, MeshCutTolerances};
use planecut3d::shape::{Plane, TriMesh};
use planecut3d::transformation::PolygonAssemblyError;

#[test]
fn cap_faces_outward() {
    let mesh = build_box();
    let plane = Plane::from_point_and_normal(
        &Point::new(1.2, 0.4, 0.6),
        &UnitVector::new_normalize(Vector::new(-0.5, 0.3, 1.0)),
    );
    let cut = mesh.cut_by_plane(&plane).unwrap();
    let mut num_cap_triangles = 0;

    for tri in cut.triangles() {
        let on_plane = tri
            .vertices()
            .iter()
            .all(|pt| plane.signed_distance(pt).abs() < 1.0e-4);

        if on_plane {
            num_cap_triangles += 1;
            assert!(tri.scaled_normal().dot(&plane.normal) <= 1.0e-6);
        }
    }

    assert!(num_cap_triangles >= 2);
}

#[test]
fn disjoint_cross_sections_are_rejected() {
    // Two boxes side by side, both crossed by the plane.
    let (mut vertices, mut indices) = build_box().into_parts();
    let shift = Vector::new(0.0, 2.0, 0.0);
    let num_vertices = vertices.len() as u32;
    let shifted: Vec<_> = vertices.iter().map(|pt| pt + shift).collect();
    let shifted_indices: Vec<_> = indices
        .iter()
        .map(|idx| idx.map(|i| i + num_vertices))
        .collect();
    vertices.extend(shifted);
    indices.extend(shifted_indices);
    let mesh = TriMesh::new(vertices, indices).unwrap();
    assert!(mesh.is_closed());

    let plane = Plane::from_point_and_normal(&Point::new(1.0, 0.0, 0.0), &Vector::x_axis());
    let result = mesh.cut_by_plane(&plane);

    assert!(matches!(
        result,
        Err(MeshCutError::MalformedCap(PolygonAssemblyError::OpenRing { total, .. })) if total >= 8
    ));
}

#[test]
fn double_sided_triangle_needs_no_cap() {
    // Both sides of a single triangle: closed, but with no volume.
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    ];
    let mesh = TriMesh::new(vertices, vec![[0, 1, 2], [0, 2, 1]]).unwrap();
    assert!(mesh.is_closed());

    let plane = Plane::from_point_and_normal(&Point::new(1.0, 0.0, 0.0), &Vector::x_axis());
    let cut = mesh
        .cut_by_plane_with_tolerances(&plane, MeshCutTolerances::default())
        .unwrap();

    // Both kept triangles share the cut edge.
    assert_eq!(cut.cap, CapStatus::NotNeeded);
    assert_eq!(cut.mesh.num_triangles(), 2);
    assert_eq!(cut.mesh.vertices().len(), 3);
    assert!(cut.mesh.is_closed());
}

#[test]
fn flat_cross_section_is_left_unfilled() {
    // Both sides of a square, triangulated along different diagonals.
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(2.0, 2.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    ];
    let indices = vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];
    let mesh = TriMesh::new(vertices, indices).unwrap();
    assert!(mesh.is_closed());

    // The cross-section is a ring of four collinear points.
    let plane = Plane::from_point_and_normal(&Point::new(0.5, 0.0, 0.0), &Vector::x_axis());
    let cut = mesh
        .cut_by_plane_with_tolerances(&plane, MeshCutTolerances::default())
        .unwrap();

    assert_eq!(cut.cap, CapStatus::Unfilled);
    assert_eq!(cut.mesh.num_triangles(), 6);
    assert_eq!(cut.mesh.vertices().len(), 6);
    assert!(!cut.mesh.is_closed());
}

#[test]
fn plane_through_a_box_edge() {
    let mesh = build_box();
    // Contains the edge (0, 0, 0) -> (3, 0, 0) and the diagonal of both end faces.
    let plane = Plane::new(
        UnitVector::new_normalize(Vector::new(0.0, 1.0, -1.0)),
        0.0,
    );
    let cut = mesh
        .cut_by_plane_with_tolerances(&plane, MeshCutTolerances::default())
        .unwrap();

    assert!(matches!(cut.cap, CapStatus::Filled { .. }));
    assert!(cut.mesh.is_closed());
    assert_consistently_oriented(&cut.mesh);
    assert_relative_eq!(cut.mesh.signed_volume(), 1.5, epsilon = 1.0e-5);
}

#[test]
fn coarse_tolerances_merge_close_vertices() {
    let mesh = build_box();
    // Passes 1.0e-3 away from the corner e = (3, 0, 0).
    let plane = Plane::from_point_and_normal(&Point::new(2.999, 0.0, 0.0), &-Vector::x_axis());

    let fine = mesh
        .cut_by_plane_with_tolerances(&plane, MeshCutTolerances::default())
        .unwrap();
    let coarse = mesh
        .cut_by_plane_with_tolerances(
            &plane,
            MeshCutTolerances {
                weld_tolerance: 1.0e-2,
                cap_tolerance: 1.0e-2,
            },
        )
        .unwrap();

    assert!(fine.mesh.is_closed());
    assert!(coarse.mesh.vertices().len() < fine.mesh.vertices().len());
}
