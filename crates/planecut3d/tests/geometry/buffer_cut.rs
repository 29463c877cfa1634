use super::build_box;
use na::{Point3, Unit, Vector3};
use planecut3d::query::{cut_mesh_buffers, MeshCutError};
use planecut3d::shape::{Plane, TriMeshBuilderError};

#[test]
fn cut_box_buffers() {
    let mesh = build_box();
    let plane = Plane::from_point_and_normal(
        &Point3::new(1.0, 0.5, 0.5),
        &Unit::new_normalize(Vector3::new(1.0, 0.2, -0.1)),
    );

    let cut = cut_mesh_buffers(mesh.vertices(), mesh.flat_indices(), &plane).unwrap();

    assert_eq!(cut, mesh.cut_by_plane(&plane).unwrap());
    assert!(cut.is_closed());
    assert_eq!(cut.flat_indices().len(), 3 * cut.num_triangles());
}

#[test]
fn invalid_buffers_are_rejected() {
    let mesh = build_box();
    let plane = Plane::from_point_and_normal(&Point3::new(1.0, 0.0, 0.0), &Vector3::x_axis());
    let flat = mesh.flat_indices();

    assert_eq!(
        cut_mesh_buffers(mesh.vertices(), &flat[..flat.len() - 1], &plane),
        Err(MeshCutError::InvalidMesh(
            TriMeshBuilderError::InvalidIndexCount(flat.len() - 1)
        ))
    );

    let mut out_of_bounds = flat.to_vec();
    out_of_bounds[4] = 8;
    assert_eq!(
        cut_mesh_buffers(mesh.vertices(), &out_of_bounds, &plane),
        Err(MeshCutError::InvalidMesh(
            TriMeshBuilderError::IndexOutOfBounds {
                index: 8,
                num_vertices: 8
            }
        ))
    );
}
