use super::{assert_consistently_oriented, build_box};
use planecut3d::math::{Point, Real, UnitVector, Vector};
use planecut3d::query::{CapStatus, MeshCutTolerances};
use planecut3d::shape::{Plane, Triangle};
use planecut3d::transformation::PlanarCap;

fn first_plane() -> Plane {
    Plane::from_points(
        &Point::new(0.5, 1.0, 0.0),
        &Point::new(0.5, 1.0, 1.0),
        &Point::new(1.5, 0.0, 0.0),
    )
    .unwrap()
}

fn second_plane() -> Plane {
    Plane::from_points(
        &Point::new(2.0, 0.9, 0.5),
        &Point::new(2.6, 0.2, 0.1),
        &Point::new(2.9, 0.1, 0.9),
    )
    .unwrap()
}

#[test]
fn box_is_closed() {
    let mesh = build_box();

    assert_eq!(mesh.num_triangles(), 12);
    assert!(mesh.is_closed());
    assert_consistently_oriented(&mesh);
    assert_relative_eq!(mesh.signed_volume(), 3.0, epsilon = 1.0e-5);
}

#[test]
fn box_cut_is_closed() {
    let mesh = build_box();
    let cut = mesh
        .cut_by_plane_with_tolerances(&first_plane(), MeshCutTolerances::default())
        .unwrap();

    assert!(matches!(cut.cap, CapStatus::Filled { num_triangles } if num_triangles >= 2));
    assert!(cut.mesh.is_closed());
    assert_consistently_oriented(&cut.mesh);
    // Everything with x + y < 1.5 is removed.
    assert_relative_eq!(cut.mesh.signed_volume(), 2.0, epsilon = 1.0e-4);

    for pt in cut.mesh.vertices() {
        assert!(first_plane().signed_distance(pt) > -1.0e-4);
    }
}

#[test]
fn box_cross_section_ring() {
    let mesh = build_box();
    let plane = first_plane();
    let mut cap = PlanarCap::new(&plane);

    for tri in mesh.triangles() {
        if let Ok([a, b]) = tri.split_by_plane(&plane).cut_edge() {
            cap.add_edge(&a, &b);
        }
    }

    let ring = cap.polygon().unwrap();
    assert!(ring.len() >= 4);

    for pt in &ring {
        assert_relative_eq!(plane.signed_distance(pt), 0.0, epsilon = 1.0e-4);
    }

    // The four corners of the rectangular cross-section are part of the ring.
    let corners = [
        Point::new(1.5, 0.0, 0.0),
        Point::new(1.5, 0.0, 1.0),
        Point::new(0.5, 1.0, 0.0),
        Point::new(0.5, 1.0, 1.0),
    ];
    for corner in &corners {
        assert!(ring
            .iter()
            .any(|pt| relative_eq!(*pt, *corner, epsilon = 1.0e-4)));
    }

    let cap_area: Real = cap
        .triangles()
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|tri| Triangle::from(tri).area())
        .sum();
    assert_relative_eq!(cap_area, Real::sqrt(2.0), epsilon = 1.0e-4);
}

#[test]
fn box_cut_twice_is_closed() {
    let mesh = build_box();
    let once = mesh.cut_by_plane(&first_plane()).unwrap();
    let twice = once
        .cut_by_plane_with_tolerances(&second_plane(), MeshCutTolerances::default())
        .unwrap();

    assert!(matches!(twice.cap, CapStatus::Filled { .. }));
    assert!(twice.mesh.is_closed());
    assert_consistently_oriented(&twice.mesh);
    assert_relative_eq!(twice.mesh.signed_volume(), 1.4, epsilon = 1.0e-3);
}

#[test]
fn complementary_cuts_add_up() {
    let mesh = build_box();
    let planes = [
        first_plane(),
        second_plane(),
        Plane::from_point_and_normal(&Point::new(1.3, 0.0, 0.0), &Vector::x_axis()),
        Plane::from_point_and_normal(&Point::new(0.0, 0.0, 0.4), &-Vector::z_axis()),
        Plane::from_point_and_normal(
            &Point::new(1.5, 0.5, 0.5),
            &UnitVector::new_normalize(Vector::new(0.3, -1.0, 0.7)),
        ),
    ];

    for plane in &planes {
        let kept = mesh.cut_by_plane(plane).unwrap();
        let removed = mesh.cut_by_plane(&plane.flipped()).unwrap();

        assert!(kept.is_closed());
        assert!(removed.is_closed());
        assert_consistently_oriented(&kept);
        assert_consistently_oriented(&removed);
        assert!(kept.signed_volume() > 0.0);
        assert!(removed.signed_volume() > 0.0);
        assert_relative_eq!(
            kept.signed_volume() + removed.signed_volume(),
            3.0,
            epsilon = 1.0e-3
        );
    }
}

#[test]
fn plane_missing_the_box() {
    let mesh = build_box();
    let plane = Plane::from_point_and_normal(&Point::new(-1.0, 0.0, 0.0), &Vector::x_axis());
    let cut = mesh
        .cut_by_plane_with_tolerances(&plane, MeshCutTolerances::default())
        .unwrap();

    assert_eq!(cut.cap, CapStatus::NotNeeded);
    assert_eq!(cut.mesh, mesh);

    let everything_removed = mesh.cut_by_plane(&plane.flipped()).unwrap();
    assert!(everything_removed.is_empty());
}
