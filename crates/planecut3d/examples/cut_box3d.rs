use planecut3d::math::Point;
use planecut3d::query::{CapStatus, MeshCutTolerances};
use planecut3d::shape::{Plane, TriMesh};

fn main() {
    let mesh = build_box();
    print_stats("box", &mesh);

    let planes = [
        Plane::from_points(
            &Point::new(0.5, 1.0, 0.0),
            &Point::new(0.5, 1.0, 1.0),
            &Point::new(1.5, 0.0, 0.0),
        ),
        Plane::from_points(
            &Point::new(2.0, 0.9, 0.5),
            &Point::new(2.6, 0.2, 0.1),
            &Point::new(2.9, 0.1, 0.9),
        ),
    ];

    let mut current = mesh;

    for (i, plane) in planes.iter().enumerate() {
        let Some(plane) = plane else {
            println!("cut #{}: the three points are collinear", i + 1);
            return;
        };

        match current.cut_by_plane_with_tolerances(plane, MeshCutTolerances::default()) {
            Ok(cut) => {
                match cut.cap {
                    CapStatus::NotNeeded => println!("cut #{}: the plane misses the mesh", i + 1),
                    CapStatus::Filled { num_triangles } => {
                        println!("cut #{}: cap made of {} triangles", i + 1, num_triangles)
                    }
                    CapStatus::Unfilled => println!("cut #{}: the cap is left open", i + 1),
                }
                current = cut.mesh;
                print_stats(&format!("after cut #{}", i + 1), &current);
            }
            Err(e) => {
                println!("cut #{} failed: {}", i + 1, e);
                return;
            }
        }
    }

    #[cfg(feature = "wavefront")]
    {
        let path = std::env::temp_dir().join("cut_box3d.obj");
        match current.to_obj_file(&path) {
            Ok(()) => println!("wrote {}", path.display()),
            Err(e) => println!("could not write {}: {}", path.display(), e),
        }
    }
}

fn print_stats(name: &str, mesh: &TriMesh) {
    println!(
        "{}: {} vertices, {} triangles, closed: {}, volume: {:.4}",
        name,
        mesh.vertices().len(),
        mesh.num_triangles(),
        mesh.is_closed(),
        mesh.signed_volume()
    );
}

fn build_box() -> TriMesh {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(3.0, 0.0, 0.0),
        Point::new(3.0, 0.0, 1.0),
        Point::new(3.0, 1.0, 0.0),
        Point::new(3.0, 1.0, 1.0),
    ];
    let faces = [
        vec![0, 1, 3, 2],
        vec![0, 2, 6, 4],
        vec![2, 3, 7, 6],
        vec![0, 4, 5, 1],
        vec![1, 5, 7, 3],
        vec![4, 6, 7, 5],
    ];

    match TriMesh::from_polygonal_faces(vertices, &faces) {
        Ok(mesh) => mesh,
        Err(e) => panic!("invalid box faces: {}", e),
    }
}
