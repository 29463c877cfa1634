use crate::math::Point;
use crate::shape::{TriMesh, TriMeshBuilderError};
use crate::transformation::triangulate_ear_clipping;
use crate::utils::PlanarTransform;

/// Error indicating that a planar polygonal face could not be triangulated.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaceTriangulationError {
    /// A face needs at least three points.
    #[error("a face needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    /// The first three points of the face are collinear so they don't define its plane.
    #[error("the first three points of the face are collinear")]
    DegenerateFace,
    /// The face polygon has no ear to clip.
    #[error("the face polygon could not be triangulated")]
    TriangulationFailed,
    /// The triangulated faces do not form a valid triangle mesh.
    #[error("TriMeshBuilderError: {0}")]
    InvalidMesh(#[from] TriMeshBuilderError),
}

/// Triangulates a planar polygonal face given by its ordered 3D points.
///
/// The plane of the face is the one passing through its first three points,
/// so these must not be collinear. The other points are projected on that
/// plane. The returned triangles index into `points` and face the same way as
/// the corner formed by the first three points.
pub fn triangulate_planar_face(points: &[Point]) -> Result<Vec<[u32; 3]>, FaceTriangulationError> {
    if points.len() < 3 {
        return Err(FaceTriangulationError::TooFewPoints(points.len()));
    }

    let transform = PlanarTransform::from_points(&points[0], &points[1], &points[2])
        .ok_or(FaceTriangulationError::DegenerateFace)?;
    let polygon: Vec<_> = points.iter().map(|pt| transform.to_plane_2d(pt)).collect();

    triangulate_ear_clipping(&polygon).ok_or(FaceTriangulationError::TriangulationFailed)
}

impl TriMesh {
    /// Creates a triangle mesh from planar polygonal faces.
    ///
    /// Each face is a list of indices into `vertices` and is triangulated with
    /// [`triangulate_planar_face`].
    pub fn from_polygonal_faces(
        vertices: Vec<Point>,
        faces: &[Vec<u32>],
    ) -> Result<Self, FaceTriangulationError> {
        let mut indices = Vec::new();
        let mut face_points = Vec::new();

        for face in faces {
            face_points.clear();

            for &i in face {
                let pt = vertices.get(i as usize).ok_or(
                    TriMeshBuilderError::IndexOutOfBounds {
                        index: i,
                        num_vertices: vertices.len(),
                    },
                )?;
                face_points.push(*pt);
            }

            let triangles = triangulate_planar_face(&face_points)?;
            indices.extend(
                triangles
                    .iter()
                    .map(|t| [face[t[0] as usize], face[t[1] as usize], face[t[2] as usize]]),
            );
        }

        Ok(TriMesh::new(vertices, indices)?)
    }
}
