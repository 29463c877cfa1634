use crate::math::{Point, Real};
use crate::shape::Triangle;
use crate::utils::hashmap::HashMap;
use crate::utils::SortedPair;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// The length of a flat index buffer is not a multiple of three.
    #[error("the index buffer length ({0}) is not a multiple of 3")]
    InvalidIndexCount(usize),
    /// An index does not identify any vertex of the vertex buffer.
    #[error("vertex index {index} is out of bounds (the vertex buffer has {num_vertices} vertices)")]
    IndexOutOfBounds {
        /// The faulty index.
        index: u32,
        /// The length of the vertex buffer.
        num_vertices: usize,
    },
}

/// A triangle mesh made of a vertex buffer and an index buffer.
///
/// Each element of the index buffer identifies one triangle by the indices of
/// its three vertices. The order of these indices defines the triangle
/// winding. Every index is guaranteed to be smaller than the vertex buffer
/// length.
///
/// A mesh may be empty, e.g., after a cut that removed everything.
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(vertices: Vec<Point>, indices: Vec<[u32; 3]>) -> Result<Self, TriMeshBuilderError> {
        let num_vertices = vertices.len();

        if let Some(&index) = indices
            .as_flattened()
            .iter()
            .find(|&&i| i as usize >= num_vertices)
        {
            return Err(TriMeshBuilderError::IndexOutOfBounds {
                index,
                num_vertices,
            });
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a new triangle mesh from a vertex buffer and a flat index buffer.
    ///
    /// Every three consecutive indices of `flat_indices` form one triangle, so
    /// its length must be a multiple of three.
    pub fn from_flat_indices(
        vertices: Vec<Point>,
        flat_indices: &[u32],
    ) -> Result<Self, TriMeshBuilderError> {
        if flat_indices.len() % 3 != 0 {
            return Err(TriMeshBuilderError::InvalidIndexCount(flat_indices.len()));
        }

        let indices = flat_indices
            .chunks_exact(3)
            .map(|idx| [idx[0], idx[1], idx[2]])
            .collect();
        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// A flat view of the index buffer of this mesh.
    pub fn flat_indices(&self) -> &[u32] {
        self.indices.as_flattened()
    }

    /// Consumes this mesh, returning its vertex buffer and its index buffer.
    pub fn into_parts(self) -> (Vec<Point>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh contain no triangle?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// Is this mesh closed, i.e., is each of its edges shared by exactly two triangles?
    ///
    /// An empty mesh is not closed.
    pub fn is_closed(&self) -> bool {
        if self.indices.is_empty() {
            return false;
        }

        let mut edge_counts: HashMap<SortedPair<u32>, u32> = HashMap::default();

        for idx in &self.indices {
            for k in 0..3 {
                *edge_counts
                    .entry(SortedPair::new(idx[k], idx[(k + 1) % 3]))
                    .or_insert(0) += 1;
            }
        }

        edge_counts.values().all(|count| *count == 2)
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// This is only meaningful for a closed mesh. It is positive if the
    /// triangles are oriented counter-clockwise when seen from the outside.
    pub fn signed_volume(&self) -> Real {
        self.triangles()
            .map(|tri| tri.a.coords.dot(&tri.b.coords.cross(&tri.c.coords)) / 6.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetrahedron() -> (Vec<Point>, Vec<[u32; 3]>) {
        let vertices = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        (vertices, indices)
    }

    #[test]
    fn tetrahedron_is_closed() {
        let (vertices, indices) = unit_tetrahedron();
        let mesh = TriMesh::new(vertices, indices).unwrap();

        assert!(mesh.is_closed());
        assert_eq!(mesh.num_triangles(), 4);
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1.0e-6);
    }

    #[test]
    fn open_mesh_is_not_closed() {
        let (vertices, mut indices) = unit_tetrahedron();
        let _ = indices.pop();
        let mesh = TriMesh::new(vertices, indices).unwrap();

        assert!(!mesh.is_closed());
        assert!(!TriMesh::default().is_closed());
    }

    #[test]
    fn flat_indices_round_trip() {
        let (vertices, indices) = unit_tetrahedron();
        let mesh = TriMesh::new(vertices.clone(), indices).unwrap();
        let from_flat = TriMesh::from_flat_indices(vertices, mesh.flat_indices()).unwrap();

        assert_eq!(mesh, from_flat);
        assert_eq!(mesh.flat_indices()[..3], [0, 2, 1]);
    }

    #[test]
    fn invalid_index_buffers() {
        let (vertices, _) = unit_tetrahedron();

        assert_eq!(
            TriMesh::from_flat_indices(vertices.clone(), &[0, 1, 2, 3]),
            Err(TriMeshBuilderError::InvalidIndexCount(4))
        );
        assert_eq!(
            TriMesh::new(vertices, vec![[0, 1, 4]]),
            Err(TriMeshBuilderError::IndexOutOfBounds {
                index: 4,
                num_vertices: 4
            })
        );
    }
}
