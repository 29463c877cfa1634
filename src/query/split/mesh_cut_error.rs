use crate::shape::TriMeshBuilderError;
use crate::transformation::PolygonAssemblyError;

#[cfg(doc)]
use crate::shape::TriMesh;

/// Errors that can occur when cutting a triangle mesh by a plane.
///
/// A cut that could not triangulate its cap is not an error: it is reported by
/// [`CapStatus::Unfilled`](crate::query::CapStatus::Unfilled) instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MeshCutError {
    /// The input vertex and index buffers do not form a valid triangle mesh.
    ///
    /// This can only happen when cutting raw buffers with
    /// [`cut_mesh_buffers`](crate::query::cut_mesh_buffers): a [`TriMesh`]
    /// is always valid.
    #[error("invalid input mesh: {0}")]
    InvalidMesh(#[from] TriMeshBuilderError),

    /// The edges created by the cut do not form a single closed ring.
    ///
    /// This happens if the input mesh is not closed, or if the cross-section
    /// is made of several disjoint polygons, e.g., when cutting through both
    /// legs of a U-shaped mesh.
    #[error("the cross-section of the cut is not a single closed polygon: {0}")]
    MalformedCap(#[from] PolygonAssemblyError),
}
