//! Non-persistent geometric queries.
//!
//! The main query of this crate is the cut of a triangle mesh by a plane:
//!
//! * [`Triangle::split_by_plane`](crate::shape::Triangle::split_by_plane) cuts a single triangle.
//! * [`TriMesh::cut_by_plane`](crate::shape::TriMesh::cut_by_plane) cuts a whole closed mesh
//!   and caps the resulting hole.
//! * [`cut_mesh_buffers`] does the same starting from raw vertex and index buffers.

pub use self::split::{
    cut_mesh_buffers, CapStatus, CutEdgeError, MeshCut, MeshCutError, MeshCutTolerances,
    SplitResult,
};

mod split;
