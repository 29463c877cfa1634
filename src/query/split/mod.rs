pub use self::mesh_cut_error::MeshCutError;
pub use self::split::{CutEdgeError, SplitResult};
pub use self::split_trimesh::{cut_mesh_buffers, CapStatus, MeshCut, MeshCutTolerances};

mod mesh_cut_error;
mod split;
mod split_triangle;
mod split_trimesh;
