//! Shapes supported by planecut.

pub use self::plane::Plane;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod plane;
mod triangle;
mod trimesh;
