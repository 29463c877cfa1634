//! Triangulation and polygon reconstruction.

pub use self::ear_clipping::{triangulate, triangulate_ear_clipping};
pub use self::face_triangulation::{triangulate_planar_face, FaceTriangulationError};
pub use self::planar_cap::PlanarCap;
pub use self::polygon_assembly::{PolygonAssembler, PolygonAssemblyError};

mod ear_clipping;
mod face_triangulation;
mod planar_cap;
mod polygon_assembly;

#[cfg(feature = "wavefront")]
mod wavefront;
