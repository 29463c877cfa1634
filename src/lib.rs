/*!
planecut
========

**planecut** cuts closed triangle meshes by a plane. Triangles on the kept
side of the plane survive, triangles on the removed side are dropped, and
straddling triangles are re-triangulated. The cross-section left open by the
cut is rebuilt as a polygon, ear-clipped, and stitched back in as a cap so
the output stays closed.

```
# #[cfg(feature = "f32")] {
use planecut3d::math::{Point, Vector};
use planecut3d::shape::{Plane, TriMesh};

let vertices = vec![
    Point::new(0.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 0.0),
    Point::new(0.0, 1.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
];
let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
let tetrahedron = TriMesh::new(vertices, indices).unwrap();

// Keep everything above z = 0.25.
let plane = Plane::from_point_and_normal(&Point::new(0.0, 0.0, 0.25), &Vector::z_axis());
let cut = tetrahedron.cut_by_plane(&plane).unwrap();
assert!(cut.is_closed());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The default absolute, per-axis tolerance under which two points are
    /// considered to be the same point.
    ///
    /// Cut points are computed independently by every triangle sharing the
    /// crossed edge, so the same geometric point usually shows up several
    /// times with slightly different rounding. Points closer than this on
    /// every axis are merged. Geometry with features smaller than this value
    /// will be over-merged.
    pub const DEFAULT_WELD_TOLERANCE: Real = 1.0e-4;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = na::Point3<Real>;

    /// The point type of plane-local coordinates.
    pub type Point2 = na::Point2<Real>;

    /// The vector type.
    pub type Vector = na::Vector3<Real>;

    /// The vector type of plane-local coordinates.
    pub type Vector2 = na::Vector2<Real>;

    /// The unit vector type.
    pub type UnitVector = na::UnitVector3<Real>;
}
