//! Various unsorted geometrical and logical operators.

pub use self::planar_transform::PlanarTransform;
pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};
pub use self::signed_area::polygon_signed_area;
pub use self::sorted_pair::SortedPair;
pub use self::weld::PointWelder;

pub mod hashmap;
mod planar_transform;
mod point_in_triangle;
mod signed_area;
mod sorted_pair;
mod weld;
