use crate::math::{Point2, Real};

/// Computes the signed area of a closed 2D polygon.
///
/// The result is positive if the polygon is counter-clockwise and negative
/// if it is clockwise.
pub fn polygon_signed_area(points: &[Point2]) -> Real {
    let mut twice_area = 0.0;

    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }

    twice_area / 2.0
}
