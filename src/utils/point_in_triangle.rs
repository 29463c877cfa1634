//! Function to check if a point is inside a triangle and related functions.

use crate::math::{Point2, Real};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line)
    None,
}

/// Returns the direction of a line through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// o p1
///  .        o p3
///   .     .
///    .  .
///     o p2
///
/// Clockwise example:
///     o p2
///    .  .
///   .     .
///  .        o p3
/// o p1
///
/// Non-finite inputs are reported as [`Orientation::None`].
pub fn corner_direction(p1: &Point2, p2: &Point2, p3: &Point2) -> Orientation {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    match cross.partial_cmp(&0.0) {
        Some(Ordering::Less) => Orientation::Ccw,
        Some(Ordering::Greater) => Orientation::Cw,
        Some(Ordering::Equal) | None => Orientation::None,
    }
}

/// Returns `true` if point `p` is in triangle with corners `v1`, `v2` and `v3`.
///
/// Points lying on an edge are inside. A point coinciding exactly with one of
/// the corners is *not* inside: an ear whose corner is shared with another
/// polygon vertex must not be rejected because of it.
///
/// Returns `None` if the triangle is invalid i.e. all points are the same or on a straight line.
pub fn is_point_in_triangle(p: &Point2, v1: &Point2, v2: &Point2, v3: &Point2) -> Option<bool> {
    if p == v1 || p == v2 || p == v3 {
        return Some(false);
    }

    let d1 = corner_direction(p, v1, v2);
    let d2 = corner_direction(p, v2, v3);
    let d3 = corner_direction(p, v3, v1);

    let has_cw = d1 == Orientation::Cw || d2 == Orientation::Cw || d3 == Orientation::Cw;
    let has_ccw = d1 == Orientation::Ccw || d2 == Orientation::Ccw || d3 == Orientation::Ccw;

    if d1 == Orientation::None && d2 == Orientation::None && d3 == Orientation::None {
        None
    } else {
        Some(!(has_cw && has_ccw))
    }
}
