//! Definition of the cutting plane.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// An infinite plane splitting the space into a kept and a removed half-space.
///
/// The plane is the set of points `p` such that `normal · p + distance == 0`.
/// Points with `normal · p + distance >= 0` are on the kept side, points with
/// a negative value are on the removed side. Points lying exactly on the plane
/// are kept.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The unit normal of the plane, pointing toward the kept half-space.
    pub normal: UnitVector,
    /// The signed distance of the plane from the origin, along `-normal`.
    pub distance: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and its signed distance from the origin.
    #[inline]
    pub fn new(normal: UnitVector, distance: Real) -> Self {
        Self { normal, distance }
    }

    /// Builds the plane passing through `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: &Point, normal: &UnitVector) -> Self {
        Self::new(*normal, -normal.dot(&point.coords))
    }

    /// Builds the plane passing through the three given points.
    ///
    /// The normal is `(b - a) × (c - a)`, normalized, i.e., it points toward
    /// the side from which `a, b, c` appear counter-clockwise. Returns `None`
    /// if the points are collinear.
    pub fn from_points(a: &Point, b: &Point, c: &Point) -> Option<Self> {
        let normal = UnitVector::try_new((b - a).cross(&(c - a)), DEFAULT_EPSILON)?;
        Some(Self::from_point_and_normal(a, &normal))
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::from(*self.normal * -self.distance)
    }

    /// The same plane with its kept and removed sides swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.distance)
    }

    /// Evaluates `normal · pt + distance`.
    ///
    /// This is the signed distance from `pt` to the plane, positive on the kept side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point) -> Real {
        self.normal.dot(&pt.coords) + self.distance
    }

    /// Is `pt` on the kept side of this plane?
    ///
    /// Points exactly on the plane are kept.
    #[inline]
    pub fn is_kept(&self, pt: &Point) -> bool {
        self.signed_distance(pt) >= 0.0
    }

    /// Orthogonally projects `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point) -> Point {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// The point where the line through `start` and `end` crosses this plane.
    ///
    /// The line is parametrized by its unit direction from `start`, and the
    /// result is `start` moved along that direction by the distance at which
    /// the ray hits the plane. This is meant for segments whose endpoints lie
    /// on different sides of the plane.
    ///
    /// A segment with `start == end` has no direction: the result then has
    /// non-finite coordinates. Meshes with duplicate vertices inside the same
    /// triangle hit this case.
    pub fn segment_intersection(&self, start: &Point, end: &Point) -> Point {
        let dir: Vector = (end - start).normalize();
        let toi = -self.signed_distance(start) / self.normal.dot(&dir);
        start + dir * toi
    }
}
