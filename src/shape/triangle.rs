//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// A triangle shape.
///
/// The order of the points defines the winding of the triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point,
    /// The triangle second point.
    pub b: Point,
    /// The triangle third point.
    pub c: Point,
}

impl From<[Point; 3]> for Triangle {
    fn from(arr: [Point; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three points of this triangle, in order.
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented counter-clockwise.
    ///
    /// Its norm is twice the triangle area. It is zero for a degenerate triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle assuming it is oriented counter-clockwise.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector> {
        UnitVector::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() / 2.0
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
