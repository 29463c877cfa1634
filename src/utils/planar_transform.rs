use crate::math::{Point, Point2, UnitVector, Vector};
use crate::shape::Plane;

/// An orthonormal 2D coordinate frame embedded in a 3D plane.
///
/// The frame origin is the point of the plane closest to the 3D origin. Its
/// axes are unit vectors orthogonal to each other and to the plane normal,
/// with `x_axis × y_axis == normal`. Hence a polygon that is clockwise in the
/// 2D frame is clockwise when looking at the plane from the tip of its normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarTransform {
    origin: Point,
    x_axis: UnitVector,
    y_axis: UnitVector,
}

impl PlanarTransform {
    /// Builds the 2D frame of the given plane.
    pub fn new(plane: &Plane) -> Self {
        let origin = plane.origin();
        let x_axis = UnitVector::new_normalize(orthogonal_vector(&plane.normal));
        let y_axis = UnitVector::new_normalize(plane.normal.cross(&x_axis));

        Self {
            origin,
            x_axis,
            y_axis,
        }
    }

    /// Builds the 2D frame of the plane passing through three points.
    ///
    /// See [`Plane::from_points`] for the orientation of the plane. Returns
    /// `None` if the points are collinear.
    pub fn from_points(a: &Point, b: &Point, c: &Point) -> Option<Self> {
        Plane::from_points(a, b, c).map(|plane| Self::new(&plane))
    }

    /// The 3D position of the origin of the 2D frame.
    pub fn origin(&self) -> &Point {
        &self.origin
    }

    /// The 3D direction of the first axis of the 2D frame.
    pub fn x_axis(&self) -> &UnitVector {
        &self.x_axis
    }

    /// The 3D direction of the second axis of the 2D frame.
    pub fn y_axis(&self) -> &UnitVector {
        &self.y_axis
    }

    /// Expresses `pt` in the 2D frame.
    ///
    /// Points that are not on the plane are orthogonally projected on it first.
    #[inline]
    pub fn to_plane_2d(&self, pt: &Point) -> Point2 {
        let dpt = pt - self.origin;
        Point2::new(self.x_axis.dot(&dpt), self.y_axis.dot(&dpt))
    }

    /// The 3D position of a point given in the 2D frame.
    #[inline]
    pub fn to_space_3d(&self, pt: &Point2) -> Point {
        self.origin + *self.x_axis * pt.x + *self.y_axis * pt.y
    }
}

/// A vector orthogonal to `v`, non-zero whenever `v` is non-zero.
///
/// The component of `v` with the smallest magnitude is zeroed; the two others
/// are swapped and one of them is negated.
fn orthogonal_vector(v: &Vector) -> Vector {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());

    if ax <= ay && ax <= az {
        Vector::new(0.0, -v.z, v.y)
    } else if ay <= ax && ay <= az {
        Vector::new(-v.z, 0.0, v.x)
    } else {
        Vector::new(-v.y, v.x, 0.0)
    }
}
