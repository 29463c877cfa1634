use crate::math::Point;
use arrayvec::ArrayVec;

/// The result of cutting a triangle by a plane.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitResult {
    /// The triangle lies entirely on the kept side of the plane.
    Unchanged([Point; 3]),
    /// The triangle straddles the plane.
    Clipped {
        /// The one or two triangles covering the kept part, wound like the input triangle.
        triangles: ArrayVec<[Point; 3], 2>,
        /// The segment where the triangle crosses the plane.
        cut_edge: [Point; 2],
    },
    /// The triangle lies entirely on the removed side of the plane.
    Discarded,
}

/// Error returned when asking for the cut edge of a triangle that was not clipped.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CutEdgeError {
    /// The triangle was entirely removed so it has no cut edge.
    #[error("the triangle was discarded and has no cut edge")]
    Discarded,
    /// The triangle was entirely kept so it has no cut edge.
    #[error("the triangle was left unchanged and has no cut edge")]
    Unchanged,
}

impl SplitResult {
    /// The triangles remaining on the kept side of the plane.
    pub fn triangles(&self) -> &[[Point; 3]] {
        match self {
            Self::Unchanged(tri) => core::slice::from_ref(tri),
            Self::Clipped { triangles, .. } => triangles.as_slice(),
            Self::Discarded => &[],
        }
    }

    /// The segment where the triangle crossed the plane.
    ///
    /// Only clipped triangles have one.
    pub fn cut_edge(&self) -> Result<[Point; 2], CutEdgeError> {
        match self {
            Self::Clipped { cut_edge, .. } => Ok(*cut_edge),
            Self::Unchanged(_) => Err(CutEdgeError::Unchanged),
            Self::Discarded => Err(CutEdgeError::Discarded),
        }
    }

    /// Was the triangle crossed by the plane?
    pub fn is_clipped(&self) -> bool {
        matches!(self, Self::Clipped { .. })
    }
}
