use crate::math::{Point, Real, DEFAULT_WELD_TOLERANCE};
use crate::shape::Plane;
use crate::transformation::{triangulate_ear_clipping, PolygonAssembler, PolygonAssemblyError};
use crate::utils::PlanarTransform;

/// Builds the triangles filling a planar hole from the edges of its boundary.
///
/// The edges must lie on the plane given at construction. They are expressed
/// in the 2D frame of that plane, assembled into a clockwise ring, and ear
/// clipped. The resulting triangles face the opposite direction of the plane
/// normal: for a mesh cut by a plane, they close the hole left on the kept
/// side with an outward-facing cap.
#[derive(Clone, Debug)]
pub struct PlanarCap {
    transform: PlanarTransform,
    assembler: PolygonAssembler,
}

impl PlanarCap {
    /// Creates an empty cap on the given plane.
    pub fn new(plane: &Plane) -> Self {
        Self::with_tolerance(plane, DEFAULT_WELD_TOLERANCE)
    }

    /// Creates an empty cap on the given plane, merging edge endpoints closer
    /// than `tolerance` on both axes of the plane frame.
    pub fn with_tolerance(plane: &Plane, tolerance: Real) -> Self {
        Self {
            transform: PlanarTransform::new(plane),
            assembler: PolygonAssembler::with_tolerance(tolerance),
        }
    }

    /// The 2D frame of the plane of this cap.
    pub fn transform(&self) -> &PlanarTransform {
        &self.transform
    }

    /// Returns `true` if no edge was added yet.
    pub fn is_empty(&self) -> bool {
        self.assembler.is_empty()
    }

    /// Adds an edge of the boundary of the cap.
    pub fn add_edge(&mut self, a: &Point, b: &Point) {
        self.assembler
            .add_edge(self.transform.to_plane_2d(a), self.transform.to_plane_2d(b));
    }

    /// The boundary of the cap as a ring of points on the plane.
    ///
    /// The ring is clockwise when seen from the tip of the plane normal.
    pub fn polygon(&self) -> Result<Vec<Point>, PolygonAssemblyError> {
        let ring = self.assembler.clockwise_polygon()?;
        Ok(ring.iter().map(|pt| self.transform.to_space_3d(pt)).collect())
    }

    /// The triangles filling the cap.
    ///
    /// Returns `Ok(None)` if the boundary forms a valid ring that could not be
    /// triangulated.
    pub fn triangles(&self) -> Result<Option<Vec<[Point; 3]>>, PolygonAssemblyError> {
        let ring = self.assembler.clockwise_polygon()?;

        let Some(indices) = triangulate_ear_clipping(&ring) else {
            return Ok(None);
        };

        let lift = |i: u32| self.transform.to_space_3d(&ring[i as usize]);
        Ok(Some(
            indices
                .iter()
                .map(|idx| [lift(idx[0]), lift(idx[1]), lift(idx[2])])
                .collect(),
        ))
    }
}
