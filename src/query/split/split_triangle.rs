use crate::query::SplitResult;
use crate::shape::{Plane, Triangle};
use arrayvec::ArrayVec;

impl Triangle {
    /// Cuts this triangle by a plane, keeping the part on the kept side of the plane.
    ///
    /// Vertices lying exactly on the plane are kept. The returned triangles
    /// have the same winding as `self`. If exactly one vertex is removed, the
    /// kept quadrilateral is returned as two triangles. If exactly two
    /// vertices are removed, the kept part is a single triangle.
    ///
    /// The crossing points are computed with [`Plane::segment_intersection`]
    /// along the edge going from the kept vertex to the removed vertex.
    pub fn split_by_plane(&self, plane: &Plane) -> SplitResult {
        let pts = self.vertices();
        let kept = pts.map(|pt| plane.is_kept(&pt));

        match kept.iter().filter(|k| !**k).count() {
            0 => SplitResult::Unchanged(pts),
            1 => {
                let ir = kept.iter().position(|k| !*k).unwrap_or(0);
                let r = pts[ir];
                let s = pts[(ir + 1) % 3];
                let p = pts[(ir + 2) % 3];

                let x = plane.segment_intersection(&p, &r);
                let y = plane.segment_intersection(&s, &r);

                let mut triangles = ArrayVec::new();
                triangles.push([x, y, p]);
                triangles.push([y, s, p]);

                SplitResult::Clipped {
                    triangles,
                    cut_edge: [x, y],
                }
            }
            2 => {
                let ik = kept.iter().position(|k| *k).unwrap_or(0);
                let k = pts[ik];
                let s = pts[(ik + 1) % 3];
                let p = pts[(ik + 2) % 3];

                let x = plane.segment_intersection(&k, &p);
                let y = plane.segment_intersection(&k, &s);

                let mut triangles = ArrayVec::new();
                triangles.push([x, k, y]);

                SplitResult::Clipped {
                    triangles,
                    cut_edge: [x, y],
                }
            }
            _ => SplitResult::Discarded,
        }
    }
}
