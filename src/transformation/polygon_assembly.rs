use crate::math::{Point2, Real, DEFAULT_WELD_TOLERANCE};
use crate::utils::PointWelder;
use smallvec::SmallVec;

/// Error indicating that a set of edges does not form a single simple ring.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PolygonAssemblyError {
    /// No edge with a non-zero length was given.
    #[error("no edge was given to the polygon assembler")]
    Empty,
    /// A point is not shared by exactly two edges.
    #[error("the point {point} is shared by {degree} edges instead of 2")]
    InvalidDegree {
        /// The faulty point.
        point: Point2,
        /// The number of edges sharing this point.
        degree: usize,
    },
    /// Two points are only connected to each other, by the same edge given twice.
    #[error("the edge {a} -> {b} was given twice")]
    RepeatedEdge {
        /// The first point of the repeated edge.
        a: Point2,
        /// The second point of the repeated edge.
        b: Point2,
    },
    /// The edges form more than one ring.
    #[error("the ring closed after visiting {visited} of the {total} points")]
    OpenRing {
        /// The number of points visited before the walk closed.
        visited: usize,
        /// The total number of distinct points.
        total: usize,
    },
}

/// Rebuilds a polygon from its unordered edges.
///
/// Edges are given one by one, in any order and with any orientation.
/// Endpoints closer than the assembler tolerance on every axis are considered
/// to be the same point, so edges computed independently with slightly
/// different rounding still connect. Once every edge is added, the points
/// must form one closed ring where each point is shared by exactly two edges.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use planecut3d::math::Point2;
/// use planecut3d::transformation::PolygonAssembler;
///
/// let mut assembler = PolygonAssembler::new();
/// assembler.add_edge(Point2::new(1.0, 0.0), Point2::new(0.0, 0.0));
/// assembler.add_edge(Point2::new(1.0, 1.0), Point2::new(1.0, 0.0));
/// assembler.add_edge(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
///
/// let ring = assembler.clockwise_polygon().unwrap();
/// assert_eq!(
///     ring,
///     vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(1.0, 0.0)]
/// );
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PolygonAssembler {
    welder: PointWelder<2>,
    adjacency: Vec<SmallVec<[u32; 2]>>,
}

impl Default for PolygonAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonAssembler {
    /// Creates an empty assembler merging points closer than [`DEFAULT_WELD_TOLERANCE`].
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_WELD_TOLERANCE)
    }

    /// Creates an empty assembler merging points closer than `tolerance` on every axis.
    pub fn with_tolerance(tolerance: Real) -> Self {
        Self {
            welder: PointWelder::new(tolerance),
            adjacency: Vec::new(),
        }
    }

    /// The number of distinct points added so far.
    pub fn num_points(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if no edge was added yet.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds an edge of the polygon.
    ///
    /// Edges with both endpoints at the same point are ignored. They show up
    /// when a cutting plane passes exactly through a mesh vertex.
    pub fn add_edge(&mut self, a: Point2, b: Point2) {
        if self.welder.approx_eq(&a, &b) {
            log::debug!("ignoring zero-length polygon edge at {}", a);
            return;
        }

        let ia = self.insert(a);
        let ib = self.insert(b);

        if ia == ib {
            log::debug!("ignoring polygon edge {} -> {} welded to a single point", a, b);
            return;
        }

        self.adjacency[ia as usize].push(ib);
        self.adjacency[ib as usize].push(ia);
    }

    fn insert(&mut self, pt: Point2) -> u32 {
        let id = self.welder.insert(pt);

        if id as usize == self.adjacency.len() {
            self.adjacency.push(SmallVec::new());
        }

        id
    }

    /// Walks the ring formed by all the edges added so far.
    ///
    /// The walk starts at the leftmost point (the lowest one if several
    /// points are leftmost) and first heads toward the neighbor with the
    /// steepest slope, which makes the polygon clockwise.
    pub fn clockwise_polygon(&self) -> Result<Vec<Point2>, PolygonAssemblyError> {
        if self.adjacency.is_empty() {
            return Err(PolygonAssemblyError::Empty);
        }

        let points = self.welder.points();

        for (id, neighbors) in self.adjacency.iter().enumerate() {
            if neighbors.len() != 2 {
                return Err(PolygonAssemblyError::InvalidDegree {
                    point: points[id],
                    degree: neighbors.len(),
                });
            }

            if neighbors[0] == neighbors[1] {
                return Err(PolygonAssemblyError::RepeatedEdge {
                    a: points[id],
                    b: points[neighbors[0] as usize],
                });
            }
        }

        let total = points.len();
        let start = leftmost(points);
        let [n0, n1] = [self.adjacency[start][0], self.adjacency[start][1]];
        let first = if has_steeper_slope(&points[start], &points[n0 as usize], &points[n1 as usize])
        {
            n0
        } else {
            n1
        };

        let mut polygon = Vec::with_capacity(total);
        polygon.push(points[start]);
        let mut prev = start;
        let mut current = first as usize;

        while current != start {
            if polygon.len() >= total {
                return Err(PolygonAssemblyError::OpenRing {
                    visited: polygon.len(),
                    total,
                });
            }

            polygon.push(points[current]);

            let neighbors = &self.adjacency[current];
            let next = if neighbors[0] as usize == prev {
                neighbors[1]
            } else {
                neighbors[0]
            };

            prev = current;
            current = next as usize;
        }

        if polygon.len() != total {
            return Err(PolygonAssemblyError::OpenRing {
                visited: polygon.len(),
                total,
            });
        }

        Ok(polygon)
    }
}

/// Index of the leftmost point, ties broken by the smallest `y`.
fn leftmost(points: &[Point2]) -> usize {
    let mut best = 0;

    for (i, pt) in points.iter().enumerate().skip(1) {
        let lm = &points[best];
        if pt.x < lm.x || (pt.x == lm.x && pt.y < lm.y) {
            best = i;
        }
    }

    best
}

/// Is the slope of `origin -> a` strictly greater than the slope of `origin -> b`?
///
/// Both points must not be on the left of `origin`. Slopes are compared
/// without division so vertical directions are handled.
fn has_steeper_slope(origin: &Point2, a: &Point2, b: &Point2) -> bool {
    let da = a - origin;
    let db = b - origin;
    da.y * db.x > db.y * da.x
}
