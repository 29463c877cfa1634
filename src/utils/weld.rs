//! Tolerance-based deduplication of points.

use crate::math::Real;
use crate::utils::hashmap::HashMap;
use approx::AbsDiffEq;
use smallvec::SmallVec;

/// Merges points that are closer than a fixed tolerance on every axis.
///
/// Floating-point keys cannot be hashed consistently with an approximate
/// equality, so points are bucketed on a regular grid with cells as wide as
/// the tolerance instead. A point can only be tolerance-equal to points
/// stored in its own cell or in one of the directly adjacent cells, which are
/// all scanned on lookup.
///
/// Each distinct point gets a compact id in first-seen order. When a new
/// point is within tolerance of several stored points, the one with the
/// smallest id wins, so the result only depends on the insertion order.
///
/// Tolerance-equality is not transitive: a chain of points each within
/// tolerance of the next is not collapsed into a single point. Features
/// smaller than the tolerance are merged.
#[derive(Clone, Debug)]
pub struct PointWelder<const D: usize> {
    tolerance: Real,
    points: Vec<na::Point<Real, D>>,
    cells: HashMap<[i64; D], SmallVec<[u32; 4]>>,
}

impl<const D: usize> PointWelder<D> {
    /// Creates an empty welder merging points closer than `tolerance` on every axis.
    ///
    /// The tolerance is clamped to at least `Real::EPSILON`.
    pub fn new(tolerance: Real) -> Self {
        Self {
            tolerance: tolerance.max(Real::EPSILON),
            points: Vec::new(),
            cells: HashMap::default(),
        }
    }

    /// The tolerance used to compare points.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// The number of distinct points inserted so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this welder empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The distinct points, in first-seen order.
    pub fn points(&self) -> &[na::Point<Real, D>] {
        &self.points
    }

    /// Consumes the welder, returning the distinct points in first-seen order.
    pub fn into_points(self) -> Vec<na::Point<Real, D>> {
        self.points
    }

    /// Returns `true` if `a` and `b` are equal up to the tolerance on every axis.
    pub fn approx_eq(&self, a: &na::Point<Real, D>, b: &na::Point<Real, D>) -> bool {
        a.abs_diff_eq(b, self.tolerance)
    }

    /// The id of the stored point matching `pt`, if any.
    pub fn find(&self, pt: &na::Point<Real, D>) -> Option<u32> {
        let key = self.cell_key(pt);
        let mut best: Option<u32> = None;

        for cell in neighbor_cells(key) {
            if let Some(ids) = self.cells.get(&cell) {
                for &id in ids {
                    if best.map_or(true, |b| id < b)
                        && self.approx_eq(&self.points[id as usize], pt)
                    {
                        best = Some(id);
                    }
                }
            }
        }

        best
    }

    /// Inserts `pt`, returning the id of the point it was merged with, or a new id.
    pub fn insert(&mut self, pt: na::Point<Real, D>) -> u32 {
        if let Some(id) = self.find(&pt) {
            return id;
        }

        let id = self.points.len() as u32;
        let key = self.cell_key(&pt);
        self.cells.entry(key).or_default().push(id);
        self.points.push(pt);
        id
    }

    fn cell_key(&self, pt: &na::Point<Real, D>) -> [i64; D] {
        core::array::from_fn(|i| (pt[i] / self.tolerance).floor() as i64)
    }
}

/// The 3^D cells made of `key` and all its direct neighbors.
fn neighbor_cells<const D: usize>(key: [i64; D]) -> impl Iterator<Item = [i64; D]> {
    (0..3usize.pow(D as u32)).map(move |mut code| {
        let mut cell = key;
        for c in cell.iter_mut() {
            *c += (code % 3) as i64 - 1;
            code /= 3;
        }
        cell
    })
}
