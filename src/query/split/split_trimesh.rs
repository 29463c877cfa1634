use crate::math::{Point, Real, DEFAULT_WELD_TOLERANCE};
use crate::query::{MeshCutError, SplitResult};
use crate::shape::{Plane, TriMesh};
use crate::transformation::PlanarCap;
use crate::utils::hashmap::HashMap;
use crate::utils::{PointWelder, SortedPair};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tolerances used to cut a triangle mesh by a plane.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use planecut3d::query::MeshCutTolerances;
/// // Use default tolerances (recommended for most cases)
/// let default_tol = MeshCutTolerances::default();
///
/// // Or use coarser ones for large meshes.
/// let custom_tol = MeshCutTolerances {
///     weld_tolerance: 1.0e-3,
///     cap_tolerance: 1.0e-3,
/// };
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MeshCutTolerances {
    /// Output vertices closer than this on every axis are merged into a single vertex.
    pub weld_tolerance: Real,
    /// Cut edge endpoints closer than this on both axes of the plane are
    /// considered the same point while rebuilding the cross-section.
    pub cap_tolerance: Real,
}

impl Default for MeshCutTolerances {
    fn default() -> Self {
        Self {
            weld_tolerance: DEFAULT_WELD_TOLERANCE,
            cap_tolerance: DEFAULT_WELD_TOLERANCE,
        }
    }
}

/// How the hole left by a cut was closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapStatus {
    /// The plane did not cross any triangle, so there is no hole to close.
    NotNeeded,
    /// The cross-section was triangulated and added to the mesh.
    Filled {
        /// The number of triangles generated for the cap.
        num_triangles: usize,
    },
    /// The cross-section is a valid ring that could not be triangulated.
    ///
    /// The mesh is returned without its cap so it is not closed.
    Unfilled,
}

/// The result of [`TriMesh::cut_by_plane_with_tolerances`].
#[derive(Clone, Debug, PartialEq)]
pub struct MeshCut {
    /// The part of the mesh on the kept side of the plane, including its cap.
    pub mesh: TriMesh,
    /// Whether the hole was capped.
    pub cap: CapStatus,
}

impl TriMesh {
    /// Cuts this mesh by a plane, keeping the part on the kept side of the plane.
    ///
    /// Triangles on the kept side are preserved, triangles on the removed side
    /// are dropped, and triangles crossing the plane are split with
    /// [`Triangle::split_by_plane`](crate::shape::Triangle::split_by_plane).
    /// The hole left in a closed mesh is filled with a cap lying on the plane,
    /// so the result is closed too. Vertices of the result closer than
    /// [`DEFAULT_WELD_TOLERANCE`] are merged.
    ///
    /// If the cap can't be triangulated, the mesh is returned without it. Use
    /// [`TriMesh::cut_by_plane_with_tolerances`] to detect this case.
    pub fn cut_by_plane(&self, plane: &Plane) -> Result<TriMesh, MeshCutError> {
        self.cut_by_plane_with_tolerances(plane, MeshCutTolerances::default())
            .map(|cut| cut.mesh)
    }

    /// Cuts this mesh by a plane with custom tolerances.
    ///
    /// See [`TriMesh::cut_by_plane`] for details.
    pub fn cut_by_plane_with_tolerances(
        &self,
        plane: &Plane,
        tolerances: MeshCutTolerances,
    ) -> Result<MeshCut, MeshCutError> {
        let splits = self.split_triangles(plane);

        if splits.iter().all(|s| matches!(s, SplitResult::Unchanged(_))) {
            return Ok(MeshCut {
                mesh: self.clone(),
                cap: CapStatus::NotNeeded,
            });
        }

        let mut soup: Vec<[Point; 3]> = Vec::with_capacity(splits.len() * 2);
        let mut cut_edges = Vec::new();

        for split in &splits {
            soup.extend_from_slice(split.triangles());

            if let Ok(edge) = split.cut_edge() {
                cut_edges.push(edge);
            }
        }

        let mut cap = PlanarCap::with_tolerance(plane, tolerances.cap_tolerance);
        for [a, b] in cancel_shared_cut_edges(&cut_edges, tolerances.cap_tolerance) {
            cap.add_edge(&a, &b);
        }

        // No edge is left when the plane only touches vertices or edges.
        let cap_status = if cap.is_empty() {
            CapStatus::NotNeeded
        } else if let Some(cap_triangles) = cap.triangles()? {
            let num_triangles = cap_triangles.len();
            soup.extend(cap_triangles);
            CapStatus::Filled { num_triangles }
        } else {
            log::warn!("the cross-section of the mesh cut could not be triangulated, the result is left open");
            CapStatus::Unfilled
        };

        Ok(MeshCut {
            mesh: weld_triangle_soup(&soup, tolerances.weld_tolerance)?,
            cap: cap_status,
        })
    }

    fn split_triangles(&self, plane: &Plane) -> Vec<SplitResult> {
        #[cfg(feature = "parallel")]
        let splits = (0..self.num_triangles() as u32)
            .into_par_iter()
            .map(|i| self.triangle(i).split_by_plane(plane))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let splits = self
            .triangles()
            .map(|tri| tri.split_by_plane(plane))
            .collect();

        splits
    }
}

/// Cuts the triangle mesh given by raw buffers by a plane.
///
/// Every three consecutive indices of `flat_indices` form one triangle. See
/// [`TriMesh::cut_by_plane`] for details on the cut itself.
pub fn cut_mesh_buffers(
    vertices: &[Point],
    flat_indices: &[u32],
    plane: &Plane,
) -> Result<TriMesh, MeshCutError> {
    let mesh = TriMesh::from_flat_indices(vertices.to_vec(), flat_indices)?;
    mesh.cut_by_plane(plane)
}

/// Removes the cut edges that are zero-length or that lie on the same segment
/// as another cut edge.
///
/// Two clipped triangles emit the same cut edge when a mesh edge lies on the
/// plane while both triangles sharing it are on the removed side, or when two
/// faces of the mesh overlap. Either way the two kept parts meet along the
/// edge or collapse entirely, so there is no hole to close. A mesh edge on the
/// plane with only one of its triangles removed yields a single cut edge,
/// which is kept.
fn cancel_shared_cut_edges(cut_edges: &[[Point; 2]], tolerance: Real) -> Vec<[Point; 2]> {
    let mut welder = PointWelder::<3>::new(tolerance);
    let mut pending: HashMap<SortedPair<u32>, usize> = HashMap::default();
    let mut edges: Vec<Option<[Point; 2]>> = Vec::with_capacity(cut_edges.len());
    let mut num_cancelled = 0;

    for edge in cut_edges {
        let key = SortedPair::new(welder.insert(edge[0]), welder.insert(edge[1]));

        if key[0] == key[1] {
            continue;
        }

        if let Some(twin) = pending.remove(&key) {
            edges[twin] = None;
            num_cancelled += 1;
        } else {
            let _ = pending.insert(key, edges.len());
            edges.push(Some(*edge));
        }
    }

    if num_cancelled > 0 {
        log::debug!(
            "ignoring {} pairs of coincident cut edges",
            num_cancelled
        );
    }

    edges.into_iter().flatten().collect()
}

/// Builds an indexed mesh from triangles given by their points.
///
/// Points are merged in first-seen order. Triangles left with less than
/// three distinct vertices after merging are dropped.
fn weld_triangle_soup(soup: &[[Point; 3]], tolerance: Real) -> Result<TriMesh, MeshCutError> {
    let mut welder = PointWelder::<3>::new(tolerance);
    let mut indices = Vec::with_capacity(soup.len());
    let mut num_collapsed = 0;

    for tri in soup {
        let idx = tri.map(|pt| welder.insert(pt));

        if idx[0] == idx[1] || idx[1] == idx[2] || idx[2] == idx[0] {
            num_collapsed += 1;
        } else {
            indices.push(idx);
        }
    }

    let mut vertices = welder.into_points();

    if num_collapsed > 0 {
        log::debug!(
            "dropped {} triangles collapsed by vertex welding",
            num_collapsed
        );
        remove_unused_vertices(&mut vertices, &mut indices);
    }

    Ok(TriMesh::new(vertices, indices)?)
}

/// Removes the vertices not referenced by any triangle, keeping the order of the others.
fn remove_unused_vertices(vertices: &mut Vec<Point>, indices: &mut [[u32; 3]]) {
    let mut remap = vec![u32::MAX; vertices.len()];

    for idx in indices.iter() {
        for &i in idx {
            remap[i as usize] = 0;
        }
    }

    let mut num_used = 0;
    for (i, new_id) in remap.iter_mut().enumerate() {
        if *new_id != u32::MAX {
            *new_id = num_used as u32;
            vertices[num_used] = vertices[i];
            num_used += 1;
        }
    }
    vertices.truncate(num_used);

    for idx in indices.iter_mut() {
        *idx = idx.map(|i| remap[i as usize]);
    }
}
