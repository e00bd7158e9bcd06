use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;
use tristrip_mesh::{Facet, TriangleMesh};

use crate::StripError;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Identity of a triangle: its position in the flat [`AdjacencyGraph`] array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleId(pub usize);

impl TriangleId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TriangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tri-{}", self.0)
    }
}

/// Up to one neighbour per edge.
pub type Adjacent = SmallVec<[TriangleId; 3]>;

/// A facet together with the triangles it shares an edge with.
///
/// The adjacency list is attached once when the graph is built and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    id: TriangleId,
    facet: Facet,
    adjacent: Adjacent,
}

impl Triangle {
    pub fn id(&self) -> TriangleId {
        self.id
    }

    pub fn facet(&self) -> &Facet {
        &self.facet
    }

    pub fn adjacent(&self) -> &[TriangleId] {
        &self.adjacent
    }
}

/// Flat, pre-sized array of triangles indexed by [`TriangleId`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    triangles: Vec<Triangle>,
}

// Shared read-only between rayon workers.
static_assertions::assert_impl_all!(AdjacencyGraph: Send, Sync);

impl AdjacencyGraph {
    /// Builds a graph from adjacency computed elsewhere.
    ///
    /// Each list must hold at most three distinct, known triangles other than
    /// its owner.
    pub fn from_adjacency(
        facets: &[Facet],
        adjacency: Vec<Vec<TriangleId>>,
    ) -> Result<Self, StripError> {
        if facets.len() != adjacency.len() {
            return Err(StripError::AdjacencyLength {
                triangles: facets.len(),
                lists: adjacency.len(),
            });
        }
        let n = facets.len();
        let triangles = facets
            .iter()
            .zip(adjacency)
            .enumerate()
            .map(|(i, (facet, list))| {
                let triangle = TriangleId(i);
                if list.len() > 3 {
                    return Err(StripError::TooManyAdjacent {
                        triangle,
                        count: list.len(),
                    });
                }
                for (k, &neighbor) in list.iter().enumerate() {
                    if neighbor == triangle {
                        return Err(StripError::SelfAdjacent { triangle });
                    }
                    if neighbor.index() >= n {
                        return Err(StripError::UnknownAdjacent { triangle, neighbor });
                    }
                    if list[..k].contains(&neighbor) {
                        return Err(StripError::DuplicateAdjacent { triangle, neighbor });
                    }
                }
                Ok(Triangle {
                    id: triangle,
                    facet: *facet,
                    adjacent: Adjacent::from_vec(list),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AdjacencyGraph { triangles })
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn get(&self, id: TriangleId) -> Option<&Triangle> {
        self.triangles.get(id.index())
    }

    /// The neighbours of `id`, or an empty slice for an unknown id.
    pub fn adjacent(&self, id: TriangleId) -> &[TriangleId] {
        match self.get(id) {
            Some(t) => t.adjacent(),
            None => &[],
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangles.len()).map(TriangleId)
    }

    /// True if both triangles list each other and have exactly two corners in common.
    pub fn shares_edge(&self, a: TriangleId, b: TriangleId) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(ta), Some(tb)) => {
                ta.adjacent.contains(&b)
                    && tb.adjacent.contains(&a)
                    && ta.facet.shared_vertices(&tb.facet) == 2
            }
            _ => false,
        }
    }
}

fn edge_in_range(edge: (u32, u32), n_points: usize) -> bool {
    (edge.0 as usize) < n_points && (edge.1 as usize) < n_points
}

/// Pushes `neighbor` unless it is the owner itself or already listed.
fn push_adjacent(adjacent: &mut Adjacent, owner: TriangleId, neighbor: TriangleId) {
    if neighbor != owner && !adjacent.contains(&neighbor) {
        adjacent.push(neighbor);
    }
}

/// Finds, for every facet, the facets across each of its edges.
///
/// Facet B is adjacent to facet A across A's directed edge (u, v) when B owns
/// the reversed edge (v, u). All directed edges are hashed first and each
/// reversed edge is then looked up once, so the build is linear in the number
/// of facets.
///
/// If more than one facet owns the same directed edge (a non-manifold mesh)
/// the last one in facet order is recorded. Edges touching a vertex outside
/// the pool are treated as boundary edges.
pub fn build_adjacency<M: TriangleMesh>(mesh: &M) -> AdjacencyGraph {
    let n_points = mesh.points().len();
    let facets = mesh.facets();

    let mut edges: HashMap<(u32, u32), TriangleId> = HashMap::with_capacity(facets.len() * 3);
    for (i, facet) in facets.iter().enumerate() {
        for edge in facet.edges() {
            if edge_in_range(edge, n_points) {
                edges.insert(edge, TriangleId(i));
            } else {
                log::warn!(
                    "{} edge {:?} references a vertex outside the pool of {} points",
                    TriangleId(i),
                    edge,
                    n_points
                );
            }
        }
    }

    let resolve = |(i, facet): (usize, &Facet)| {
        let owner = TriangleId(i);
        let mut adjacent = Adjacent::new();
        for (v0, v1) in facet.edges() {
            if !edge_in_range((v0, v1), n_points) {
                continue;
            }
            if let Some(&neighbor) = edges.get(&(v1, v0)) {
                push_adjacent(&mut adjacent, owner, neighbor);
            }
            if adjacent.len() == 3 {
                break;
            }
        }
        adjacent
    };

    #[cfg(feature = "rayon")]
    let lists: Vec<Adjacent> = facets.par_iter().enumerate().map(resolve).collect();
    #[cfg(not(feature = "rayon"))]
    let lists: Vec<Adjacent> = facets.iter().enumerate().map(resolve).collect();

    AdjacencyGraph {
        triangles: facets
            .iter()
            .zip(lists)
            .enumerate()
            .map(|(i, (facet, adjacent))| Triangle {
                id: TriangleId(i),
                facet: *facet,
                adjacent,
            })
            .collect(),
    }
}

/// Quadratic reference for [`build_adjacency`]: compares every directed edge
/// against every other facet's edges.
pub fn build_adjacency_brute_force<M: TriangleMesh>(mesh: &M) -> AdjacencyGraph {
    let n_points = mesh.points().len();
    let facets = mesh.facets();
    let triangles = facets
        .iter()
        .enumerate()
        .map(|(i, facet)| {
            let owner = TriangleId(i);
            let mut adjacent = Adjacent::new();
            'edges: for (v0, v1) in facet.edges() {
                if !edge_in_range((v0, v1), n_points) {
                    continue;
                }
                for (j, other) in facets.iter().enumerate() {
                    if other.edges().contains(&(v1, v0)) {
                        push_adjacent(&mut adjacent, owner, TriangleId(j));
                    }
                    if adjacent.len() == 3 {
                        break 'edges;
                    }
                }
            }
            Triangle {
                id: owner,
                facet: *facet,
                adjacent,
            }
        })
        .collect();
    AdjacencyGraph { triangles }
}
