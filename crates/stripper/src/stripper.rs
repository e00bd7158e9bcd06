use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{AdjacencyGraph, SeedOrder, StripError, StripState, StripperConfig, TriangleId};

/// The outcome of stripping a mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedMesh {
    strips: Vec<Vec<TriangleId>>,
    links: StripState,
}

impl StrippedMesh {
    /// Strips in the order they were built, each from seed to tail.
    pub fn strips(&self) -> &[Vec<TriangleId>] {
        &self.strips
    }

    /// The `next`/`prev` linkage encoding the same strips.
    pub fn links(&self) -> &StripState {
        &self.links
    }

    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    pub fn stats(&self) -> StripStats {
        self.strips.iter().fold(StripStats::default(), |mut s, strip| {
            s.strips += 1;
            s.triangles += strip.len();
            s.longest = s.longest.max(strip.len());
            if strip.len() == 1 {
                s.singletons += 1;
            }
            s
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripStats {
    pub strips: usize,
    pub triangles: usize,
    pub longest: usize,
    /// Strips made of a single triangle.
    pub singletons: usize,
}

impl StripStats {
    pub fn mean_length(&self) -> f64 {
        if self.strips == 0 {
            0.0
        } else {
            self.triangles as f64 / self.strips as f64
        }
    }
}

/// Number of neighbours of `id` that are still free.
///
/// This changes as strips are built and is recomputed on every call.
pub fn free_degree(graph: &AdjacencyGraph, state: &StripState, id: TriangleId) -> usize {
    graph
        .adjacent(id)
        .iter()
        .filter(|&&n| state.is_free(n))
        .count()
}

/// Triangles that already belong to a strip.
///
/// A seed that could not grow keeps empty links, so free linkage alone does
/// not mean the triangle is still available.
struct Placed(Vec<bool>);

impl Placed {
    fn new(len: usize) -> Self {
        Placed(vec![false; len])
    }

    fn contains(&self, id: TriangleId) -> bool {
        self.0[id.index()]
    }

    fn insert_all(&mut self, strip: &[TriangleId]) {
        for id in strip {
            self.0[id.index()] = true;
        }
    }
}

/// The free neighbour of `tip` with the smallest free-degree. The first one in
/// adjacency order wins a tie.
fn least_free_adjacent(
    graph: &AdjacencyGraph,
    state: &StripState,
    placed: &Placed,
    tip: TriangleId,
) -> Option<TriangleId> {
    let mut best: Option<(usize, TriangleId)> = None;
    for &n in graph.adjacent(tip) {
        if !state.is_free(n) || placed.contains(n) {
            continue;
        }
        let degree = free_degree(graph, state, n);
        if best.map_or(true, |(d, _)| degree < d) {
            best = Some((degree, n));
        }
    }
    best.map(|(_, n)| n)
}

/// Extends a strip forward from `seed` until the tip has no free neighbour.
fn grow_strip(
    graph: &AdjacencyGraph,
    state: &mut StripState,
    placed: &mut Placed,
    seed: TriangleId,
) -> Result<Vec<TriangleId>, StripError> {
    let mut strip = vec![seed];
    placed.insert_all(&strip);
    let mut tip = seed;
    while let Some(next) = least_free_adjacent(graph, state, placed, tip) {
        state.link(tip, next)?;
        placed.insert_all(&[next]);
        strip.push(next);
        tip = next;
    }
    log::debug!("strip seeded at {}: {} triangles", seed, strip.len());
    Ok(strip)
}

fn strip_by_resort(
    graph: &AdjacencyGraph,
    state: &mut StripState,
) -> Result<Vec<Vec<TriangleId>>, StripError> {
    let mut placed = Placed::new(graph.len());
    let mut remaining: Vec<TriangleId> = graph.ids().collect();
    let mut strips = Vec::new();
    while let Some(&seed) = remaining.first() {
        let strip = grow_strip(graph, state, &mut placed, seed)?;
        remaining.retain(|&id| !placed.contains(id));
        // Most constrained first. The sort is stable, so ties keep their
        // previous relative order and the result is deterministic.
        remaining.sort_by_cached_key(|&id| free_degree(graph, state, id));
        strips.push(strip);
    }
    Ok(strips)
}

fn strip_by_priority_queue(
    graph: &AdjacencyGraph,
    state: &mut StripState,
) -> Result<Vec<Vec<TriangleId>>, StripError> {
    let mut placed = Placed::new(graph.len());
    let mut queue: BinaryHeap<Reverse<(usize, TriangleId)>> = graph
        .ids()
        .map(|id| Reverse((free_degree(graph, state, id), id)))
        .collect();
    let mut strips = Vec::new();
    while let Some(Reverse((degree, seed))) = queue.pop() {
        if placed.contains(seed) {
            continue;
        }
        // Entries go stale when a neighbour is consumed. Listed neighbours of a
        // new strip get a fresh entry right away; anything else is requeued
        // with its current degree when it surfaces.
        let current = free_degree(graph, state, seed);
        if degree != current {
            queue.push(Reverse((current, seed)));
            continue;
        }
        let strip = grow_strip(graph, state, &mut placed, seed)?;
        for &id in &strip {
            for &n in graph.adjacent(id) {
                if !placed.contains(n) {
                    queue.push(Reverse((free_degree(graph, state, n), n)));
                }
            }
        }
        strips.push(strip);
    }
    Ok(strips)
}

/// Partitions the triangles of `graph` into strips.
///
/// Each strip starts at a seed and greedily grows forward into the free
/// neighbour with the fewest free neighbours of its own. When the tip has no
/// free neighbour left, the next seed is the remaining triangle with the
/// lowest free-degree, as selected by `config.seed_order`. The very first
/// seed under [`SeedOrder::Resort`] is triangle 0.
///
/// Every triangle ends up in exactly one strip. There is no backtracking, so
/// the number of strips is not guaranteed to be minimal.
pub fn strip_mesh(
    graph: &AdjacencyGraph,
    config: &StripperConfig,
) -> Result<StrippedMesh, StripError> {
    let mut links = StripState::new(graph.len());
    let strips = match config.seed_order {
        SeedOrder::Resort => strip_by_resort(graph, &mut links)?,
        SeedOrder::PriorityQueue => strip_by_priority_queue(graph, &mut links)?,
    };
    log::info!("Generated {} tristrips", strips.len());
    Ok(StrippedMesh { strips, links })
}

/// [`strip_mesh`] with the default configuration.
pub fn build_strips(graph: &AdjacencyGraph) -> Result<StrippedMesh, StripError> {
    strip_mesh(graph, &StripperConfig::default())
}
