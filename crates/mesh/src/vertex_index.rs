use crate::geometry::{centroid, turn, Point2, Turn};
use crate::{MeshError, TriangleMesh};

/// The three corners of a triangle as indices into a shared vertex pool.
///
/// The corner order defines the winding. Neighbouring facets of a consistently
/// wound mesh walk their shared edge in opposite directions:
///
/// ```text
///    2 *-------* 3
///      |\      |
///      | \  B  |        A = (0, 1, 2) owns 1 -> 2
///      |  \    |        B = (2, 1, 3) owns 2 -> 1
///      | A \   |
///      |    \  |
///      |     \ |
///    0 *-------* 1
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// The directed edges (p0, p1), (p1, p2), (p2, p0).
    pub fn edges(&self) -> [(u32, u32); 3] {
        [(self.p0, self.p1), (self.p1, self.p2), (self.p2, self.p0)]
    }

    /// Number of corner indices the two facets have in common.
    pub fn shared_vertices(&self, other: &Facet) -> usize {
        let other = other.indices();
        self.indices()
            .iter()
            .filter(|i| other.contains(i))
            .count()
    }

    /// Resolves the corners against `points`, or `None` if any index is out of range.
    pub fn corners(&self, points: &[Point2]) -> Option<[Point2; 3]> {
        Some([
            *points.get(self.p0 as usize)?,
            *points.get(self.p1 as usize)?,
            *points.get(self.p2 as usize)?,
        ])
    }

    /// A facet is degenerate when its corners are collinear.
    pub fn is_degenerate(&self, points: &[Point2]) -> bool {
        match self.corners(points) {
            Some([a, b, c]) => turn(a, b, c) == Turn::Collinear,
            None => false,
        }
    }

    pub fn centroid(&self, points: &[Point2]) -> Option<Point2> {
        self.corners(points).map(|c| centroid(&c))
    }

    /// True if `p` lies strictly inside a counter-clockwise facet.
    pub fn contains_point(&self, points: &[Point2], p: Point2) -> bool {
        let Some([a, b, c]) = self.corners(points) else {
            return false;
        };
        turn(a, b, p) == Turn::Left && turn(b, c, p) == Turn::Left && turn(c, a, p) == Turn::Left
    }
}

/// A vertex pool and the facets indexing into it.
///
/// Each facet stores 12 bytes of indices instead of three full points; vertices
/// shared between neighbouring facets are stored once.
#[derive(Debug, Default, Clone)]
pub struct VertexIndex {
    points: Vec<Point2>,
    facets: Vec<Facet>,
}

impl VertexIndex {
    /// Checks that every facet only references vertices in the pool.
    pub fn validate(&self) -> Result<(), MeshError> {
        let len = self.points.len();
        for (facet, f) in self.facets.iter().enumerate() {
            if let Some(&vertex) = f.indices().iter().find(|&&i| i as usize >= len) {
                return Err(MeshError::InvalidIndex { facet, vertex, len });
            }
        }
        Ok(())
    }

    /// Returns the index of the first facet containing `p`.
    pub fn triangle_at(&self, p: Point2) -> Option<usize> {
        self.facets
            .iter()
            .position(|f| f.contains_point(&self.points, p))
    }
}

impl TriangleMesh for VertexIndex {
    fn from_parts(points: Vec<Point2>, facets: Vec<Facet>) -> Self {
        VertexIndex { points, facets }
    }

    fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    fn points(&self) -> &[Point2] {
        &self.points
    }

    fn facets(&self) -> &[Facet] {
        &self.facets
    }
}
