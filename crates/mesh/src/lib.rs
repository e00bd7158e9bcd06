mod geometry;
mod vertex_index;

pub use geometry::*;
pub use vertex_index::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = VertexIndex;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    #[error("facet {facet} references vertex {vertex}, but the vertex pool has {len} points")]
    InvalidIndex { facet: usize, vertex: u32, len: usize },
}

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a vertex pool and the facets indexing into it.
    ///
    /// # Arguments
    ///
    /// * `points` - The shared vertex pool.
    /// * `facets` - Triangles as triples of indices into `points`.
    fn from_parts(points: Vec<Point2>, facets: Vec<Facet>) -> Self;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;

    fn points(&self) -> &[Point2];

    fn facets(&self) -> &[Facet];
}
