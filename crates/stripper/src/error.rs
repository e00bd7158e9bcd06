use crate::TriangleId;

/// Broken invariants detected while building adjacency or strips.
///
/// None of these occur for adjacency produced by [`crate::build_adjacency`];
/// they indicate malformed precomputed input or misuse of [`crate::StripState`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StripError {
    #[error("adjacency given for {lists} triangles, but the mesh has {triangles}")]
    AdjacencyLength { triangles: usize, lists: usize },

    #[error("{triangle} has {count} adjacent triangles, at most 3 are allowed")]
    TooManyAdjacent { triangle: TriangleId, count: usize },

    #[error("{triangle} lists {neighbor} as adjacent more than once")]
    DuplicateAdjacent {
        triangle: TriangleId,
        neighbor: TriangleId,
    },

    #[error("{triangle} lists itself as adjacent")]
    SelfAdjacent { triangle: TriangleId },

    #[error("{triangle} lists unknown triangle {neighbor} as adjacent")]
    UnknownAdjacent {
        triangle: TriangleId,
        neighbor: TriangleId,
    },

    #[error("{triangle} is not a triangle of this mesh")]
    UnknownTriangle { triangle: TriangleId },

    #[error("cannot link {from} -> {to}: a strip link is already set")]
    AlreadyLinked { from: TriangleId, to: TriangleId },

    #[error("cannot link {from} -> {to}: the strip would close on itself")]
    WouldCycle { from: TriangleId, to: TriangleId },
}
