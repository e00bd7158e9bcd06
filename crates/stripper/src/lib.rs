//! Greedy triangle strip construction for 2-D triangle meshes.
//!
//! ```text
//!   mesh --build_adjacency--> AdjacencyGraph --strip_mesh--> StrippedMesh
//! ```

mod adjacency;
mod config;
mod error;
mod state;
mod strip_writer;
mod stripper;

pub use adjacency::*;
pub use config::*;
pub use error::*;
pub use state::*;
pub use strip_writer::*;
pub use stripper::*;
