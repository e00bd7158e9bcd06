use tristrip::{build_adjacency, AdjacencyGraph, TriangleId};
use tristrip_mesh::{DefaultMesh, Point2};

use crate::args;

/// Formats a triangle and its neighbours, e.g. `tri-3 with adjacent [tri-1, tri-4]`.
pub fn describe_triangle(graph: &AdjacencyGraph, id: TriangleId) -> String {
    let adjacent = graph
        .adjacent(id)
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} with adjacent [{}]", id, adjacent)
}

pub fn pick_command(args: args::PickArgs) -> anyhow::Result<()> {
    let mesh = tristrip_trifile::read_tri::<DefaultMesh, _>(&args.tri_path)?;
    let graph = build_adjacency(&mesh);
    match mesh.triangle_at(Point2::new(args.x, args.y)) {
        Some(i) => println!("{}", describe_triangle(&graph, TriangleId(i))),
        None => println!("no triangle at ({}, {})", args.x, args.y),
    }
    Ok(())
}
