use std::{fs::File, io::BufWriter, io::Write};

use anyhow::Context;
use tristrip::{
    build_adjacency, strip_mesh, write_strips, AdjacencyGraph, StrippedMesh, StripperConfig,
};
use tristrip_mesh::DefaultMesh;

use crate::args::{self, SeedOrderArg};

/// Everything the subcommands need from a triangle file.
pub struct Stripped {
    pub mesh: DefaultMesh,
    pub graph: AdjacencyGraph,
    pub strips: StrippedMesh,
}

pub fn load_and_strip(path: &str, seed_order: SeedOrderArg) -> anyhow::Result<Stripped> {
    let mesh = tristrip_trifile::read_tri::<DefaultMesh, _>(path)?;
    let graph = build_adjacency(&mesh);
    let config = StripperConfig {
        seed_order: seed_order.into(),
    };
    let strips = strip_mesh(&graph, &config).context("failed to build strips")?;
    Ok(Stripped {
        mesh,
        graph,
        strips,
    })
}

/// One strip as `tri-0 -> tri-5 -> tri-4`.
pub fn describe_strip(strip: &[tristrip::TriangleId]) -> String {
    strip
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn strip_command(args: args::StripArgs) -> anyhow::Result<()> {
    let stripped = load_and_strip(&args.tri_path, args.seed_order)?;
    let stats = stripped.strips.stats();
    println!(
        "{} triangles in {} strips (longest {}, {} single, mean length {:.2})",
        stats.triangles,
        stats.strips,
        stats.longest,
        stats.singletons,
        stats.mean_length()
    );
    if args.list {
        for (i, strip) in stripped.strips.strips().iter().enumerate() {
            println!("strip {}: {}", i, describe_strip(strip));
        }
    }
    if let Some(output) = args.output {
        let mut f = BufWriter::new(
            File::create(&output).with_context(|| format!("failed to create {}", output))?,
        );
        write_strips(&mut f, stripped.strips.strips())
            .and_then(|_| f.flush())
            .with_context(|| format!("failed to write {}", output))?;
        log::info!("Wrote {} strips to {}", stats.strips, output);
    }
    Ok(())
}
