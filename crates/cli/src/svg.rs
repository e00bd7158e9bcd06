use std::{fs::File, io::BufWriter, io::Write, path::Path};

use anyhow::Context;
use tristrip::{StrippedMesh, TriangleId};
use tristrip_mesh::{Bounds, DefaultMesh, Point2, TriangleMesh};

use crate::args;
use crate::strip::load_and_strip;

const SIZE: f64 = 1000.0;
// Blank border around the mesh, as a fraction of its larger extent.
const MARGIN: f64 = 0.1;

const FORWARD_COLOR: &str = "#00f";
const BACKWARD_COLOR: &str = "#f00";

pub fn svg_command(args: args::SvgArgs) -> anyhow::Result<()> {
    let stripped = load_and_strip(&args.tri_path, args.seed_order)?;
    generate_svg(&args.output, &stripped.mesh, &stripped.strips, !args.backward)
        .with_context(|| format!("failed to write {}", args.output))
}

/// Maps mesh coordinates onto a `SIZE` x `SIZE` canvas with y pointing up.
struct Viewport {
    origin: Point2,
    scale: f64,
}

impl Viewport {
    fn new(bounds: Option<Bounds>) -> Self {
        let Some(bounds) = bounds else {
            return Viewport {
                origin: Point2::new(0.0, 0.0),
                scale: 1.0,
            };
        };
        let span = if bounds.span() > 0.0 { bounds.span() } else { 1.0 };
        Viewport {
            origin: Point2::new(bounds.min.x - MARGIN * span, bounds.min.y - MARGIN * span),
            scale: SIZE / ((1.0 + 2.0 * MARGIN) * span),
        }
    }

    fn map(&self, p: Point2) -> (f64, f64) {
        (
            (p.x - self.origin.x) * self.scale,
            SIZE - (p.y - self.origin.y) * self.scale,
        )
    }
}

fn centroid(mesh: &DefaultMesh, id: TriangleId) -> Option<Point2> {
    mesh.facets().get(id.index())?.centroid(mesh.points())
}

/// Draws every triangle outline plus one arrow per strip link.
///
/// With `forward` set the arrows follow `next` links, otherwise `prev` links.
/// Triangles without any link get a dot.
pub fn generate_svg<P: AsRef<Path>>(
    p: P,
    mesh: &DefaultMesh,
    stripped: &StrippedMesh,
    forward: bool,
) -> std::io::Result<()> {
    let mut f = BufWriter::new(File::create(p)?);
    let view = Viewport::new(Bounds::from_points(mesh.points()));
    let color = if forward { FORWARD_COLOR } else { BACKWARD_COLOR };

    writeln!(
        f,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\">",
        SIZE
    )?;
    writeln!(f, "  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>")?;
    writeln!(f, "  <defs>")?;
    writeln!(f, "    <marker id=\"arrowhead\" markerWidth=\"6\" markerHeight=\"6\" refX=\"5\" refY=\"3\" orient=\"auto\">")?;
    writeln!(
        f,
        "      <polygon points=\"0 0, 6 3, 0 6\" fill=\"{}\" />",
        color
    )?;
    writeln!(f, "    </marker>")?;
    writeln!(f, "  </defs>")?;

    writeln!(f, "  <g id=\"triangles\">")?;
    for facet in mesh.facets() {
        let Some(corners) = facet.corners(mesh.points()) else {
            continue;
        };
        let points = corners
            .iter()
            .map(|&c| {
                let (x, y) = view.map(c);
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            f,
            "    <polygon class=\"triangle\" points=\"{}\" fill=\"none\" stroke=\"#000\" stroke-width=\"1\"/>",
            points
        )?;
    }
    writeln!(f, "  </g>")?;

    let links = stripped.links();
    writeln!(f, "  <g id=\"links\">")?;
    for i in 0..mesh.triangle_count() {
        let id = TriangleId(i);
        let Some(from) = centroid(mesh, id) else {
            continue;
        };
        let (x1, y1) = view.map(from);
        let target = if forward { links.next(id) } else { links.prev(id) };
        if let Some(to) = target.and_then(|t| centroid(mesh, t)) {
            let (x2, y2) = view.map(to);
            writeln!(f, "    <line class=\"link\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1.5\" marker-end=\"url(#arrowhead)\"/>", x1, y1, x2, y2, color)?;
        } else if links.is_free(id) {
            writeln!(
                f,
                "    <circle class=\"free\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"3\" fill=\"{}\"/>",
                x1, y1, color
            )?;
        }
    }
    writeln!(f, "  </g>")?;
    writeln!(f, "</svg>")?;
    f.flush()
}
