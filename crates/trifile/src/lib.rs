use anyhow::{anyhow, bail, Context};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tristrip_mesh::{Facet, Point2, TriangleMesh};

/// A problem found on a single line of a triangle file.
struct Problem {
    line: usize,
    message: String,
}

fn parse_count(line: Option<(usize, &str)>, what: &str) -> anyhow::Result<usize> {
    let (n, text) = line.ok_or_else(|| anyhow!("missing {} count", what))?;
    text.trim()
        .parse()
        .with_context(|| format!("line {}: invalid {} count '{}'", n, what, text.trim()))
}

fn parse_fields<T: FromStr>(text: &str, expected: usize) -> Result<Vec<T>, String> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(format!("expected {} values, found {}", expected, fields.len()));
    }
    fields
        .iter()
        .map(|f| f.parse().map_err(|_| format!("cannot parse '{}'", f)))
        .collect()
}

fn parse_facet(text: &str, n_points: usize) -> Result<Facet, String> {
    let indices = parse_fields::<i64>(text, 3)
        .map_err(|e| format!("triangle does not have three vertices ({})", e))?;
    let vertex = |i: i64| {
        u32::try_from(i)
            .ok()
            .filter(|&v| (v as usize) < n_points)
            .ok_or_else(|| {
                format!(
                    "vertex index {} is not in range [0,{}]",
                    i,
                    n_points as i64 - 1
                )
            })
    };
    Ok(Facet::new(
        vertex(indices[0])?,
        vertex(indices[1])?,
        vertex(indices[2])?,
    ))
}

fn read_text<M: TriangleMesh>(text: &str) -> anyhow::Result<M> {
    // The format is line oriented:
    //
    //   <vertex count>
    //   x y          (vertex count lines)
    //   <triangle count>
    //   a b c        (every remaining line)
    //
    // Line numbers reported below are 1-based.
    let mut lines: Vec<(usize, &str)> = text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();
    while lines.last().map_or(false, |(_, l)| l.trim().is_empty()) {
        lines.pop();
    }
    let mut lines = lines.into_iter();

    let n_points = parse_count(lines.next(), "vertex")?;
    let mut problems = Vec::new();
    // Header counts are not trusted for allocation sizes.
    let mut points = Vec::new();
    for _ in 0..n_points {
        let (line, text) = lines
            .next()
            .ok_or_else(|| anyhow!("expected {} vertex lines, file ended early", n_points))?;
        match parse_fields::<f64>(text, 2) {
            Ok(xy) => points.push(Point2::new(xy[0], xy[1])),
            Err(e) => problems.push(Problem {
                line,
                message: format!("vertex does not have two coordinates ({})", e),
            }),
        }
    }

    let n_declared = parse_count(lines.next(), "triangle")?;
    let mut facets = Vec::new();
    let mut facet_lines = Vec::new();
    for (line, text) in lines {
        match parse_facet(text, n_points) {
            Ok(facet) => {
                facets.push(facet);
                facet_lines.push(line);
            }
            Err(message) => problems.push(Problem { line, message }),
        }
    }

    if !problems.is_empty() {
        for p in &problems {
            log::error!("line {}: {}", p.line, p.message);
        }
        bail!("{} problem(s) found in triangle file", problems.len());
    }
    if facets.len() != n_declared {
        log::warn!(
            "triangle count says {} but {} triangles follow",
            n_declared,
            facets.len()
        );
    }
    log::info!("Read {} points and {} triangles", n_points, n_declared);

    // Collinear triangles carry no area and are never handed to the stripper.
    let facets: Vec<Facet> = facets
        .into_iter()
        .zip(facet_lines)
        .filter_map(|(f, line)| {
            if f.is_degenerate(&points) {
                log::warn!("line {}: dropping degenerate triangle {:?}", line, f.indices());
                None
            } else {
                Some(f)
            }
        })
        .collect();

    Ok(M::from_parts(points, facets))
}

pub fn read_tri<M: TriangleMesh, P: AsRef<Path>>(p: P) -> anyhow::Result<M> {
    let path = p.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    read_text(&text).with_context(|| format!("failed to load {}", path.display()))
}

pub fn parse_tri<M: TriangleMesh>(text: &str) -> anyhow::Result<M> {
    read_text(text)
}

pub trait TriReader: Read {
    fn read_tri<M: TriangleMesh>(&mut self) -> anyhow::Result<M>;
}

impl<T: Read> TriReader for T {
    fn read_tri<M: TriangleMesh>(&mut self) -> anyhow::Result<M> {
        let mut text = String::new();
        self.read_to_string(&mut text)?;
        read_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_indices_are_range_checked() {
        assert_eq!(Ok(Facet::new(0, 2, 1)), parse_facet("0 2 1", 3));
        assert_eq!(
            Err("vertex index -1 is not in range [0,2]".to_string()),
            parse_facet("0 -1 2", 3)
        );
        assert_eq!(
            Err("vertex index 3 is not in range [0,2]".to_string()),
            parse_facet("0 1 3", 3)
        );
        assert_eq!(
            Err("vertex index 100000000000000 is not in range [0,2]".to_string()),
            parse_facet("0 1 100000000000000", 3)
        );
    }

    #[test]
    fn facet_parse_failures() {
        assert_eq!(
            Err("triangle does not have three vertices (expected 3 values, found 2)".to_string()),
            parse_facet("0 1", 3)
        );
        assert_eq!(
            Err("triangle does not have three vertices (cannot parse 'x')".to_string()),
            parse_facet("0 1 x", 3)
        );
    }
}
