use tristrip::{
    build_adjacency, build_adjacency_brute_force, build_strips, read_strips, strip_mesh,
    write_strips, AdjacencyGraph, SeedOrder, StrippedMesh, StripperConfig, TriangleId,
};
use tristrip_mesh::{DefaultMesh, Facet, Point2, TriangleMesh};
use tristrip_test_data::{ALL_MODELS, TRI_BOWTIE, TRI_GRID, TRI_HEXAGON_FAN, TRI_PAIR, TRI_SINGLE};

const ORDERS: [SeedOrder; 2] = [SeedOrder::Resort, SeedOrder::PriorityQueue];

fn load(text: &str) -> AdjacencyGraph {
    let mesh = tristrip_trifile::parse_tri::<DefaultMesh>(text).unwrap();
    build_adjacency(&mesh)
}

fn ids(list: &[usize]) -> Vec<TriangleId> {
    list.iter().copied().map(TriangleId).collect()
}

/// An `n` x `n` grid of unit cells, each split along its anti-diagonal.
fn grid(n: u32) -> DefaultMesh {
    let mut points = Vec::new();
    for y in 0..=n {
        for x in 0..=n {
            points.push(Point2::new(x as f64, y as f64));
        }
    }
    let mut facets = Vec::new();
    for y in 0..n {
        for x in 0..n {
            let a = y * (n + 1) + x;
            let (b, c) = (a + 1, a + n + 1);
            facets.push(Facet::new(a, b, c));
            facets.push(Facet::new(c, b, c + 1));
        }
    }
    DefaultMesh::from_parts(points, facets)
}

/// Checks coverage, path shape and that consecutive triangles share an edge.
fn assert_valid(graph: &AdjacencyGraph, stripped: &StrippedMesh) {
    let links = stripped.links();
    let mut seen = vec![false; graph.len()];
    for strip in stripped.strips() {
        assert!(!strip.is_empty());
        for id in strip {
            assert!(!seen[id.index()], "{} appears twice", id);
            seen[id.index()] = true;
        }
        for pair in strip.windows(2) {
            assert!(graph.shares_edge(pair[0], pair[1]), "{:?}", pair);
            assert_eq!(Some(pair[1]), links.next(pair[0]));
            assert_eq!(Some(pair[0]), links.prev(pair[1]));
        }
        assert_eq!(None, links.prev(strip[0]));
        assert_eq!(None, links.next(strip[strip.len() - 1]));
    }
    assert!(seen.iter().all(|&s| s), "not every triangle is on a strip");

    // The linkage encodes exactly the materialized strips.
    let mut from_links: Vec<Vec<TriangleId>> = links.strips().map(|s| s.collect()).collect();
    let mut built = stripped.strips().to_vec();
    from_links.sort();
    built.sort();
    assert_eq!(built, from_links);

    let linked = links.strips().map(|s| s.count()).sum::<usize>();
    assert_eq!(graph.len(), linked);
}

#[test]
fn isolated_triangle() {
    let graph = load(TRI_SINGLE.text);
    let stripped = build_strips(&graph).unwrap();
    assert_eq!(&[ids(&[0])], stripped.strips());
    assert!(stripped.links().is_free(TriangleId(0)));
}

#[test]
fn pair_forms_one_strip() {
    let graph = load(TRI_PAIR.text);
    for order in ORDERS {
        let stripped = strip_mesh(&graph, &StripperConfig { seed_order: order }).unwrap();
        assert_eq!(1, stripped.strip_count());
        assert_eq!(2, stripped.strips()[0].len());
        assert_valid(&graph, &stripped);
    }
}

#[test]
fn hexagon_fan() {
    let graph = load(TRI_HEXAGON_FAN.text);
    for id in graph.ids() {
        assert_eq!(2, graph.adjacent(id).len());
    }
    for order in ORDERS {
        let stripped = strip_mesh(&graph, &StripperConfig { seed_order: order }).unwrap();
        assert!(stripped.strip_count() <= 3);
        assert_valid(&graph, &stripped);
    }
    // Walking around the ring from 0 the other way.
    assert_eq!(
        &[ids(&[0, 5, 4, 3, 2, 1])],
        build_strips(&graph).unwrap().strips()
    );
}

#[test]
fn bowtie_touches_only_at_a_vertex() {
    let graph = load(TRI_BOWTIE.text);
    let stripped = build_strips(&graph).unwrap();
    assert_eq!(&[ids(&[0]), ids(&[1])], stripped.strips());
}

#[test]
fn grid_fixture() {
    let graph = load(TRI_GRID.text);
    let stripped = build_strips(&graph).unwrap();
    assert_valid(&graph, &stripped);
    assert_eq!(4, stripped.strip_count());
    assert_eq!(
        ids(&[0, 1, 2, 3, 4, 5, 6, 7, 14, 15, 22, 23, 30, 31]),
        stripped.strips()[0]
    );
    let stats = stripped.stats();
    assert_eq!(32, stats.triangles);
    assert_eq!(14, stats.longest);
    assert_eq!(0, stats.singletons);
}

#[test]
fn generated_grids() {
    for n in 1..=8 {
        let graph = build_adjacency(&grid(n));
        for order in ORDERS {
            let stripped = strip_mesh(&graph, &StripperConfig { seed_order: order }).unwrap();
            assert_valid(&graph, &stripped);
            assert_eq!(n as usize, stripped.strip_count(), "{}x{} {:?}", n, n, order);
        }
    }
}

#[test]
fn every_model_is_partitioned() {
    for model in ALL_MODELS {
        let graph = load(model.text);
        assert_eq!(model.triangles, graph.len());
        for order in ORDERS {
            let stripped = strip_mesh(&graph, &StripperConfig { seed_order: order }).unwrap();
            assert_valid(&graph, &stripped);
        }
    }
}

#[test]
fn stripping_is_deterministic() {
    for model in ALL_MODELS {
        let graph = load(model.text);
        for order in ORDERS {
            let config = StripperConfig { seed_order: order };
            assert_eq!(
                strip_mesh(&graph, &config).unwrap(),
                strip_mesh(&graph, &config).unwrap()
            );
        }
    }
}

#[test]
fn adjacency_is_repeatable() {
    for model in ALL_MODELS {
        let mesh = tristrip_trifile::parse_tri::<DefaultMesh>(model.text).unwrap();
        let graph = build_adjacency(&mesh);
        assert_eq!(graph, build_adjacency(&mesh));
        assert_eq!(graph, build_adjacency_brute_force(&mesh));
    }
    let mesh = grid(6);
    assert_eq!(build_adjacency(&mesh), build_adjacency_brute_force(&mesh));
}

#[test]
fn adjacency_is_symmetric_on_manifold_meshes() {
    let graph = build_adjacency(&grid(5));
    for t in graph.triangles() {
        assert!(t.adjacent().len() <= 3);
        for &n in t.adjacent() {
            assert!(graph.shares_edge(t.id(), n));
        }
    }
}

#[test]
fn empty_mesh() {
    let graph = build_adjacency(&DefaultMesh::default());
    let stripped = build_strips(&graph).unwrap();
    assert_eq!(0, stripped.strip_count());
    assert_eq!(0, stripped.links().strips().count());
}

#[test]
fn strip_file_round_trip() {
    let graph = load(TRI_GRID.text);
    let stripped = build_strips(&graph).unwrap();
    let mut buf = Vec::new();
    write_strips(&mut buf, stripped.strips()).unwrap();
    assert_eq!(stripped.strips(), read_strips(&mut buf.as_slice()).unwrap());
}
