use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use wayfinder_lib::{build_graph, load_road_map, plan_route, Graph, RoadMap, RouteRequest};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/iberia.txt")
}

static MAP: Lazy<RoadMap> = Lazy::new(|| load_road_map(&fixture_path()).expect("fixture loads"));
static GRAPH: Lazy<Graph> = Lazy::new(|| build_graph(&MAP));
static REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("Madrid", "Barcelona"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let map = &*MAP;
    let graph = &*GRAPH;

    c.bench_function("plan_madrid_barcelona", |b| {
        let request = &*REQUEST;
        b.iter(|| {
            let plan = plan_route(map, graph, request).expect("route exists");
            black_box(plan.cost)
        });
    });

    c.bench_function("build_graph_iberia", |b| {
        b.iter(|| {
            let graph = build_graph(map);
            black_box(graph.node_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
