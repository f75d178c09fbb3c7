use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::assign_levels;
use strata::graphlib::{Edge, Graph, Node, NodeKind};

#[derive(Debug, Clone)]
struct GraphSpec {
    node_ids: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    fn build(&self) -> Graph {
        let nodes: Vec<Node> = self
            .node_ids
            .iter()
            .map(|id| Node::new(id.clone(), id.clone(), NodeKind::Process))
            .collect();

        let mut edges: Vec<Edge> = Vec::with_capacity(self.edges.len());
        for &(from, to) in &self.edges {
            if from >= self.node_ids.len() || to >= self.node_ids.len() {
                continue;
            }
            edges.push(Edge::new(
                self.node_ids[from].clone(),
                self.node_ids[to].clone(),
            ));
        }

        Graph::build(nodes, edges)
    }
}

fn build_flow_spec(name: &str, node_count: usize, fanout: usize) -> GraphSpec {
    let node_ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1));
    }

    // Extra forward edges so frontiers converge from multiple parents.
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k);
            if to >= node_count {
                break;
            }
            edges.push((i, to));
        }

        // An occasional back edge to exercise the visited gating.
        if i % 16 == 15 {
            edges.push((i, i / 2));
        }
    }

    GraphSpec { node_ids, edges }
}

fn bench_assign_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("leveling");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("flow_50_f3", 50usize, 3usize),
        ("flow_200_f4", 200usize, 4usize),
        ("flow_400_f4", 400usize, 4usize),
    ];

    for (name, nodes, fanout) in cases {
        let spec = build_flow_spec(name, nodes, fanout);
        group.bench_with_input(
            BenchmarkId::new("level::assign_levels", name),
            &spec,
            |b, spec| {
                b.iter_batched(
                    || spec.build(),
                    |g| {
                        let layout = assign_levels(black_box(&g));
                        black_box(layout.level_count());
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_assign_levels);
criterion_main!(benches);
