// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Aabb2D, QuadTree, QuadTreeConfig};

const WORLD: f64 = 2048.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, rect_w: f64, rect_h: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (WORLD - rect_w);
        let y0 = rng.next_f64() * (WORLD - rect_h);
        out.push(Aabb2D::<f64>::from_xywh(x0, y0, rect_w, rect_h));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        let margin = spread + 12.0;
        centers.push((
            margin + rng.next_f64() * (WORLD - 2.0 * margin),
            margin + rng.next_f64() * (WORLD - 2.0 * margin),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Aabb2D::<f64>::from_xywh(cx + dx, cy + dy, 12.0, 12.0));
        }
    }
    out
}

fn build(rects: &[Aabb2D<f64>], config: QuadTreeConfig) -> QuadTree<&Aabb2D<f64>, Aabb2D<f64>> {
    let mut tree = QuadTree::with_config(Aabb2D::new(0.0, 0.0, WORLD, WORLD), config)
        .expect("bench config fits 32-bit codes");
    for r in rects {
        tree.insert(r);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let rects = gen_random_rects(n, 8.0, 8.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| black_box(build(&rects, QuadTreeConfig::default()).node_count()))
        });
    }
    let rects = gen_clustered_rects(32, 256, 80.0);
    for &depth in &[3_u32, 5, 8] {
        let config = QuadTreeConfig::default().with_max_depth(depth);
        group.bench_function(format!("clustered_depth{}", depth), |b| {
            b.iter(|| black_box(build(&rects, config).node_count()))
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let rects = gen_random_rects(20_000, 8.0, 8.0);
    let tree = build(&rects, QuadTreeConfig::default());
    for &side in &[32.0_f64, 256.0, 1024.0] {
        let region = Aabb2D::<f64>::from_xywh(500.0, 500.0, side, side);
        group.bench_function(format!("overlap_{}", side), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                tree.visit_query(black_box(&region), |_| hits += 1);
                black_box(hits)
            })
        });
        group.bench_function(format!("contained_{}", side), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                tree.visit_query_contained(black_box(&region), |_| hits += 1);
                black_box(hits)
            })
        });
    }
    group.bench_function("query_collect_1024", |b| {
        let region = Aabb2D::<f64>::from_xywh(0.0, 0.0, 1024.0, 1024.0);
        b.iter(|| black_box(tree.query(&region).len()))
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query);
criterion_main!(benches);
