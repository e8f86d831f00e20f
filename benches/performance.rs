// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshscope::geometry::{Primitive, DEFAULT_SAMPLE_SEED};
use meshscope::io::{LoadedMesh, MeshFormat};
use meshscope::metrics::extract_metrics;
use meshscope::render::{render_panel, PanelSource, PanelStyle, PlotOptions, GRID_CAMERA};
use std::path::PathBuf;

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("cube", |b| {
        b.iter(|| Primitive::indexed_cube(black_box(10.0)).to_mesh());
    });

    group.bench_function("sphere_64", |b| {
        b.iter(|| Primitive::uv_sphere(black_box(10.0), black_box(64)).to_mesh());
    });

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    for segments in [32u32, 128] {
        let loaded = LoadedMesh {
            path: PathBuf::from("sphere.obj"),
            format: MeshFormat::Obj,
            mesh: Primitive::uv_sphere(10.0, segments).to_mesh(),
        };
        group.bench_with_input(BenchmarkId::new("sphere", segments), &loaded, |b, loaded| {
            b.iter(|| extract_metrics(black_box(loaded)));
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let mesh = Primitive::uv_sphere(10.0, 256).to_mesh();

    group.bench_function("downsample_12000", |b| {
        b.iter(|| mesh.downsample(black_box(12_000), DEFAULT_SAMPLE_SEED).triangle_count());
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let mesh = Primitive::uv_sphere(10.0, 64).to_mesh();
    let source = PanelSource { label: "OBJ", mesh: &mesh };
    let options = PlotOptions::default();

    for style in [PanelStyle::Solid, PanelStyle::Wireframe, PanelStyle::Normals] {
        group.bench_function(format!("{style:?}").to_lowercase(), |b| {
            b.iter(|| render_panel(source, "OBJ", black_box(style), &GRID_CAMERA, &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_metrics, bench_sampling, bench_render);
criterion_main!(benches);
