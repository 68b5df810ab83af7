// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use layflat::{align_to_face, detect_major_faces, Primitive, RigidTransform};
use nalgebra::{UnitQuaternion, Vector3};

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_major_faces");

    let cube = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
    group.bench_function("cube", |b| {
        b.iter(|| detect_major_faces(black_box(&cube), 30.0).unwrap());
    });

    for segments in [64u32, 1024, 16384] {
        let cylinder = Primitive::cylinder(20.0, 5.0, segments).to_mesh();
        group.bench_with_input(
            BenchmarkId::new("cylinder", segments),
            &cylinder,
            |b, mesh| {
                b.iter(|| detect_major_faces(black_box(mesh), 30.0).unwrap());
            },
        );
    }

    let cylinder = Primitive::cylinder(20.0, 5.0, 1024).to_mesh();
    for threshold in [5.0, 30.0, 90.0] {
        group.bench_with_input(
            BenchmarkId::new("threshold", threshold),
            &threshold,
            |b, &threshold| {
                b.iter(|| detect_major_faces(black_box(&cylinder), threshold).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_align(c: &mut Criterion) {
    let cube = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
    let faces = detect_major_faces(&cube, 30.0).unwrap();
    let current = RigidTransform::new(
        UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1),
        Vector3::new(5.0, 1.0, -2.0),
    );

    c.bench_function("align_to_face", |b| {
        b.iter(|| {
            for face in &faces {
                black_box(align_to_face(black_box(&current), face).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_detect, bench_align);
criterion_main!(benches);
