// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::missing_panics_doc)] // Benches panic on failure
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

use classmap::{ClassRegistry, TypeCatalog, TypeHandle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn populated_registry() -> ClassRegistry {
    let registry = ClassRegistry::new(Arc::new(TypeCatalog::builtin())).unwrap();
    for i in 0..256u16 {
        registry
            .register_type(2000 + i, TypeHandle::new(format!("bench.Header{}", i)))
            .unwrap();
    }
    registry
}

// ============================================================================
// Tag -> type
// ============================================================================

/// Benchmark: resolve a built-in tag (array index)
fn bench_resolve_builtin(c: &mut Criterion) {
    let registry = populated_registry();
    c.bench_function("resolve_builtin", |b| {
        b.iter(|| registry.resolve(black_box(30)))
    });
}

/// Benchmark: resolve a user tag (read lock + hash lookup)
fn bench_resolve_user(c: &mut Criterion) {
    let registry = populated_registry();
    c.bench_function("resolve_user", |b| {
        b.iter(|| registry.resolve(black_box(2128)))
    });
}

// ============================================================================
// Type -> tag
// ============================================================================

fn bench_tag_of(c: &mut Criterion) {
    let registry = populated_registry();
    let builtin = registry.resolve(30).unwrap();
    let user = registry.resolve(2128).unwrap();
    c.bench_function("tag_of_builtin", |b| {
        b.iter(|| registry.tag_of(black_box(&builtin)))
    });
    c.bench_function("tag_of_user", |b| {
        b.iter(|| registry.tag_of(black_box(&user)))
    });
}

fn bench_describe_tag_table(c: &mut Criterion) {
    let registry = populated_registry();
    c.bench_function("describe_tag_table", |b| {
        b.iter(|| registry.describe_tag_table())
    });
}

criterion_group!(
    benches,
    bench_resolve_builtin,
    bench_resolve_user,
    bench_tag_of,
    bench_describe_tag_table
);
criterion_main!(benches);
