//! Benchmarks for fault translation.
//!
//! Measures the hot path of a boundary crossing:
//! - Translating a fault whose class has a registered wrapper
//! - Translating an unmapped fault, including the warning it records
//! - Raw registry lookups, hit and miss
//! - One-time registry construction against a full hierarchy

extern crate faultbridge;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use faultbridge::{
    NativeClassBuilder, NativeFault, NativeFaultRc, NativeHierarchy, NativeTypeId, NativeValue,
    WrapperKind, WrapperRegistry,
};
use std::hint::black_box;
use std::sync::Arc;
use strum::IntoEnumIterator;

#[derive(Debug)]
struct BenchFault {
    class_id: NativeTypeId,
    message: String,
}

impl BenchFault {
    fn raise(class_name: &str, message: &str) -> NativeFaultRc {
        Arc::new(BenchFault {
            class_id: NativeTypeId::new(format!("cpp::{class_name}")),
            message: message.to_string(),
        })
    }
}

impl NativeFault for BenchFault {
    fn class_id(&self) -> NativeTypeId {
        self.class_id.clone()
    }

    fn what(&self) -> &str {
        &self.message
    }

    fn as_string(&self) -> String {
        format!("fault: {}", self.message)
    }

    fn attr(&self, _name: &str) -> Option<NativeValue> {
        None
    }
}

fn bench_hierarchy() -> NativeHierarchy {
    let hierarchy = NativeHierarchy::new();
    for kind in WrapperKind::iter() {
        hierarchy.insert(
            NativeClassBuilder::new(
                NativeTypeId::new(format!("cpp::{}", kind.native_name())),
                kind.native_name(),
            )
            .build(),
        );
    }
    hierarchy
}

/// Benchmark translating a fault with a registered wrapper type.
fn bench_translate_hit(c: &mut Criterion) {
    let registry = WrapperRegistry::new(&bench_hierarchy()).unwrap();
    let fault = BenchFault::raise("OutOfRangeError", "index 9 out of range");

    c.bench_function("translate_hit", |b| {
        b.iter(|| {
            let wrapped = registry.translate(black_box(fault.clone()));
            black_box(wrapped)
        });
    });
}

/// Benchmark translating an unmapped fault.
/// Each miss records a warning, so every iteration gets a fresh registry
/// from the untimed setup phase.
fn bench_translate_miss(c: &mut Criterion) {
    let hierarchy = bench_hierarchy();
    let fault = BenchFault::raise("VendorFrobError", "frobnication failed");

    c.bench_function("translate_miss", |b| {
        b.iter_batched(
            || WrapperRegistry::new(&hierarchy).unwrap(),
            |registry| {
                let wrapped = registry.translate(black_box(fault.clone()));
                black_box(wrapped)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark a registry lookup that finds a wrapper type.
fn bench_lookup_hit(c: &mut Criterion) {
    let registry = WrapperRegistry::new(&bench_hierarchy()).unwrap();
    let class_id = NativeTypeId::new("cpp::OverflowError");

    c.bench_function("lookup_hit", |b| {
        b.iter(|| {
            let wrapper = registry.lookup(black_box(&class_id));
            black_box(wrapper)
        });
    });
}

/// Benchmark a registry lookup that misses.
fn bench_lookup_miss(c: &mut Criterion) {
    let registry = WrapperRegistry::new(&bench_hierarchy()).unwrap();
    let class_id = NativeTypeId::new("cpp::VendorFrobError");

    c.bench_function("lookup_miss", |b| {
        b.iter(|| {
            let wrapper = registry.lookup(black_box(&class_id));
            black_box(wrapper)
        });
    });
}

/// Benchmark building a registry against a full canonical hierarchy.
fn bench_registry_construction(c: &mut Criterion) {
    let hierarchy = bench_hierarchy();

    c.bench_function("registry_construction", |b| {
        b.iter(|| {
            let registry = WrapperRegistry::new(black_box(&hierarchy)).unwrap();
            black_box(registry)
        });
    });
}

criterion_group!(
    benches,
    // Translation paths
    bench_translate_hit,
    bench_translate_miss,
    // Registry internals
    bench_lookup_hit,
    bench_lookup_miss,
    bench_registry_construction,
);
criterion_main!(benches);
