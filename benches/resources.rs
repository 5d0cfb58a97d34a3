//! Resource lookup benchmark: cache miss (synthesis) vs hit, and cache save/load.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jamb_analytics::resources::{catalog, get_resources, ResourceCache};
use std::time::Duration;
use tempfile::tempdir;

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("resources_miss", |b| {
        b.iter(|| {
            let mut cache = ResourceCache::new();
            black_box(get_resources(&mut cache, "Mathematics", Some("Calculus")))
        })
    });

    let mut cache = ResourceCache::new();
    get_resources(&mut cache, "Mathematics", Some("Calculus"));
    c.bench_function("resources_hit", |b| {
        b.iter(|| black_box(get_resources(&mut cache, "Mathematics", Some("Calculus"))))
    });
}

fn bench_persistence(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resources_cache.json");
    let mut cache = ResourceCache::new();
    for subject in catalog::SUBJECTS {
        get_resources(&mut cache, subject.name, None);
        for topic in subject.topics {
            get_resources(&mut cache, subject.name, Some(*topic));
        }
    }

    c.bench_function("cache_save_full_catalog", |b| b.iter(|| cache.save(&path)));
    c.bench_function("cache_load_full_catalog", |b| {
        b.iter(|| black_box(ResourceCache::load(&path, Duration::from_secs(86_400))))
    });
}

criterion_group!(benches, bench_lookup, bench_persistence);
criterion_main!(benches);
