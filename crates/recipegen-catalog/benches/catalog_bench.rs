//! Criterion benchmarks for a full catalog pass.
//!
//! - `catalog/build`: every domain sub-builder into a staging output
//! - `catalog/table`: build plus streaming into the in-memory table

use criterion::{Criterion, criterion_group, criterion_main};
use recipegen_catalog::ForestryRecipes;
use recipegen_core::output::RecipeOutput;
use recipegen_core::provider::{RecipeProvider, run_provider};
use recipegen_core::table::RecipeTable;
use std::path::Path;

fn bench_catalog(c: &mut Criterion) {
    let dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"));
    let registry = recipegen_data::load_content(dir).unwrap();
    let mut group = c.benchmark_group("catalog");

    group.bench_function("build", |b| {
        b.iter(|| {
            let mut out = RecipeOutput::new();
            ForestryRecipes.build_recipes(&registry, &mut out).unwrap();
            out
        });
    });

    group.bench_function("table", |b| {
        b.iter(|| {
            let mut table = RecipeTable::new();
            run_provider(&ForestryRecipes, &registry, &mut table).unwrap();
            table
        });
    });

    group.finish();
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
