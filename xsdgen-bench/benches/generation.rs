//! Generation pass benchmarks.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use xsdgen_bench::fixtures::wide_schema;
use xsdgen_codegen::{GeneratorConfig, generate_declarations};

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for classes in [10, 100, 500] {
        let graph = wide_schema(classes, 16).unwrap();
        group.bench_with_input(BenchmarkId::new("default", classes), &graph, |b, graph| {
            b.iter_batched(
                || graph.clone(),
                |mut graph| generate_declarations(&mut graph, GeneratorConfig::default()),
                BatchSize::LargeInput,
            )
        });

        let config = GeneratorConfig::default()
            .generate_nullables(true)
            .use_should_serialize(true)
            .enable_data_binding(true);
        group.bench_with_input(BenchmarkId::new("data_binding", classes), &graph, |b, graph| {
            b.iter_batched(
                || graph.clone(),
                |mut graph| generate_declarations(&mut graph, config.clone()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generate);
criterion_main!(benches);
