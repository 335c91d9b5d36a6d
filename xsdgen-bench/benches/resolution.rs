//! Type resolution benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use xsdgen_bench::fixtures::bounded_integer;
use xsdgen_schema::{
    Datatype, HostType, IntegerOverride, Restriction, RestrictionSet, ResolverOptions, TypeCode,
    TypeResolver, narrowest_for_range,
};

fn benchmark_narrowest_for_range(c: &mut Criterion) {
    c.bench_function("narrowest_for_range_u8", |b| {
        b.iter(|| narrowest_for_range(black_box(0), black_box(200)))
    });

    c.bench_function("narrowest_for_range_decimal", |b| {
        b.iter(|| narrowest_for_range(black_box(i128::MIN), black_box(i128::MAX)))
    });
}

fn benchmark_resolve_integer(c: &mut Criterion) {
    let options = ResolverOptions::default();
    let resolver = TypeResolver::new(&options);
    let (datatype, bounded) = bounded_integer(-40_000, 40_000);
    let digits = RestrictionSet::new().with(Restriction::TotalDigits(12));

    c.bench_function("resolve_integer_bounded", |b| {
        b.iter(|| resolver.resolve_effective_type(black_box(&datatype), black_box(&bounded), false))
    });

    c.bench_function("resolve_integer_total_digits", |b| {
        b.iter(|| resolver.resolve_integer(black_box(TypeCode::Integer), black_box(&digits)))
    });

    let fallback = ResolverOptions {
        integer_override: Some(IntegerOverride {
            host_type: HostType::I64,
            fallback_only: true,
        }),
        ..ResolverOptions::default()
    };
    let resolver = TypeResolver::new(&fallback);
    let unbounded = RestrictionSet::new();
    c.bench_function("resolve_integer_fallback", |b| {
        b.iter(|| resolver.resolve_integer(black_box(TypeCode::Integer), black_box(&unbounded)))
    });
}

fn benchmark_resolve_list(c: &mut Criterion) {
    let options = ResolverOptions::default();
    let resolver = TypeResolver::new(&options);
    let list = Datatype::list(TypeCode::Int);
    let restrictions = RestrictionSet::new();

    c.bench_function("resolve_list_attribute", |b| {
        b.iter(|| resolver.resolve_effective_type(black_box(&list), black_box(&restrictions), true))
    });
}

criterion_group!(
    benches,
    benchmark_narrowest_for_range,
    benchmark_resolve_integer,
    benchmark_resolve_list,
);
criterion_main!(benches);
