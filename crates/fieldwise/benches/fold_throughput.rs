use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldwise::{Comparison, Description, Equality, Hashing};

#[derive(Clone)]
struct Record {
    id: u64,
    name: String,
    tags: Vec<u32>,
    alias: Option<String>,
}

fn fixture() -> Record {
    Record {
        id: 42,
        name: "benchmark-record".to_string(),
        tags: (0..64).collect(),
        alias: Some("alias".to_string()),
    }
}

fn equality_bench(c: &mut Criterion) {
    let engine: Equality<Record> = Equality::new()
        .append(|r: &Record| &r.id)
        .append(|r: &Record| &r.name)
        .append_collection(|r: &Record| Box::new(r.tags.iter()))
        .append_optional(|r: &Record| r.alias.as_deref());
    let lhs = fixture();
    let rhs = fixture();

    c.bench_function("equality_fold", |b| {
        b.iter(|| black_box(engine.equals(black_box(&lhs), black_box(&rhs))));
    });
}

fn hashing_bench(c: &mut Criterion) {
    let engine: Hashing<Record> = Hashing::new()
        .append(|r: &Record| &r.id)
        .append(|r: &Record| &r.name)
        .append_collection(|r: &Record| Box::new(r.tags.iter()))
        .append_optional(|r: &Record| r.alias.as_deref());
    let record = fixture();

    c.bench_function("hash_fold", |b| {
        b.iter(|| black_box(engine.hash(black_box(&record))));
    });
}

fn comparison_bench(c: &mut Criterion) {
    let engine: Comparison<Record> = Comparison::new()
        .append(|r: &Record| &r.id)
        .append(|r: &Record| &r.name);
    let lhs = fixture();
    let rhs = fixture();

    c.bench_function("comparison_fold", |b| {
        b.iter(|| black_box(engine.compare(black_box(&lhs), black_box(&rhs))));
    });
}

fn describe_bench(c: &mut Criterion) {
    let engine: Description<Record> = Description::new()
        .append("id", |r: &Record| &r.id)
        .append("name", |r: &Record| &r.name)
        .append_optional("alias", |r: &Record| r.alias.as_ref());
    let record = fixture();

    c.bench_function("describe_fold", |b| {
        b.iter(|| black_box(engine.describe(black_box(&record))));
    });
}

criterion_group!(
    benches,
    equality_bench,
    hashing_bench,
    comparison_bench,
    describe_bench
);
criterion_main!(benches);
