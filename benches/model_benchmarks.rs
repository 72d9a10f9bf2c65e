use class_model::formatter::Formatter;
use class_model::generator::Generator;
use class_model::parser::Parser;
use class_model::scanner::Scanner;
use class_model::validator::Validator;
use class_model::{analyze, parse_model};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const MINIMAL_MODEL: &str = include_str!("../tests/ok/minimal.model");
const ANGLE_MODEL: &str = include_str!("../tests/ok/angle.model");
const ENTRY_MODEL: &str = include_str!("../tests/ok/entry.model");
const COLLECTION_MODEL: &str = include_str!("../tests/ok/collection.model");

const SIZED_MODELS: [(&str, &str); 4] = [
    ("minimal", MINIMAL_MODEL),
    ("angle", ANGLE_MODEL),
    ("entry", ENTRY_MODEL),
    ("collection", COLLECTION_MODEL),
];

// Generate a model with many class and instance pairs for stress testing
fn generate_large_model(class_count: usize) -> String {
    let mut classes = String::from("\n// Class Definitions\n");
    let mut instances = String::from("\n// Instance Definitions\n");
    for i in 0..class_count {
        classes.push_str(&format!(
            "\n/*\nItem{i}ClassLike is a class interface.\n*/\ntype Item{i}ClassLike interface {{\n\t// Constructor Methods\n\tMakeWithName(name string) Item{i}Like\n}}\n"
        ));
        instances.push_str(&format!(
            "\n/*\nItem{i}Like is an instance interface.\n*/\ntype Item{i}Like interface {{\n\t// Public Methods\n\tGetClass() Item{i}ClassLike\n\tAsString() string\n\n\t// Attribute Methods\n\tGetName() string\n\tSetName(name string)\n}}\n"
        ));
    }
    format!("/*\nNotice\n*/\n\n/*\nPackage items.\n*/\npackage items\n{classes}{instances}")
}

// ============================================================================
// Scanner Benchmarks
// ============================================================================

fn bench_scanner_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_by_size");

    for (name, source) in SIZED_MODELS {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| Scanner::tokenize(black_box(src)))
        });
    }

    group.finish();
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parser_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_by_size");

    for (name, source) in SIZED_MODELS {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| Parser::new(black_box(src)).parse_model())
        });
    }

    group.finish();
}

fn bench_parser_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_class_scaling");

    for size in [10, 100, 500] {
        let source = generate_large_model(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| Parser::new(black_box(src)).parse_model())
        });
    }

    group.finish();
}

// ============================================================================
// Formatter and Validator Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter_by_size");

    for (name, source) in SIZED_MODELS {
        let model = parse_model(source).unwrap();
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &model, |b, model| {
            let mut formatter = Formatter::new();
            b.iter(|| formatter.format_model(black_box(model)))
        });
    }

    group.finish();
}

fn bench_validator_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator_class_scaling");

    for size in [10, 100, 500] {
        let model = parse_model(&generate_large_model(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &model, |b, model| {
            b.iter(|| Validator::new().validate_model(black_box(model)))
        });
    }

    group.finish();
}

// ============================================================================
// Generator Benchmarks
// ============================================================================

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_by_model");
    let generator = Generator::new();

    for (name, source) in SIZED_MODELS {
        let model = parse_model(source).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &model, |b, model| {
            b.iter(|| generator.generate_model_classes(black_box(model)))
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_e2e_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_analysis");

    for (name, source) in SIZED_MODELS {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| analyze(black_box(src), "bench.model"))
        });
    }

    group.finish();
}

fn bench_e2e_with_serialization(c: &mut Criterion) {
    c.bench_function("e2e_collection_to_json", |b| {
        b.iter(|| {
            let result = analyze(black_box(COLLECTION_MODEL), "collection.model").unwrap();
            result.to_json()
        })
    });
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(scanner_benches, bench_scanner_sizes);

criterion_group!(parser_benches, bench_parser_sizes, bench_parser_scaling);

criterion_group!(
    pipeline_benches,
    bench_formatter,
    bench_validator_scaling,
    bench_generator
);

criterion_group!(e2e_benches, bench_e2e_analysis, bench_e2e_with_serialization);

criterion_main!(
    scanner_benches,
    parser_benches,
    pipeline_benches,
    e2e_benches
);
