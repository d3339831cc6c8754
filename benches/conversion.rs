//! Benchmarks for the exam conversion pipeline.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use mdqti::export::{Exporter, PackageExporter};
use mdqti::markdown::render_fragment;
use mdqti::qti::{QtiGenerator, SequentialIds};
use mdqti::parse_exam;

/// A synthetic exam with code blocks in stems and choices.
fn sample_exam(questions: usize) -> String {
    let mut out = String::new();
    for n in 1..=questions {
        out.push_str(&format!(
            "{n}. What does snippet {n} print?\n\n   ```python\n   for i in range({n}):\n       print(i < {n} and `x`)\n   ```\n\n   a. Nothing\n   *b. The numbers below {n}\n   c. `SyntaxError`\n   d.\n   ```\n   a. tricky\n   ```\n\n"
        ));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let exam = sample_exam(200);
    c.bench_function("parse_exam", |b| {
        b.iter(|| parse_exam(&exam));
    });
}

fn bench_render(c: &mut Criterion) {
    let fragment = "Consider `a < b`:\n\n```rust\nfn main() { println!(\"<&>\"); }\n```\nand `c`.";
    c.bench_function("render_fragment", |b| {
        b.iter(|| render_fragment(fragment));
    });
}

fn bench_generate(c: &mut Criterion) {
    let questions = parse_exam(&sample_exam(200));
    c.bench_function("generate_documents", |b| {
        b.iter(|| {
            QtiGenerator::new()
                .with_ids(SequentialIds::new())
                .generate(&questions)
                .unwrap()
        });
    });
}

fn bench_package(c: &mut Criterion) {
    let questions = parse_exam(&sample_exam(200));
    let docs = QtiGenerator::new().generate(&questions).unwrap();
    c.bench_function("write_package", |b| {
        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            PackageExporter::new().export(&docs, &mut output).unwrap();
        });
    });
}

criterion_group!(benches, bench_parse, bench_render, bench_generate, bench_package);
criterion_main!(benches);
