//! Benchmarks for streaming segmentation and annotation reordering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use osc_text_core::{OrderTable, TextStreamSentencizer, TokenParser};
use std::hint::black_box;

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "有个阿姨拿着一个不锈钢的碗，走到了柜台前，跟服务员说：我要一碗面。服务员说好的！";
    let target_size = size_kb * 1024;
    let repetitions = target_size / base_text.len() + 1;

    base_text.repeat(repetitions)
}

fn generate_annotations(count: usize) -> String {
    let token = r#"date { day: "1" year: "2023" month: "5" } char { value: "的" } money { currency: "元" value: "5" } "#;
    token.repeat(count)
}

fn benchmark_push_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentencizer_push");
    let text = generate_test_text(256);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for chunk_chars in [1usize, 16, 4096] {
        let chunks: Vec<String> = text
            .chars()
            .collect::<Vec<_>>()
            .chunks(chunk_chars)
            .map(|c| c.iter().collect())
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_chars),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut sentencizer = TextStreamSentencizer::new();
                    let mut count = 0;
                    for chunk in chunks {
                        count += sentencizer.push(black_box(chunk)).len();
                    }
                    count + sentencizer.flush().len()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_reader(c: &mut Criterion) {
    let text = generate_test_text(1024);
    let mut group = c.benchmark_group("sentencizer_reader");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.sample_size(20);

    group.bench_function("1MB", |b| {
        b.iter(|| {
            TextStreamSentencizer::new()
                .sentences_from_reader(black_box(text.as_bytes()))
                .count()
        });
    });

    group.finish();
}

fn benchmark_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder");
    let parser = TokenParser::new(OrderTable::ZhNormalization);

    for count in [10usize, 1000] {
        let input = generate_annotations(count);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| parser.reorder(black_box(input)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_chunk_sizes,
    benchmark_reader,
    benchmark_reorder
);
criterion_main!(benches);
