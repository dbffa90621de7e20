//! Benchmarks for tonalchat parsing and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- day_order`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use tonalchat::config::{OutputConfig, ParseOptions};
use tonalchat::output::{to_csv, to_json, to_jsonl};
use tonalchat::parser::ChatParser;
use tonalchat::parsing::annotations::split_tone;
use tonalchat::parsing::date::infer_day_order;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Day-first export with tone tags, system lines and multi-line messages.
fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Emily" } else { "John" };
        let day = i % 28 + 1;
        let hour = i % 24;
        let minute = i % 60;
        let prefix = format!("[{day:02}.06.19, {hour:02}:{minute:02}:00]");

        match i % 10 {
            0 => lines.push(format!("{prefix} {sender} added Loris")),
            3 => {
                lines.push(format!("{prefix} {sender}: Message number {i}"));
                lines.push("and a second line".to_string());
            }
            7 => lines.push(format!("{prefix} {sender}: Message number {i} /gen")),
            _ => lines.push(format!("{prefix} {sender}: Message number {i}")),
        }
    }
    lines.join("\n")
}

fn generate_us_export(count: usize) -> String {
    (0..count)
        .map(|i| {
            let hour = i % 12 + 1;
            let ampm = if i % 2 == 0 { "AM" } else { "PM" };
            format!("[6/{}/19, {hour}:{:02}:00 {ampm}] John: Message number {i}", i % 28 + 1, i % 60)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_export");
    let parser = ChatParser::new();
    let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse_str_at(black_box(txt), now).unwrap();
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_day_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_order");
    let txt = generate_us_export(10_000);
    let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    let detect = ChatParser::new();
    group.bench_function("detected", |b| {
        b.iter(|| black_box(detect.parse_str_at(black_box(&txt), now).unwrap()));
    });

    let supplied = ChatParser::with_config(ParseOptions::new().with_days_first(false));
    group.bench_function("supplied", |b| {
        b.iter(|| black_box(supplied.parse_str_at(black_box(&txt), now).unwrap()));
    });

    let dates: Vec<String> = (0..10_000).map(|i| format!("6/{}/19", i % 28 + 1)).collect();
    group.bench_function("infer_only", |b| {
        b.iter(|| black_box(infer_day_order(dates.iter().map(String::as_str))));
    });

    group.finish();
}

fn bench_split_tone(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_tone");

    group.bench_function("tagged", |b| {
        b.iter(|| black_box(split_tone(black_box("Sounds good man, I like it! /pos"))));
    });
    group.bench_function("untagged", |b| {
        b.iter(|| black_box(split_tone(black_box("Sounds good man, I like it!"))));
    });

    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let messages = ChatParser::new().parse_str(&generate_export(10_000)).unwrap();
    let config = OutputConfig::all();

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&messages, &config).unwrap())));
    group.bench_function("json", |b| b.iter(|| black_box(to_json(&messages, &config).unwrap())));
    group.bench_function("jsonl", |b| b.iter(|| black_box(to_jsonl(&messages, &config).unwrap())));

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_export,
    bench_day_order,
    bench_split_tone,
    bench_output
);
criterion_main!(benches);
