use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use flatfile::Csv;
use flatfile::scan::FieldScanner;

fn make_csv(rows: usize, shuffled_header: bool) -> String {
    let mut s = String::new();
    if shuffled_header {
        s.push_str("email; id ;name;score\r\n");
    } else {
        s.push_str("id;name;email;score\r\n");
    }
    for i in 0..rows {
        if i % 50 == 0 {
            s.push_str("   \r\n");
        }
        if shuffled_header {
            s.push_str(&format!("user{i}@example.org; {i} ;User {i};{}\r\n", i * 7 % 101));
        } else {
            s.push_str(&format!("{i};User {i};user{i}@example.org ; {}\r\n", i * 7 % 101));
        }
    }
    s
}

pub fn scan_benchmarks(c: &mut Criterion) {
    let cases = [
        ("declared_1k", make_csv(1000, false)),
        ("reordered_1k", make_csv(1000, true)),
        ("declared_10k", make_csv(10_000, false)),
    ];

    let mut group = c.benchmark_group("csv_scan");
    for (name, text) in &cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("fields::{name}"), |b| {
            let bytes = text.as_bytes();
            let mut scanner = FieldScanner::new();
            b.iter(|| {
                let mut offset = 0;
                let mut fields = 0;
                while offset < bytes.len() {
                    offset = scanner.scan_line(bytes, b";", offset);
                    fields += scanner.len();
                }
                black_box(fields)
            })
        });
        group.bench_function(format!("table::{name}"), |b| {
            b.iter_batched(
                || Csv::new(["id", "name", "email", "score"], ";"),
                |mut csv| {
                    csv.read_str(text);
                    black_box(csv.len())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, scan_benchmarks);
criterion_main!(benches);
