//! Benchmarks for form input checks and date formatting.
//!
//! These benchmarks measure the email pattern and the timestamp formatting
//! run for every task on each frame.

use chrono::{DateTime, Local};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn bench_email_compile(c: &mut Criterion) {
    c.bench_function("regex_compile_email_pattern", |b| {
        b.iter(|| Regex::new(black_box(EMAIL_PATTERN)))
    });
}

fn bench_email_match(c: &mut Criterion) {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    let emails = [
        "ada@example.com",
        "not-an-email",
        "first.last+tag@sub.example.co.uk",
        "spaces in@example.com",
    ];

    c.bench_function("regex_match_emails", |b| {
        b.iter(|| {
            emails
                .iter()
                .filter(|email| re.is_match(black_box(email)))
                .count()
        })
    });
}

fn bench_format_date(c: &mut Criterion) {
    let timestamp = "2024-03-05T10:15:30.000Z";

    c.bench_function("format_task_date", |b| {
        b.iter(|| {
            DateTime::parse_from_rfc3339(black_box(timestamp))
                .map(|dt| dt.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string())
                .unwrap_or_else(|_| timestamp.to_string())
        })
    });
}

criterion_group!(
    benches,
    bench_email_compile,
    bench_email_match,
    bench_format_date
);
criterion_main!(benches);
