//! Benchmarks for "did you mean" suggestions.
//!
//! Measures `ContactMatcher::suggest` over contact books of increasing size,
//! for a query with close matches and for one with none.

use contact_book::matching::ContactMatcher;
use contact_book::models::Contact;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];

fn generate_contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| {
            let name = format!("{} {}", FIRST_NAMES[i % FIRST_NAMES.len()], i);
            Contact::new(name, format!("138{:08}", i))
        })
        .collect()
}

fn bench_suggest_by_size(c: &mut Criterion) {
    let matcher = ContactMatcher::new();
    let mut group = c.benchmark_group("suggest_by_size");

    for size in [10, 100, 1000, 5000] {
        let contacts = generate_contacts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| matcher.suggest(black_box("Alise 1"), black_box(contacts), 3, 40));
        });
    }

    group.finish();
}

fn bench_suggest_no_match(c: &mut Criterion) {
    let matcher = ContactMatcher::new();
    let contacts = generate_contacts(1000);

    c.bench_function("suggest_no_match_1000", |b| {
        b.iter(|| matcher.suggest(black_box("zzzzzzzz"), black_box(&contacts), 3, 40));
    });
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("score_levenshtein", |b| {
        b.iter(|| ContactMatcher::score(black_box("jonathan smith"), black_box("johnathan smyth")));
    });
}

criterion_group!(
    benches,
    bench_suggest_by_size,
    bench_suggest_no_match,
    bench_score
);
criterion_main!(benches);
