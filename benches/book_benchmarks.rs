//! Performance benchmarks for the contact book.
//!
//! These benchmarks measure the hot paths:
//! - Phone number validation
//! - Record lookup in books of different sizes

use contact_book::{AddressBook, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book with `size` records, each holding two phone numbers.
fn populated_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("Contact{}", i));
        record
            .add_phone(&format!("{:010}", i))
            .expect("generated number is 10 digits");
        record
            .add_phone(&format!("{:010}", i + 1_000_000))
            .expect("generated number is 10 digits");
        book.add_record(record);
    }
    book
}

/// Benchmark phone validation for valid and invalid inputs.
fn bench_phone_validation(c: &mut Criterion) {
    c.bench_function("phone_validation_valid", |b| {
        b.iter(|| contact_book::PhoneNumber::new(std::hint::black_box("1234567890")));
    });

    c.bench_function("phone_validation_invalid", |b| {
        b.iter(|| contact_book::PhoneNumber::new(std::hint::black_box("123-456-7890")));
    });
}

/// Benchmark record lookup across book sizes.
fn bench_book_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_find");
    for size in [10, 100, 1_000] {
        let book = populated_book(size);
        let target = format!("Contact{}", size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| book.find(std::hint::black_box(&target)));
        });
    }
    group.finish();
}

/// Benchmark the display path used by the demonstration flow.
fn bench_book_display(c: &mut Criterion) {
    let book = populated_book(100);
    c.bench_function("book_display_100", |b| {
        b.iter(|| book.to_string());
    });
}

criterion_group!(
    benches,
    bench_phone_validation,
    bench_book_find,
    bench_book_display
);
criterion_main!(benches);
