//! Benchmarks for validating nested value graphs.
//!
//! Compares a flat form against a company-shaped tree with nested lists, in
//! both the all-valid case (no error allocation) and the all-failing case.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scrub::prelude::*;
use std::hint::black_box;

struct Contact {
    kind: String,
    value: String,
}

impl Validated for Contact {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("type", &self.kind).required(),
            StringField::new("value", &self.value).required().max_length(64),
        ]
    }
}

struct Employee {
    name: String,
    salary: f64,
    contacts: Vec<Contact>,
}

impl Validated for Employee {
    fn form(&self) -> Form<'_> {
        form![
            StringField::new("name", &self.name).required(),
            Float64Field::new("salary", self.salary).min(38000.0),
            NestedListField::new("contacts", &self.contacts)
                .min_length(1)
                .max_length(8),
        ]
    }
}

struct Company {
    employees: Vec<Employee>,
}

impl Validated for Company {
    fn form(&self) -> Form<'_> {
        form![NestedListField::new("employees", &self.employees)]
    }
}

fn company(size: usize, valid: bool) -> Company {
    let text = |s: &str| if valid { s.to_string() } else { String::new() };
    Company {
        employees: (0..size)
            .map(|i| Employee {
                name: text("employee"),
                salary: if valid { 50_000.0 + i as f64 } else { 0.0 },
                contacts: (0..3)
                    .map(|_| Contact {
                        kind: text("email"),
                        value: text("someone@example.com"),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_validation");

    for size in [10usize, 100, 1000] {
        let valid = company(size, true);
        group.bench_with_input(BenchmarkId::new("valid", size), &valid, |b, value| {
            b.iter(|| validate(black_box(value)))
        });

        let invalid = company(size, false);
        group.bench_with_input(BenchmarkId::new("invalid", size), &invalid, |b, value| {
            b.iter(|| validate(black_box(value)))
        });
    }

    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let errors = validate(&company(100, false));
    c.bench_function("describe_100_invalid", |b| {
        b.iter(|| black_box(&errors).describe())
    });
}

criterion_group!(benches, bench_nested, bench_describe);
criterion_main!(benches);
