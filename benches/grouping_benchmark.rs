//! Grouping throughput on large contact lists.
//!
//! Measures a full regroup (what a group-mode switch costs) and the
//! append-then-regroup path taken on every delivered page.
//!
//! Run with: cargo bench --bench grouping_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mpdx_list::grouping::{group_items, GroupedCollection};
use mpdx_list::i18n::Translator;
use mpdx_list::model::{Contact, ContactId, GroupMode, PartnerStatus};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const PAGE: usize = 50;

fn contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| {
            let status = PartnerStatus::ALL[i % PartnerStatus::ALL.len()];
            let day = NaiveDate::from_ymd_opt(2020 + (i % 5) as i32, 1 + (i % 12) as u32, 1)
                .unwrap_or_default();
            Contact::new(ContactId::new(format!("c{i}")).unwrap(), format!("Contact {i}"))
                .with_status(status)
                .with_last_donation(day)
        })
        .collect()
}

fn bench_group_modes(c: &mut Criterion) {
    let translator = Translator::new();
    let mut group = c.benchmark_group("group_items");

    for size in SIZES {
        let data = contacts(size);
        for mode in [GroupMode::Status, GroupMode::Name, GroupMode::LastGift] {
            let classifier = mode.classifier(&translator);
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let layout = group_items(
                            data.iter(),
                            classifier.as_ref().map(|f| |contact: &&Contact| f(*contact)),
                        );
                        black_box(layout.group_count())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_paged_append(c: &mut Criterion) {
    let translator = Translator::new();
    let mut group = c.benchmark_group("append_page");

    for size in SIZES {
        let data = contacts(size);
        let next_page = contacts(PAGE);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter_batched(
                || {
                    let mut collection = GroupedCollection::from_items(data.clone())
                        .with_classifier(GroupMode::Status.classifier(&translator).unwrap());
                    collection.refresh();
                    collection
                },
                |mut collection| {
                    collection.extend(next_page.clone());
                    collection.refresh();
                    black_box(collection.cached_layout().len())
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_group_modes, bench_paged_append);
criterion_main!(benches);
