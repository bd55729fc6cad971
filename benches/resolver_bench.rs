use criterion::{Criterion, criterion_group, criterion_main};
use launchboard::charts::{resolve_pie, resolve_scatter};
use launchboard::core::{Dataset, LaunchRecord, Outcome, PayloadRange, SiteSelection};
use std::hint::black_box;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 3] = ["v1.1", "FT", "B5"];

fn synthetic_dataset(len: usize) -> Dataset {
    let records: Vec<LaunchRecord> = (0..len)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i % 10_000) as f64,
                outcome,
                BOOSTERS[i % BOOSTERS.len()],
            )
        })
        .collect();
    Dataset::from_records(records).expect("valid generated records")
}

fn bench_pie_all_sites_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);

    c.bench_function("pie_all_sites_10k", |b| {
        b.iter(|| {
            let spec = resolve_pie(black_box(&dataset), &SiteSelection::All);
            black_box(spec)
        })
    });
}

fn bench_pie_single_site_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let selection = SiteSelection::Site(SITES[0].to_owned());

    c.bench_function("pie_single_site_10k", |b| {
        b.iter(|| {
            let spec = resolve_pie(black_box(&dataset), &selection);
            black_box(spec)
        })
    });
}

fn bench_scatter_windowed_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let range = PayloadRange::new(2_500.0, 7_500.0);

    c.bench_function("scatter_windowed_10k", |b| {
        b.iter(|| {
            let spec = resolve_scatter(black_box(&dataset), &SiteSelection::All, range);
            black_box(spec)
        })
    });
}

criterion_group!(
    benches,
    bench_pie_all_sites_10k,
    bench_pie_single_site_10k,
    bench_scatter_windowed_10k
);
criterion_main!(benches);
