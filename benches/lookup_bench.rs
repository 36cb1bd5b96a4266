use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphoneinfo::{PhoneInfo, helper_functions::parse_number, prefix_map::PrefixMap};

fn setup_numbers() -> Vec<phonenumber::PhoneNumber> {
    [
        "+44 20 8765 4321",
        "+44 7400 123456",
        "+1 650-253-0000",
        "+1 800 253 0000",
        "+61 2 1234 5678",
        "+49 30 123456",
    ]
    .iter()
    .map(|s| parse_number(s, None).unwrap())
    .collect()
}

fn prefix_map_benchmark(c: &mut Criterion) {
    let mut map = PrefixMap::new();
    for prefix in 1000..20000u64 {
        map.insert(prefix, "description");
    }

    c.bench_function("PrefixMap::lookup", |b| {
        b.iter(|| map.lookup(black_box("16502530000")))
    });
}

fn phone_info_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let info = PhoneInfo::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"),
        "en",
    );

    let mut group = c.benchmark_group("PhoneInfo lookups");
    group.bench_function("time_zones_for_number", |b| {
        b.iter(|| {
            for number in &numbers {
                info.time_zones_for_number(black_box(number));
            }
        })
    });
    group.bench_function("report", |b| {
        b.iter(|| {
            for number in &numbers {
                info.report(black_box(number));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, prefix_map_benchmark, phone_info_benchmark);
criterion_main!(benches);
