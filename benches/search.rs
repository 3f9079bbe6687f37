// benches/search.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bulletin_scan::{
    s,
    engine::{propagate, reconstruct, search},
    workbook::{row, Sheet, Workbook},
};

const COURTS: [&str; 4] = [
    "JUZGADO SEXTO CIVIL MUNICIPAL",
    "J U Z G A D O   P R I M E R O   D E   F A M I L I A",
    "S E G U N D O L A B O R A L D E L C I R C U I T O",
    "JDO. 3 PENAL MUNICIPAL",
];

/// Bulletin-shaped workbook: court header, state header, then a block of records.
fn synthetic(sheets: usize, blocks: usize, per_block: usize) -> Workbook {
    let mut out = Vec::with_capacity(sheets);
    for s in 0..sheets {
        let mut rows = Vec::new();
        for b in 0..blocks {
            rows.push(row([COURTS[b % COURTS.len()]]));
            rows.push(row([format!("ESTADO {} DE MARZO 2026", b + 1)]));
            for r in 0..per_block {
                rows.push(row([
                    format!("2025-{:05}", s * 100_000 + b * per_block + r),
                    format!("Demandante {r}"),
                    if r % 97 == 0 { s!("Nancy Gómez") } else { format!("Demandado {b}") },
                    s!("Auto admite demanda"),
                ]));
            }
        }
        out.push(Sheet::new(format!("Hoja{}", s + 1), rows));
    }
    Workbook::new(out)
}

fn bench_search(c: &mut Criterion) {
    let wb = synthetic(4, 40, 60);

    c.bench_function("search_rare_term", |b| {
        b.iter(|| black_box(search(black_box(&wb), "nancy").len()))
    });

    c.bench_function("search_common_term", |b| {
        b.iter(|| black_box(search(black_box(&wb), "auto").len()))
    });

    c.bench_function("propagate_all", |b| {
        b.iter(|| black_box(propagate(black_box(&wb)).len()))
    });

    c.bench_function("reconstruct_headers", |b| {
        b.iter(|| {
            for h in COURTS {
                black_box(reconstruct(black_box(h)));
            }
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
