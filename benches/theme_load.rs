use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gui_style_engine::{theme, StyleSheet, StyleTable, ThemeId};

fn bench_load_theme(c: &mut Criterion) {
    let mut table = StyleTable::new();
    c.bench_function("load_style_all_themes", |b| {
        b.iter(|| {
            for id in theme::available() {
                theme::load_style(&mut table, black_box(id)).ok();
            }
        })
    });
}

fn bench_rgs_round_trip(c: &mut Criterion) {
    let table = theme::canonical(ThemeId::Dark).unwrap_or_default();
    let text = StyleSheet::from_table(&table).to_rgs();
    c.bench_function("parse_rgs_dark", |b| {
        b.iter(|| StyleSheet::from_rgs(black_box(&text)))
    });
}

criterion_group!(benches, bench_load_theme, bench_rgs_round_trip);
criterion_main!(benches);
