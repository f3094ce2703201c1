// Benchmark for calendar layout
// Measures grid generation, month layout and journal indexing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hair_diary::models::journal::JournalEntry;
use hair_diary::models::month::MonthId;
use hair_diary::services::journal::JournalService;
use hair_diary::ui_egui::views::month_window::{MonthLayout, MonthWindow, RowGeometry};
use hair_diary::utils::date::generate_calendar_days;

fn journal_entries(count: usize) -> Vec<JournalEntry> {
    (0..count)
        .map(|i| JournalEntry {
            img_url: format!("https://example.com/{}.jpg", i),
            rating: (i % 11) as f32 * 0.5,
            categories: vec!["Cut".to_string()],
            date: format!("{}/{}/{}", i % 28 + 1, (i / 28) % 12 + 1, 2020 + i / 336),
            description: String::new(),
        })
        .collect()
}

fn bench_calendar_days(c: &mut Criterion) {
    c.bench_function("generate_calendar_days 10 years", |b| {
        b.iter(|| {
            for year in 2020..2030 {
                for month in 1..=12 {
                    black_box(generate_calendar_days(black_box(year), month));
                }
            }
        })
    });
}

fn bench_month_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_layout");
    let geometry = RowGeometry {
        row_height: 140.0,
        header_height: 0.0,
        gap: 4.0,
    };
    let center = MonthId::new(2025, 6).unwrap();

    for radius in [2u32, 12, 60].iter() {
        let window = MonthWindow::around(center, *radius);
        group.bench_with_input(BenchmarkId::new("compute", radius), &window, |b, window| {
            b.iter(|| {
                let layout = MonthLayout::compute(black_box(window), geometry);
                black_box(layout.most_visible(1200.0, 800.0, center))
            })
        });
    }

    group.finish();
}

fn bench_journal_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("journal_index");

    for count in [18usize, 500, 5000].iter() {
        let entries = journal_entries(*count);
        group.bench_with_input(BenchmarkId::new("from_entries", count), &entries, |b, entries| {
            b.iter(|| JournalService::from_entries(black_box(entries.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calendar_days,
    bench_month_layout,
    bench_journal_index
);
criterion_main!(benches);
