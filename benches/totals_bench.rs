use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quickbill::core::{LineItem, compute_totals};
use quickbill::store::{InvoiceStore, MemoryStore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bench_compute_totals(c: &mut Criterion) {
    let store = InvoiceStore::new(MemoryStore::new());
    let mut invoice = store.create_draft_on(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    invoice.tax_rate = dec!(10);
    invoice.discount = dec!(25);
    for i in 0..100 {
        invoice.items.push(LineItem::new(
            format!("Item {i}"),
            Decimal::from(i % 7 + 1),
            dec!(19.99),
        ));
    }

    c.bench_function("compute_totals_100_lines", |b| {
        b.iter(|| compute_totals(black_box(&invoice)))
    });

    c.bench_function("serialize_100_lines", |b| {
        b.iter(|| serde_json::to_string(black_box(&invoice)).unwrap())
    });
}

criterion_group!(benches, bench_compute_totals);
criterion_main!(benches);
