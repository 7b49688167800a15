use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ksef_naglowek::core::*;
use ksef_naglowek::header::{HeaderGenerator, LabelTable, generate_header};

fn collective_correction() -> Invoice {
    InvoiceBuilder::new(SchemaVariant::Fa3, "FKZ/2025/05")
        .kind(InvoiceKind::Kor)
        .corrected_period("2025-01")
        .build()
        .unwrap()
}

fn bench_labels(c: &mut Criterion) {
    let labels = LabelTable::default();
    let kinds: Vec<InvoiceKind> = ["VAT", "KOR", "KOR_ROZ", "UNKNOWN"]
        .into_iter()
        .map(InvoiceKind::from_code)
        .collect();

    c.bench_function("resolve_labels", |b| {
        b.iter(|| {
            for kind in &kinds {
                black_box(labels.resolve(Some(black_box(kind)), None));
            }
        })
    });
}

fn bench_header_text_only(c: &mut Criterion) {
    let invoice = collective_correction();
    let data = AdditionalData::new().reference_number("KSEF123");
    let generator = HeaderGenerator::new(|_: &str| -> Result<String, NaglowekError> {
        Err(NaglowekError::Barcode("unused".into()))
    });

    c.bench_function("header_text_only", |b| {
        b.iter(|| generator.generate(black_box(Some(&invoice)), black_box(Some(&data))))
    });
}

fn bench_header_with_barcode(c: &mut Criterion) {
    let invoice = collective_correction();
    let data = AdditionalData::new()
        .reference_number("5265877635-20250826-0100001AF629-AF")
        .barcode("5265877635-20250826-0100001AF629-AF");

    c.bench_function("header_with_barcode", |b| {
        b.iter(|| generate_header(black_box(Some(&invoice)), black_box(Some(&data))))
    });
}

criterion_group!(
    benches,
    bench_labels,
    bench_header_text_only,
    bench_header_with_barcode
);
criterion_main!(benches);
