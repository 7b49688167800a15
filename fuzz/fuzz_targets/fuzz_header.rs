#![no_main]

use ksef_naglowek::core::*;
use ksef_naglowek::header::generate_header;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, Option<String>, Option<String>)| {
    let (kind, number, period, barcode) = input;
    let invoice = InvoiceBuilder::new(SchemaVariant::Fa3, number)
        .kind(kind.as_str());
    let invoice = match period {
        Some(p) => invoice.corrected_period(p),
        None => invoice,
    }
    .build();

    let data = AdditionalData { reference_number: None, barcode };
    if let Ok(invoice) = invoice {
        let expect_image = data.barcode.as_deref().is_some_and(|b| !b.trim().is_empty());
        if let Ok(blocks) = generate_header(Some(&invoice), Some(&data)) {
            assert!(!blocks.is_empty());
            assert_eq!(blocks.last().is_some_and(|b| b.is_image()), expect_image);
        }
    }
});
