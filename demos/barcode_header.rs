use ksef_naglowek::barcode::Code128Png;
use ksef_naglowek::core::*;
use ksef_naglowek::header::{HeaderGenerator, generate_header};

fn main() {
    let invoice = InvoiceBuilder::new(SchemaVariant::Fa3, "FV/2025/01")
        .build()
        .expect("valid invoice");
    let data = AdditionalData::new()
        .reference_number("5265877635-20250826-0100001AF629-AF")
        .barcode("5265877635-20250826-0100001AF629-AF");

    // ── 1. Default encoder ────────────────────────────────────────────
    match generate_header(Some(&invoice), Some(&data)) {
        Ok(blocks) => {
            for block in &blocks {
                if let Some(text) = block.as_text() {
                    println!("  {text}");
                } else if let Some(image) = block.as_image() {
                    println!("  [barcode, {} chars of data URI]", image.len());
                }
            }
        }
        Err(e) => println!("  Header failed: {e}"),
    }

    // ── 2. Taller barcode ─────────────────────────────────────────────
    let generator = HeaderGenerator::new(Code128Png::new().with_height(100).with_width(240));
    match generator.generate(Some(&invoice), Some(&data)) {
        Ok(blocks) => println!("\n  {} blocks with a 100px barcode", blocks.len()),
        Err(e) => println!("  Header failed: {e}"),
    }

    // ── 3. Payload the encoder cannot handle ──────────────────────────
    let bad = AdditionalData::new().barcode("zażółć gęślą jaźń");
    if let Err(e) = generate_header(Some(&invoice), Some(&bad)) {
        println!("\n  Expected error: {e}");
    }
}
