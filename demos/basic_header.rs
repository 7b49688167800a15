use ksef_naglowek::core::*;
use ksef_naglowek::header::{Content, HeaderGenerator, LabelTable};

fn print(title: &str, blocks: &[Content]) {
    println!("=== {title} ===");
    for block in blocks {
        match block {
            Content::Text(t) => println!("  {}", t.text),
            Content::Image(i) => println!("  [image, {} bytes]", i.image.len()),
        }
    }
    println!();
}

fn main() -> Result<(), NaglowekError> {
    // Encoder stand-in: no barcode feature needed for this demo
    let generator = HeaderGenerator::new(|payload: &str| -> Result<String, NaglowekError> {
        Ok(format!("data:image/png;base64,{payload}"))
    })
    .labels(LabelTable::default().with_label("VAT_MARZA", "Faktura VAT marża"));

    let basic = InvoiceBuilder::new(SchemaVariant::Fa3, "FV/2025/01").build()?;
    print("Basic invoice", &generator.generate(Some(&basic), None)?);

    let collective = InvoiceBuilder::new(SchemaVariant::Fa3, "FKZ/2025/05")
        .kind(InvoiceKind::Kor)
        .corrected_period("2025-01")
        .build()?;
    print("Collective correction", &generator.generate(Some(&collective), None)?);

    let unknown = InvoiceBuilder::new(SchemaVariant::Fa1, "FUNK/2025/99")
        .kind("UNKNOWN")
        .build()?;
    print("Unknown kind", &generator.generate(Some(&unknown), None)?);

    let custom = InvoiceBuilder::new(SchemaVariant::Fa2, "FM/2025/07")
        .kind("VAT_MARZA")
        .build()?;
    print("Configured label", &generator.generate(Some(&custom), None)?);

    print("Preview (no invoice)", &generator.generate(None, None)?);

    Ok(())
}
