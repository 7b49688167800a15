//! Header block of the printed invoice.
//!
//! The header is an ordered list of [`Content`] blocks:
//!
//! 1. invoice-type title (always present, always first),
//! 2. `Numer faktury: …` (always present),
//! 3. `Numer KSeF: …` when a reference number is supplied,
//! 4. `Okres korygowany: …` for collective corrections,
//! 5. the barcode image, last, when a non-blank payload is supplied.
//!
//! # Example
//!
//! ```
//! use ksef_naglowek::core::*;
//! use ksef_naglowek::header::HeaderGenerator;
//!
//! let invoice = InvoiceBuilder::new(SchemaVariant::Fa3, "FV/2025/01").build().unwrap();
//! let generator = HeaderGenerator::new(|payload: &str| -> Result<String, NaglowekError> {
//!     Ok(format!("data:image/png;base64,{payload}"))
//! });
//!
//! let blocks = generator.generate(Some(&invoice), None).unwrap();
//! assert_eq!(blocks[0].as_text(), Some("Faktura"));
//! assert_eq!(blocks[1].as_text(), Some("Numer faktury: FV/2025/01"));
//! ```

mod content;
mod labels;

#[cfg(feature = "json")]
pub use content::to_json;
pub use content::{Content, ImageBlock, TextBlock, TextStyle};
pub use labels::{
    COLLECTIVE_CORRECTION_LABEL, DEFAULT_LABEL, LabelTable, PLACEHOLDER_LABEL,
    is_collective_correction,
};

use crate::barcode::{BarcodeEncoder, barcode_payload};
use crate::core::{AdditionalData, Invoice, NaglowekError};

pub const NUMBER_LABEL: &str = "Numer faktury:";
pub const REFERENCE_NUMBER_LABEL: &str = "Numer KSeF:";
pub const CORRECTED_PERIOD_LABEL: &str = "Okres korygowany:";

/// Builds header blocks using a label table and a barcode encoder.
#[derive(Debug, Clone)]
pub struct HeaderGenerator<E> {
    labels: LabelTable,
    encoder: E,
}

impl<E: BarcodeEncoder> HeaderGenerator<E> {
    /// Generator with the built-in labels and the given barcode encoder.
    pub fn new(encoder: E) -> Self {
        Self {
            labels: LabelTable::default(),
            encoder,
        }
    }

    /// Replace the label table.
    pub fn labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    /// Label table in use.
    pub fn label_table(&self) -> &LabelTable {
        &self.labels
    }

    /// Generate the header blocks.
    ///
    /// Missing invoice or additional data never fails; errors come only from
    /// the barcode encoder.
    pub fn generate(
        &self,
        invoice: Option<&Invoice>,
        additional: Option<&AdditionalData>,
    ) -> Result<Vec<Content>, NaglowekError> {
        let mut blocks = Vec::with_capacity(5);

        blocks.push(Content::text(
            self.labels.resolve_invoice(invoice),
            TextStyle::Title,
        ));
        blocks.push(labelled(NUMBER_LABEL, invoice.map_or("", Invoice::number)));

        if let Some(number) = additional
            .and_then(|data| data.reference_number.as_deref())
            .filter(|n| !n.trim().is_empty())
        {
            blocks.push(labelled(REFERENCE_NUMBER_LABEL, number));
        }

        if let Some(period) = invoice
            .filter(|inv| is_collective_correction(inv.kind(), inv.corrected_period()))
            .and_then(Invoice::corrected_period)
        {
            blocks.push(labelled(CORRECTED_PERIOD_LABEL, period));
        }

        match barcode_payload(additional) {
            Some(payload) => {
                log::debug!("attaching barcode for payload {payload:?}");
                let image = self.encoder.encode(payload)?;
                blocks.push(Content::image(image, self.encoder.width()));
            }
            None => log::debug!("no barcode payload, header without image"),
        }

        Ok(blocks)
    }
}

#[cfg(feature = "barcode")]
impl Default for HeaderGenerator<crate::barcode::Code128Png> {
    fn default() -> Self {
        Self::new(crate::barcode::Code128Png::default())
    }
}

/// Generate the header with the built-in labels and the Code 128 encoder.
#[cfg(feature = "barcode")]
pub fn generate_header(
    invoice: Option<&Invoice>,
    additional: Option<&AdditionalData>,
) -> Result<Vec<Content>, NaglowekError> {
    HeaderGenerator::<crate::barcode::Code128Png>::default().generate(invoice, additional)
}

fn labelled(label: &str, value: &str) -> Content {
    let value = value.trim();
    let text = if value.is_empty() {
        label.to_string()
    } else {
        format!("{label} {value}")
    };
    Content::text(text, TextStyle::HeaderContent)
}
