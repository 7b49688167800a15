//! Barcode inclusion and encoding.
//!
//! The header only decides *whether* a barcode is drawn and *what* it
//! encodes. Turning the payload into pixels is the job of a
//! [`BarcodeEncoder`]; with the `barcode` feature the crate ships
//! [`Code128Png`], which renders a Code 128 symbol to an inline PNG.

#[cfg(feature = "barcode")]
mod code128;

#[cfg(feature = "barcode")]
pub use code128::Code128Png;

use crate::core::{AdditionalData, NaglowekError};

/// Prefix of every inline PNG image reference.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Turns a barcode payload into an inline image reference
/// (e.g. `data:image/png;base64,...`).
pub trait BarcodeEncoder {
    fn encode(&self, payload: &str) -> Result<String, NaglowekError>;

    /// Width of the rendered image block in points, if the encoder has a
    /// preferred size.
    fn width(&self) -> Option<u32> {
        None
    }
}

impl<F> BarcodeEncoder for F
where
    F: Fn(&str) -> Result<String, NaglowekError>,
{
    fn encode(&self, payload: &str) -> Result<String, NaglowekError> {
        self(payload)
    }
}

/// Payload to encode, if a barcode should be drawn at all.
///
/// Absent, empty and whitespace-only payloads yield `None`. The returned
/// payload is trimmed.
pub fn barcode_payload(additional: Option<&AdditionalData>) -> Option<&str> {
    additional
        .and_then(|data| data.barcode.as_deref())
        .map(str::trim)
        .filter(|payload| !payload.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_barcode(payload: Option<&str>) -> AdditionalData {
        AdditionalData {
            reference_number: Some("KSEF123".into()),
            barcode: payload.map(str::to_string),
        }
    }

    #[test]
    fn blank_payloads_are_absent() {
        assert_eq!(barcode_payload(None), None);
        for payload in [None, Some(""), Some("   "), Some("\t\n")] {
            let data = with_barcode(payload);
            assert_eq!(barcode_payload(Some(&data)), None, "{payload:?}");
        }
    }

    #[test]
    fn payload_is_trimmed() {
        let data = with_barcode(Some("  ABC123 "));
        assert_eq!(barcode_payload(Some(&data)), Some("ABC123"));
    }

    #[test]
    fn closures_are_encoders() {
        let encoder = |payload: &str| -> Result<String, NaglowekError> {
            Ok(format!("{PNG_DATA_URI_PREFIX}{payload}"))
        };
        assert_eq!(encoder.encode("X").unwrap(), "data:image/png;base64,X");
        assert_eq!(BarcodeEncoder::width(&encoder), None);
    }
}
