use thiserror::Error;

/// Errors that can occur while building invoices or rendering the header.
///
/// Missing or unrecognized invoice data never produces an error; the header
/// degrades to default labels instead. Only collaborators (the barcode
/// encoder, the XML reader, JSON export) and the builder report failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NaglowekError {
    /// The barcode encoder rejected the payload or failed to produce an image.
    #[error("barcode error: {0}")]
    Barcode(String),

    /// Builder encountered an invalid combination of fields.
    #[error("builder error: {0}")]
    Builder(String),

    /// FA XML could not be read.
    #[error("XML error: {0}")]
    Xml(String),

    /// Content blocks could not be serialized.
    #[error("JSON error: {0}")]
    Json(String),
}
