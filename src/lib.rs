//! # ksef-naglowek
//!
//! Header block generation for Polish structured e-invoices (schema "FA",
//! as exchanged through KSeF, the Krajowy System e-Faktur).
//!
//! The header is produced as an ordered list of layout primitives
//! ([`header::Content`]) for an external document renderer: the
//! invoice-type title, the invoice number, the KSeF reference number and an
//! optional barcode image.
//!
//! Generation never fails because of missing or unexpected invoice data.
//! Unknown invoice kinds render as `???`, a missing invoice renders as a
//! generic `Faktura` header.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "barcode")] {
//! use ksef_naglowek::core::*;
//! use ksef_naglowek::header::generate_header;
//!
//! let invoice = InvoiceBuilder::new(SchemaVariant::Fa3, "FKZ/2025/05")
//!     .kind(InvoiceKind::Kor)
//!     .corrected_period("2025-01")
//!     .build()
//!     .unwrap();
//! let additional = AdditionalData::new().reference_number("KSEF123").barcode("ABC123");
//!
//! let blocks = generate_header(Some(&invoice), Some(&additional)).unwrap();
//! assert_eq!(blocks[0].as_text(), Some("Faktura korygująca zbiorcza"));
//! assert!(blocks.last().unwrap().as_image().unwrap().starts_with("data:image/png"));
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `barcode` (default) | Code 128 PNG encoder and [`header::generate_header`] |
//! | `xml` | Reading header fields from FA XML |
//! | `json` | JSON export of content blocks |
//! | `all` | Everything |

pub mod barcode;
pub mod core;
pub mod header;

#[cfg(feature = "xml")]
pub mod fa;

// Re-export core types at crate root for convenience
pub use crate::core::*;
