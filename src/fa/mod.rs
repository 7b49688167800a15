//! Reading header fields from FA XML documents.
//!
//! Only the elements the header needs are extracted:
//!
//! | Element | Field |
//! |---------|-------|
//! | `Naglowek/KodFormularza@kodSystemowy` | schema variant |
//! | `Fa/RodzajFaktury` | [`InvoiceKind`](crate::core::InvoiceKind) |
//! | `Fa/P_2` | invoice number |
//! | `Fa/OkresFaKorygowanej` | corrected period (FA(2), FA(3)) |
//!
//! The document is not validated against the schema.

mod parse;

pub use parse::from_fa_xml;
