//! Core invoice types and errors.
//!
//! Only the header-relevant part of the FA schema is modelled here; parsing
//! and schema validation of full documents happen upstream.

mod builder;
mod error;
mod kind;
mod types;

pub use builder::*;
pub use error::*;
pub use kind::*;
pub use types::*;
