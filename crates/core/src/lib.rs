//! Pure domain logic for the unit-conversion service.
//!
//! No I/O lives here: slug parsing, locale candidate lists, the numeric
//! conversion engine with its measurement tables, and recommendation
//! pair generation. Data access belongs to `unitconver-db`, HTTP to
//! `unitconver-api`.

pub mod convert;
pub mod error;
pub mod locale;
pub mod recommend;
pub mod slug;
pub mod types;
pub mod units;

pub use error::CoreError;
