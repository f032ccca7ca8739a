//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod conversion_log_repo;
pub mod unit_repo;

pub use conversion_log_repo::ConversionLogRepo;
pub use unit_repo::UnitRepo;
