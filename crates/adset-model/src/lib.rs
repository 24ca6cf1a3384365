//! Data model for adset sales reporting.
//!
//! - [`Record`]: one row of the lead export
//! - [`LogicalField`] / [`AliasList`]: accepted column names per field
//! - [`AdsetSummary`] / [`AdsetReport`]: aggregation output

pub mod fields;
pub mod record;
pub mod summary;

pub use fields::{AliasList, LogicalField, SaleCategory, resolve};
pub use record::Record;
pub use summary::{AdsetReport, AdsetSummary, CategoryAggregate, CategoryBreakdown};
