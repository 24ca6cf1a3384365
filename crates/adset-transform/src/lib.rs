//! Normalization and aggregation of lead records into adset summaries.
//!
//! # Example
//!
//! ```
//! use adset_model::Record;
//! use adset_transform::aggregate;
//!
//! let records: Vec<Record> = vec![
//!     [("adset_name", "X"), ("Venda_planejamento", "R$100,00")].into_iter().collect(),
//!     [("adset_name", "X"), ("Venda_planejamento", "")].into_iter().collect(),
//! ];
//! let report = aggregate(&records);
//! assert_eq!(report["X"].total_sales, 1);
//! assert_eq!(report["X"].conversion_rate, 50.0);
//! ```

pub mod aggregate;
pub mod normalization;

pub use aggregate::aggregate;
pub use normalization::parse_amount;
