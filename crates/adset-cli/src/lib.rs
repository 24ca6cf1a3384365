//! CLI library components for the adset sales report.

pub mod logging;
pub mod pipeline;
pub mod report;
