//! Report rendering for analysis results

pub mod formatter;

pub use formatter::{ReportContext, ReportGenerator};
