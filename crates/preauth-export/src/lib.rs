//! preauth-export
//!
//! Response and anomaly CSVs, plus the Markdown review report.

pub mod csv;
pub mod error;
pub mod review;
