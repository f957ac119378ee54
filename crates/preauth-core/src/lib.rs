//! preauth-core
//!
//! Pure domain types for prior-authorization answer generation: the intake
//! record shape, the answer labels, the response record and the anomaly
//! report. No I/O; this is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
