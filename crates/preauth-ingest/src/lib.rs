//! preauth-ingest
//!
//! Patient-intake files (CSV, JSON or Excel) into [`IntakeRecord`]s.
//!
//! [`IntakeRecord`]: preauth_core::models::intake::IntakeRecord

pub mod error;
pub mod excel;
pub mod format;
pub mod reader;

pub use format::IntakeFormat;
pub use excel::read_excel;
pub use reader::{read_csv, read_json, read_path};
