use std::fmt;

use serde::{Deserialize, Serialize};

/// A consistency problem in a generated response that needs a human look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anomaly {
    #[serde(rename = "Missing Body_Part")]
    MissingBodyPart,
    #[serde(rename = "Missing Side")]
    MissingSide,
    #[serde(rename = "Surgery flagged without date")]
    SurgeryWithoutDate,
}

impl Anomaly {
    pub const ALL: [Anomaly; 3] = [
        Self::MissingBodyPart,
        Self::MissingSide,
        Self::SurgeryWithoutDate,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MissingBodyPart => "Missing Body_Part",
            Self::MissingSide => "Missing Side",
            Self::SurgeryWithoutDate => "Surgery flagged without date",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Issues found for one record, kept alongside its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Zero-based position of the record in its input batch.
    pub row: usize,
    pub patient_id: String,
    /// In rule-declaration order.
    pub issues: Vec<Anomaly>,
}

impl AnomalyReport {
    pub fn needs_review(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has(&self, anomaly: Anomaly) -> bool {
        self.issues.contains(&anomaly)
    }

    /// Issue labels joined for a single table cell.
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
