//! Record-level and batch evaluation.
//!
//! Each record runs once through body part → side → surgery → findings →
//! assembly → anomaly checks. Records share nothing but the read-only
//! lexicon, so batches are evaluated in parallel and collected back in
//! input order.

use std::sync::Arc;

use preauth_core::models::anomaly::AnomalyReport;
use preauth_core::models::intake::IntakeRecord;
use preauth_core::models::response::PaResponse;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::assemble::{DerivedFields, assemble};
use crate::error::RulesError;
use crate::laterality::LateralityResolver;
use crate::lexicon::Lexicon;
use crate::{anomaly, body_part, findings, surgery};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Fall back to the diagnosis code's last character for laterality
    /// when its fifth character is not a digit. Off by default.
    pub code_suffix_laterality: bool,
}

/// Response and anomaly report for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub response: PaResponse,
    pub anomalies: AnomalyReport,
}

#[derive(Debug)]
pub struct Engine {
    lexicon: Arc<Lexicon>,
    laterality: LateralityResolver,
}

impl Engine {
    pub fn new(lexicon: Arc<Lexicon>, options: EngineOptions) -> Result<Self, RulesError> {
        lexicon.validate()?;
        let laterality = LateralityResolver::new(&lexicon, options.code_suffix_laterality)?;
        Ok(Self { lexicon, laterality })
    }

    /// Engine over [`Lexicon::canonical`] with default options.
    pub fn canonical() -> Result<Self, RulesError> {
        Self::new(Arc::new(Lexicon::canonical()), EngineOptions::default())
    }

    /// Derive every answer for `record`. `row` is its position in the
    /// batch and only identifies the anomaly report.
    pub fn evaluate(&self, row: usize, record: &IntakeRecord) -> Evaluation {
        let lexicon = self.lexicon.as_ref();

        let body_part = body_part::classify(lexicon, record);
        let side = self.laterality.resolve(record, body_part);
        let surgery_type = surgery::classify(lexicon, record);
        let derived = DerivedFields {
            body_part,
            side,
            had_surgery: surgery_type.is_some(),
            surgery_type,
            objective_findings: findings::extract(lexicon, record),
        };

        let response = assemble(record, derived);
        let anomalies = anomaly::detect(row, &response);

        debug!(
            row,
            body_part = ?response.body_part,
            side = ?response.side,
            surgery_type = ?response.surgery_type,
            issues = anomalies.issues.len(),
            "evaluated intake record"
        );

        Evaluation { response, anomalies }
    }

    pub fn evaluate_batch(&self, records: &[IntakeRecord]) -> BatchOutcome {
        let evaluations: Vec<Evaluation> = records
            .par_iter()
            .enumerate()
            .map(|(row, record)| self.evaluate(row, record))
            .collect();

        let outcome = BatchOutcome { evaluations };
        info!(
            records = outcome.len(),
            flagged = outcome.review_queue().count(),
            "generated PA responses"
        );
        outcome
    }
}

/// One [`Evaluation`] per input record, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    evaluations: Vec<Evaluation>,
}

impl BatchOutcome {
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn responses(&self) -> impl Iterator<Item = &PaResponse> {
        self.evaluations.iter().map(|e| &e.response)
    }

    /// One report per record, including records with no issues.
    pub fn anomaly_reports(&self) -> impl Iterator<Item = &AnomalyReport> {
        self.evaluations.iter().map(|e| &e.anomalies)
    }

    /// Only the reports with at least one issue.
    pub fn review_queue(&self) -> impl Iterator<Item = &AnomalyReport> {
        self.anomaly_reports().filter(|r| r.needs_review())
    }

    pub fn into_parts(self) -> (Vec<PaResponse>, Vec<AnomalyReport>) {
        self.evaluations
            .into_iter()
            .map(|e| (e.response, e.anomalies))
            .unzip()
    }
}
