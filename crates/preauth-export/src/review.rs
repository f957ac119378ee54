use std::path::Path;

use preauth_core::models::anomaly::{Anomaly, AnomalyReport};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

const REVIEW_TEMPLATE_NAME: &str = "review.md";
const REVIEW_TEMPLATE: &str = include_str!("../templates/review.md.tera");

#[derive(Debug, Serialize)]
struct ReviewContext {
    total: usize,
    flagged: usize,
    clean: usize,
    issue_counts: Vec<IssueCount>,
    flagged_rows: Vec<FlaggedRow>,
}

#[derive(Debug, Serialize)]
struct IssueCount {
    label: &'static str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FlaggedRow {
    row: usize,
    patient_id: String,
    issues: String,
}

/// Render the manual-review summary for a batch.
///
/// `reports` holds one report per processed record, clean ones included,
/// so the totals cover the whole batch.
pub fn render_review_report(reports: &[AnomalyReport]) -> Result<String, ExportError> {
    let flagged_rows: Vec<FlaggedRow> = reports
        .iter()
        .filter(|r| r.needs_review())
        .map(|r| FlaggedRow {
            row: r.row,
            patient_id: table_cell(&r.patient_id),
            issues: r.summary(),
        })
        .collect();

    let issue_counts = Anomaly::ALL
        .into_iter()
        .map(|anomaly| IssueCount {
            label: anomaly.label(),
            count: reports.iter().filter(|r| r.has(anomaly)).count(),
        })
        .collect();

    let context = ReviewContext {
        total: reports.len(),
        flagged: flagged_rows.len(),
        clean: reports.len() - flagged_rows.len(),
        issue_counts,
        flagged_rows,
    };
    render(REVIEW_TEMPLATE_NAME, REVIEW_TEMPLATE, &context)
}

pub fn write_review_file(path: &Path, reports: &[AnomalyReport]) -> Result<(), ExportError> {
    let rendered = render_review_report(reports)?;
    std::fs::write(path, rendered).map_err(|source| ExportError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote review report");
    Ok(())
}

fn render<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

// Pipes and newlines would break the Markdown table row.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
