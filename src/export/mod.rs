//! Report export: CSV of the symptom table and a one-page PDF summary.
//!
//! Both exporters are one-shot and side-effect free; the bytes are only
//! handed out once generation has fully succeeded.

pub mod csv_report;
pub mod pdf_report;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ModelError;

pub use csv_report::{generate_csv, parse_csv, CSV_HEADER};
pub use pdf_report::{generate_pdf, report_lines, LineKind, ReportLine};

pub const CSV_MIME: &str = "text/csv";
pub const PDF_MIME: &str = "application/pdf";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed symptom report: {0}")]
    Parse(String),

    #[error(transparent)]
    Table(#[from] ModelError),
}

/// A generated file ready for download or saving.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// An empty name yields `_symptom_report.csv`.
pub fn csv_filename(patient_name: &str) -> String {
    format!("{patient_name}_symptom_report.csv")
}

pub fn pdf_filename(patient_name: &str) -> String {
    format!("{patient_name}_Concussion_Report.pdf")
}

/// Saves an artifact into `dir`, creating it if needed.
///
/// Path separators in the filename are replaced so a patient name can
/// never escape `dir`.
pub fn write_artifact(dir: &Path, artifact: &ReportArtifact) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let safe_name: String = artifact
        .filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let path = dir.join(safe_name);
    std::fs::write(&path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_follow_convention() {
        assert_eq!(csv_filename("Jane Doe"), "Jane Doe_symptom_report.csv");
        assert_eq!(pdf_filename("Jane Doe"), "Jane Doe_Concussion_Report.pdf");
    }

    #[test]
    fn empty_name_gives_empty_prefix() {
        assert_eq!(csv_filename(""), "_symptom_report.csv");
        assert_eq!(pdf_filename(""), "_Concussion_Report.pdf");
    }

    #[test]
    fn write_artifact_saves_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let artifact = ReportArtifact {
            filename: csv_filename("Jane Doe"),
            mime: CSV_MIME,
            bytes: b"Day\n1\n".to_vec(),
        };
        let path = write_artifact(&tmp.path().join("exports"), &artifact).unwrap();
        assert!(path.ends_with("Jane Doe_symptom_report.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), b"Day\n1\n");
    }

    #[test]
    fn write_artifact_keeps_file_inside_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let artifact = ReportArtifact {
            filename: pdf_filename("../x"),
            mime: PDF_MIME,
            bytes: vec![1, 2, 3],
        };
        let path = write_artifact(tmp.path(), &artifact).unwrap();
        assert_eq!(path.parent().unwrap(), tmp.path());
        assert_eq!(path.file_name().unwrap(), ".._x_Concussion_Report.pdf");
    }
}
