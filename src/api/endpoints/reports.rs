//! Report download endpoints.
//!
//! - `POST /api/reports/csv` — symptom table as CSV
//! - `POST /api/reports/pdf` — one-page PDF report
//!
//! Bytes are only sent once generation has fully succeeded; a failure
//! yields a JSON error and no attachment.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::export::ReportArtifact;
use crate::intake::{SymptomForm, SymptomFormInput};
use crate::tracker;

/// `POST /api/reports/csv`
pub async fn csv(ApiJson(input): ApiJson<SymptomFormInput>) -> Result<Response, ApiError> {
    let form = SymptomForm::try_from(input)?;
    let artifact = tracker::csv_download(&form)?;
    attachment(artifact)
}

/// `POST /api/reports/pdf`
pub async fn pdf(ApiJson(input): ApiJson<SymptomFormInput>) -> Result<Response, ApiError> {
    let form = SymptomForm::try_from(input)?;
    let artifact = tracker::pdf_download(&form)?;
    attachment(artifact)
}

fn attachment(artifact: ReportArtifact) -> Result<Response, ApiError> {
    let disposition = HeaderValue::from_str(&content_disposition(&artifact.filename))
        .map_err(|e| ApiError::Internal(format!("invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(artifact.mime)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// `attachment; filename="..."; filename*=UTF-8''...`
///
/// The quoted form is an ASCII fallback; the RFC 5987 form keeps
/// non-ASCII patient names intact.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut encoded = String::with_capacity(filename.len());
    for byte in filename.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_for_plain_name() {
        assert_eq!(
            content_disposition("Jane Doe_symptom_report.csv"),
            "attachment; filename=\"Jane Doe_symptom_report.csv\"; \
             filename*=UTF-8''Jane%20Doe_symptom_report.csv"
        );
    }

    #[test]
    fn disposition_for_non_ascii_name() {
        let value = content_disposition("José_Concussion_Report.pdf");
        assert!(value.contains("filename=\"Jos__Concussion_Report.pdf\""));
        assert!(value.contains("filename*=UTF-8''Jos%C3%A9_Concussion_Report.pdf"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn disposition_escapes_quotes() {
        let value = content_disposition("a\"b_symptom_report.csv");
        assert!(value.contains("filename=\"a_b_symptom_report.csv\""));
        assert!(value.contains("a%22b"));
    }
}
