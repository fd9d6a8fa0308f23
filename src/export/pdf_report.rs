use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde::Serialize;

use crate::models::{Symptom, SymptomRecord, SymptomTable};
use crate::recommendation::Recommendation;

use super::{pdf_filename, ExportError, ReportArtifact, PDF_MIME};

pub const REPORT_TITLE: &str = "Concussion Recovery Report";
const SEPARATOR: &str = "---------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Heading,
    Body,
}

/// One line of the report, with the vertical gap (mm) left above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
    pub gap_before: f32,
}

impl ReportLine {
    fn new(kind: LineKind, text: impl Into<String>, gap_before: f32) -> Self {
        Self {
            kind,
            text: text.into(),
            gap_before,
        }
    }
}

/// `Day {n}: Headache: {h}, Dizziness: {d}, Memory: {m}, Mood: {mo}, Fatigue: {f}`
pub fn day_line(record: &SymptomRecord) -> String {
    let scores: Vec<String> = Symptom::ALL
        .iter()
        .map(|s| format!("{}: {}", s.report_label(), record.score(*s)))
        .collect();
    format!("Day {}: {}", record.day, scores.join(", "))
}

/// The full text content of the report, top to bottom.
pub fn report_lines(
    table: &SymptomTable,
    recommendation: &Recommendation,
    patient_name: &str,
) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new(LineKind::Title, REPORT_TITLE, 0.0),
        ReportLine::new(LineKind::Body, format!("Patient Name: {patient_name}"), 8.0),
        ReportLine::new(LineKind::Body, SEPARATOR, 0.0),
        ReportLine::new(LineKind::Heading, "Symptom Scores (0=None, 3=Severe):", 4.0),
    ];

    let mut gap = 3.0;
    for record in table.records() {
        lines.push(ReportLine::new(LineKind::Body, day_line(record), gap));
        gap = 0.0;
    }

    lines.push(ReportLine::new(LineKind::Heading, "Recovery Recommendation:", 8.0));
    lines.push(ReportLine::new(LineKind::Body, recommendation.message, 0.0));
    lines
}

/// Builtin Helvetica only covers printable ASCII reliably; anything else
/// is drawn as `?` rather than as mis-encoded bytes.
fn builtin_font_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' || c.is_ascii_graphic() { c } else { '?' })
        .collect()
}

/// Renders the lines onto a single A4 page.
pub fn render_pdf(lines: &[ReportLine]) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(280.0);
    for line in lines {
        y -= Mm(line.gap_before);
        let text = builtin_font_text(&line.text);
        match line.kind {
            LineKind::Title => {
                layer.use_text(text.as_str(), 14.0, Mm(20.0), y, &bold);
                y -= Mm(8.0);
            }
            LineKind::Heading => {
                layer.use_text(text.as_str(), 12.0, Mm(20.0), y, &bold);
                y -= Mm(7.0);
            }
            LineKind::Body => {
                layer.use_text(text.as_str(), 11.0, Mm(20.0), y, &font);
                y -= Mm(6.5);
            }
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// PDF download for the full report.
pub fn generate_pdf(
    table: &SymptomTable,
    recommendation: &Recommendation,
    patient_name: &str,
) -> Result<ReportArtifact, ExportError> {
    let lines = report_lines(table, recommendation, patient_name);
    let bytes = render_pdf(&lines)?;
    tracing::debug!(bytes = bytes.len(), lines = lines.len(), "PDF report rendered");
    Ok(ReportArtifact {
        filename: pdf_filename(patient_name),
        mime: PDF_MIME,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::SymptomForm;
    use crate::models::SeverityLevel;
    use crate::recommendation::recommend;
    use crate::table::build_symptom_table;

    fn texts(lines: &[ReportLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn day_line_format() {
        let record = SymptomRecord::from_scores(3, [1, 2, 0, 3, 1]);
        assert_eq!(
            day_line(&record),
            "Day 3: Headache: 1, Dizziness: 2, Memory: 0, Mood: 3, Fatigue: 1"
        );
    }

    #[test]
    fn lines_in_report_order() {
        let table = build_symptom_table(&SymptomForm::new("Jane Doe"));
        let rec = recommend(&table);
        let lines = report_lines(&table, &rec, "Jane Doe");
        let text = texts(&lines);

        assert_eq!(lines.len(), 16);
        assert_eq!(text[0], "Concussion Recovery Report");
        assert_eq!(lines[0].kind, LineKind::Title);
        assert_eq!(text[1], "Patient Name: Jane Doe");
        assert!(text[2].chars().all(|c| c == '-'));
        assert_eq!(text[3], "Symptom Scores (0=None, 3=Severe):");
        assert_eq!(
            text[4],
            "Day 1: Headache: 0, Dizziness: 0, Memory: 0, Mood: 0, Fatigue: 0"
        );
        assert!(text[13].starts_with("Day 10:"));
        assert_eq!(text[14], "Recovery Recommendation:");
        assert_eq!(
            text[15],
            "Strong recovery. Gradual return to activities recommended."
        );
    }

    #[test]
    fn significant_sentence_in_report() {
        let form = SymptomForm::new("").with_all(SeverityLevel::Severe);
        let table = build_symptom_table(&form);
        let lines = report_lines(&table, &recommend(&table), "");
        assert_eq!(lines[1].text, "Patient Name: ");
        assert_eq!(
            lines.last().unwrap().text,
            "Significant symptoms. See a healthcare provider."
        );
    }

    #[test]
    fn report_lines_are_idempotent() {
        let form = SymptomForm::new("Jane Doe")
            .with_level(9, Symptom::Mood, SeverityLevel::Moderate)
            .unwrap();
        let table = build_symptom_table(&form);
        let rec = recommend(&table);
        assert_eq!(
            report_lines(&table, &rec, "Jane Doe"),
            report_lines(&table, &rec, "Jane Doe")
        );
    }

    #[test]
    fn pdf_bytes_are_a_pdf() {
        let table = build_symptom_table(&SymptomForm::new("Jane Doe"));
        let artifact = generate_pdf(&table, &recommend(&table), "Jane Doe").unwrap();
        assert_eq!(artifact.filename, "Jane Doe_Concussion_Report.pdf");
        assert_eq!(artifact.mime, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn non_ascii_name_is_drawn_with_placeholder() {
        assert_eq!(builtin_font_text("Patient Name: José Núñez"), "Patient Name: Jos? N??ez");
        assert_eq!(builtin_font_text("Patient Name: Jane Doe"), "Patient Name: Jane Doe");

        let table = build_symptom_table(&SymptomForm::new("José"));
        let rec = recommend(&table);
        assert_eq!(report_lines(&table, &rec, "José")[1].text, "Patient Name: José");
        let artifact = generate_pdf(&table, &rec, "José").unwrap();
        assert_eq!(artifact.filename, "José_Concussion_Report.pdf");
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }
}
