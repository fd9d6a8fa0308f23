//! The whole tracker view, recomputed from one form snapshot.
//!
//! Called again every time the form changes; nothing is cached between
//! calls.

use serde::Serialize;

use crate::charts::{brain_stress_chart, symptom_trend_chart, ChartSpec};
use crate::export::{self, ExportError, ReportArtifact};
use crate::intake::SymptomForm;
use crate::models::SymptomTable;
use crate::recommendation::{self, Recommendation};
use crate::simulation::{simulate, RecoveryModel};
use crate::table::build_symptom_table;

#[derive(Debug, Clone, Serialize)]
pub struct TrackerCharts {
    pub symptom_trends: ChartSpec,
    pub brain_stress: ChartSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadNames {
    pub csv: String,
    pub pdf: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackerView {
    pub patient_name: String,
    pub greeting: Option<String>,
    pub table: SymptomTable,
    pub daily_averages: Vec<f64>,
    pub recommendation: Recommendation,
    pub charts: TrackerCharts,
    pub downloads: DownloadNames,
}

pub fn build_view(form: &SymptomForm, model: &RecoveryModel) -> TrackerView {
    let table = build_symptom_table(form);
    let daily_averages = recommendation::daily_averages(&table);
    let recommendation = recommendation::recommend_from_averages(&daily_averages);
    let trace = simulate(model);

    let charts = TrackerCharts {
        symptom_trends: symptom_trend_chart(&table),
        brain_stress: brain_stress_chart(&trace),
    };

    let name = form.patient_name();
    TrackerView {
        patient_name: name.to_string(),
        greeting: form.greeting(),
        downloads: DownloadNames {
            csv: export::csv_filename(name),
            pdf: export::pdf_filename(name),
        },
        table,
        daily_averages,
        recommendation,
        charts,
    }
}

pub fn csv_download(form: &SymptomForm) -> Result<ReportArtifact, ExportError> {
    export::generate_csv(&build_symptom_table(form), form.patient_name())
}

pub fn pdf_download(form: &SymptomForm) -> Result<ReportArtifact, ExportError> {
    let table = build_symptom_table(form);
    let recommendation = recommendation::recommend(&table);
    export::generate_pdf(&table, &recommendation, form.patient_name())
}
