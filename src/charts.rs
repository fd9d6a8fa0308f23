//! Chart descriptions handed to the front end for rendering.
//!
//! The renderer is external; these types carry everything it needs
//! (series, markers, colors, shaded bands, reference lines) so two
//! renderers given the same `ChartSpec` draw the same chart.

use serde::Serialize;

use crate::models::{Symptom, SymptomTable};
use crate::simulation::SimulationTrace;

/// Target brain-stress level drawn as a horizontal reference.
pub const SAFE_STRESS_LEVEL: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Cross,
    TriangleUp,
    Square,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub marker: Option<Marker>,
    pub line_style: LineStyle,
    /// `[x, y]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Vertical shaded region between two x values.
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    pub label: String,
    pub x_start: f64,
    pub x_end: f64,
    pub color: &'static str,
    pub alpha: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub label: String,
    pub y: f64,
    pub color: &'static str,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub legend: bool,
    pub series: Vec<Series>,
    pub bands: Vec<Band>,
    pub reference_lines: Vec<ReferenceLine>,
}

fn symptom_style(symptom: Symptom) -> (&'static str, Marker) {
    match symptom {
        Symptom::Headache => ("red", Marker::Circle),
        Symptom::Dizziness => ("blue", Marker::Cross),
        Symptom::Memory => ("green", Marker::TriangleUp),
        Symptom::Mood => ("purple", Marker::Square),
        Symptom::Fatigue => ("orange", Marker::Star),
    }
}

/// Five severity series over days 1..=10.
pub fn symptom_trend_chart(table: &SymptomTable) -> ChartSpec {
    let series = Symptom::ALL
        .iter()
        .map(|&symptom| {
            let (color, marker) = symptom_style(symptom);
            Series {
                label: symptom.column_header().into(),
                color,
                marker: Some(marker),
                line_style: LineStyle::Solid,
                points: table
                    .records()
                    .iter()
                    .map(|r| [f64::from(r.day), f64::from(r.score(symptom))])
                    .collect(),
            }
        })
        .collect();

    ChartSpec {
        title: "Symptom Severity Over Time".into(),
        x_label: "Day".into(),
        y_label: "Severity (0=None to 3=Severe)".into(),
        grid: true,
        legend: true,
        series,
        bands: Vec::new(),
        reference_lines: Vec::new(),
    }
}

/// Hourly brain stress plotted against days since the start of the window.
pub fn brain_stress_chart(trace: &SimulationTrace) -> ChartSpec {
    let points = trace
        .samples
        .iter()
        .map(|s| [s.hour / 24.0, s.brain_stress])
        .collect();

    ChartSpec {
        title: "Modeled Brain Stress Hour-by-Hour After Concussion".into(),
        x_label: "Time (Days)".into(),
        y_label: "Brain Stress (0-1 scale)".into(),
        grid: true,
        legend: true,
        series: vec![Series {
            label: "Modeled Brain Stress (Hourly)".into(),
            color: "black",
            marker: None,
            line_style: LineStyle::Solid,
            points,
        }],
        bands: vec![
            Band {
                label: "Acute Phase (Days 1-3)".into(),
                x_start: 1.0,
                x_end: 3.0,
                color: "red",
                alpha: 0.2,
            },
            Band {
                label: "Recovery Phase (Days 3-10)".into(),
                x_start: 3.0,
                x_end: 10.0,
                color: "orange",
                alpha: 0.2,
            },
        ],
        reference_lines: vec![ReferenceLine {
            label: "Target Safe Stress Level".into(),
            y: SAFE_STRESS_LEVEL,
            color: "green",
            line_style: LineStyle::Dashed,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::SymptomForm;
    use crate::models::SeverityLevel;
    use crate::simulation::{simulate, RecoveryModel};
    use crate::table::build_symptom_table;

    #[test]
    fn symptom_chart_has_one_series_per_symptom() {
        let form = SymptomForm::new("")
            .with_level(3, Symptom::Fatigue, SeverityLevel::Moderate)
            .unwrap();
        let chart = symptom_trend_chart(&build_symptom_table(&form));

        assert_eq!(chart.x_label, "Day");
        assert_eq!(chart.y_label, "Severity (0=None to 3=Severe)");
        assert_eq!(chart.series.len(), 5);

        let fatigue = &chart.series[4];
        assert_eq!(fatigue.label, "Fatigue");
        assert_eq!(fatigue.points.len(), 10);
        assert_eq!(fatigue.points[2], [3.0, 2.0]);
    }

    #[test]
    fn symptom_series_styles_are_distinct() {
        let chart = symptom_trend_chart(&build_symptom_table(&SymptomForm::default()));
        for (i, a) in chart.series.iter().enumerate() {
            for b in &chart.series[i + 1..] {
                assert_ne!(a.color, b.color);
                assert_ne!(a.marker, b.marker);
            }
        }
    }

    #[test]
    fn stress_chart_is_in_days_with_bands_and_target() {
        let chart = brain_stress_chart(&simulate(&RecoveryModel::default()));
        let series = &chart.series[0];
        assert_eq!(series.points.len(), 2400);
        assert_eq!(series.points[0][0], 0.0);
        assert_eq!(series.points[2399][0], 10.0);

        assert_eq!(chart.bands.len(), 2);
        assert_eq!((chart.bands[0].x_start, chart.bands[0].x_end), (1.0, 3.0));
        assert_eq!((chart.bands[1].x_start, chart.bands[1].x_end), (3.0, 10.0));

        let target = &chart.reference_lines[0];
        assert_eq!(target.y, 0.2);
        assert_eq!(target.label, "Target Safe Stress Level");
        assert_eq!(target.line_style, LineStyle::Dashed);
    }

    #[test]
    fn chart_serializes_for_frontend() {
        let chart = brain_stress_chart(&simulate(&RecoveryModel::default()));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["reference_lines"][0]["line_style"], "dashed");
        assert_eq!(json["series"][0]["marker"], serde_json::Value::Null);
    }
}
