//! Recovery recommendation from the recent symptom trend.
//!
//! Each day's five scores are averaged; the mean of the last three daily
//! averages picks one of three tiers. Both thresholds are inclusive on the
//! lower tier: 0.5 is still a strong recovery, 1.5 still moderate.

use serde::Serialize;

use crate::models::{BannerKind, RecoveryTier, SymptomTable, SYMPTOM_COUNT};

/// Number of trailing days that drive the recommendation.
pub const TRAILING_DAYS: usize = 3;

pub const STRONG_THRESHOLD: f64 = 0.5;
pub const MODERATE_THRESHOLD: f64 = 1.5;

impl RecoveryTier {
    pub fn from_score(final_score: f64) -> Self {
        if final_score <= STRONG_THRESHOLD {
            Self::Strong
        } else if final_score <= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Significant
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong recovery",
            Self::Moderate => "Moderate symptoms",
            Self::Significant => "Significant symptoms",
        }
    }

    /// Sentence used on the banner and in the PDF report.
    pub fn sentence(self) -> &'static str {
        match self {
            Self::Strong => "Strong recovery. Gradual return to activities recommended.",
            Self::Moderate => "Moderate symptoms still present. Caution advised.",
            Self::Significant => "Significant symptoms. See a healthcare provider.",
        }
    }

    pub fn banner(self) -> BannerKind {
        match self {
            Self::Strong => BannerKind::Success,
            Self::Moderate => BannerKind::Warning,
            Self::Significant => BannerKind::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tier: RecoveryTier,
    pub label: &'static str,
    pub message: &'static str,
    pub banner: BannerKind,
    pub final_score: f64,
}

impl Recommendation {
    pub fn from_score(final_score: f64) -> Self {
        let tier = RecoveryTier::from_score(final_score);
        Self {
            tier,
            label: tier.label(),
            message: tier.sentence(),
            banner: tier.banner(),
            final_score,
        }
    }
}

/// Mean of the five scores for each day, day 1 first.
pub fn daily_averages(table: &SymptomTable) -> Vec<f64> {
    table
        .records()
        .iter()
        .map(|r| f64::from(r.total()) / SYMPTOM_COUNT as f64)
        .collect()
}

/// Mean of the last three daily averages (fewer if fewer are given).
pub fn final_symptom_score(daily: &[f64]) -> f64 {
    let tail = &daily[daily.len().saturating_sub(TRAILING_DAYS)..];
    if tail.is_empty() {
        return 0.0;
    }
    tail.iter().sum::<f64>() / tail.len() as f64
}

pub fn recommend_from_averages(daily: &[f64]) -> Recommendation {
    Recommendation::from_score(final_symptom_score(daily))
}

pub fn recommend(table: &SymptomTable) -> Recommendation {
    let recommendation = recommend_from_averages(&daily_averages(table));
    tracing::debug!(
        final_score = recommendation.final_score,
        tier = recommendation.tier.as_str(),
        "recommendation derived"
    );
    recommendation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::SymptomForm;
    use crate::models::{SeverityLevel, Symptom};
    use crate::table::build_symptom_table;

    fn with_tail(tail: f64) -> Vec<f64> {
        let mut daily = vec![3.0; 7];
        daily.extend([tail; 3]);
        daily
    }

    #[test]
    fn all_zero_is_strong() {
        let rec = recommend_from_averages(&[0.0; 10]);
        assert_eq!(rec.tier, RecoveryTier::Strong);
        assert_eq!(rec.final_score, 0.0);
    }

    #[test]
    fn all_two_is_significant() {
        assert_eq!(recommend_from_averages(&[2.0; 10]).tier, RecoveryTier::Significant);
    }

    #[test]
    fn half_is_still_strong() {
        assert_eq!(recommend_from_averages(&with_tail(0.5)).tier, RecoveryTier::Strong);
    }

    #[test]
    fn one_and_half_is_still_moderate() {
        assert_eq!(recommend_from_averages(&with_tail(1.5)).tier, RecoveryTier::Moderate);
    }

    #[test]
    fn just_above_thresholds() {
        assert_eq!(RecoveryTier::from_score(0.5000001), RecoveryTier::Moderate);
        assert_eq!(RecoveryTier::from_score(1.5000001), RecoveryTier::Significant);
    }

    #[test]
    fn only_last_three_days_count() {
        // Severe early days do not matter once the tail is clear.
        let rec = recommend_from_averages(&with_tail(0.0));
        assert_eq!(rec.tier, RecoveryTier::Strong);

        let mut daily = vec![0.0; 10];
        daily[9] = 3.0;
        // (0 + 0 + 3) / 3 = 1.0
        let rec = recommend_from_averages(&daily);
        assert!((rec.final_score - 1.0).abs() < 1e-12);
        assert_eq!(rec.tier, RecoveryTier::Moderate);
    }

    #[test]
    fn final_score_of_empty_input_is_zero() {
        assert_eq!(final_symptom_score(&[]), 0.0);
        assert_eq!(final_symptom_score(&[2.0]), 2.0);
    }

    #[test]
    fn daily_average_divides_by_five() {
        let form = SymptomForm::new("")
            .with_level(1, Symptom::Headache, SeverityLevel::Severe)
            .unwrap()
            .with_level(1, Symptom::Mood, SeverityLevel::Mild)
            .unwrap();
        let daily = daily_averages(&build_symptom_table(&form));
        assert_eq!(daily.len(), 10);
        assert!((daily[0] - 0.8).abs() < 1e-12);
        assert!(daily[1..].iter().all(|&d| d == 0.0));
    }

    #[test]
    fn tiers_map_to_wording_and_banner() {
        let cases = [
            (
                RecoveryTier::Strong,
                "Strong recovery. Gradual return to activities recommended.",
                BannerKind::Success,
            ),
            (
                RecoveryTier::Moderate,
                "Moderate symptoms still present. Caution advised.",
                BannerKind::Warning,
            ),
            (
                RecoveryTier::Significant,
                "Significant symptoms. See a healthcare provider.",
                BannerKind::Error,
            ),
        ];
        for (tier, sentence, banner) in cases {
            assert_eq!(tier.sentence(), sentence);
            assert_eq!(tier.banner(), banner);
        }
    }

    #[test]
    fn moderate_table_recommendation() {
        let form = SymptomForm::new("").with_all(SeverityLevel::Mild);
        let rec = recommend(&build_symptom_table(&form));
        assert_eq!(rec.final_score, 1.0);
        assert_eq!(rec.tier, RecoveryTier::Moderate);
        assert_eq!(rec.label, "Moderate symptoms");
    }
}
