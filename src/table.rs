//! Builds the 10×6 symptom table (Day + five scores) from a form snapshot.

use crate::intake::SymptomForm;
use crate::models::{SymptomRecord, SymptomTable};

pub fn build_symptom_table(form: &SymptomForm) -> SymptomTable {
    let records = form
        .scores()
        .into_iter()
        .enumerate()
        .map(|(i, scores)| SymptomRecord::from_scores((i + 1) as u8, scores))
        .collect();
    SymptomTable::from_validated(records)
}
