use serde::{Deserialize, Serialize};

use super::enums::{SeverityLevel, Symptom};
use super::ModelError;

/// Number of days in the tracking window.
pub const TRACKED_DAYS: usize = 10;

/// Number of symptoms scored per day.
pub const SYMPTOM_COUNT: usize = 5;

/// One day's scores, 0 (None) to 3 (Severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub day: u8,
    pub headache: u8,
    pub dizziness: u8,
    pub memory: u8,
    pub mood: u8,
    pub fatigue: u8,
}

impl SymptomRecord {
    pub fn from_scores(day: u8, scores: [u8; SYMPTOM_COUNT]) -> Self {
        let [headache, dizziness, memory, mood, fatigue] = scores;
        Self {
            day,
            headache,
            dizziness,
            memory,
            mood,
            fatigue,
        }
    }

    pub fn score(&self, symptom: Symptom) -> u8 {
        match symptom {
            Symptom::Headache => self.headache,
            Symptom::Dizziness => self.dizziness,
            Symptom::Memory => self.memory,
            Symptom::Mood => self.mood,
            Symptom::Fatigue => self.fatigue,
        }
    }

    /// Scores in column order.
    pub fn scores(&self) -> [u8; SYMPTOM_COUNT] {
        [
            self.headache,
            self.dizziness,
            self.memory,
            self.mood,
            self.fatigue,
        ]
    }

    pub fn total(&self) -> u32 {
        self.scores().iter().map(|&s| u32::from(s)).sum()
    }
}

/// The ten daily records, ordered by day 1..=10.
///
/// Only constructed through [`crate::table::build_symptom_table`] or
/// [`SymptomTable::from_records`], both of which uphold the row count,
/// ordering and score range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SymptomRecord>", into = "Vec<SymptomRecord>")]
pub struct SymptomTable {
    records: Vec<SymptomRecord>,
}

impl SymptomTable {
    /// Validates and wraps externally supplied records (e.g. a parsed CSV).
    pub fn from_records(records: Vec<SymptomRecord>) -> Result<Self, ModelError> {
        if records.len() != TRACKED_DAYS {
            return Err(ModelError::WrongDayCount {
                expected: TRACKED_DAYS,
                actual: records.len(),
            });
        }

        for (position, record) in records.iter().enumerate() {
            let expected = (position + 1) as u8;
            if record.day != expected {
                return Err(ModelError::DayOutOfOrder {
                    position,
                    day: record.day,
                    expected,
                });
            }
            for symptom in Symptom::ALL {
                let score = record.score(*symptom);
                if SeverityLevel::from_score(score).is_none() {
                    return Err(ModelError::ScoreOutOfRange {
                        day: record.day,
                        symptom: symptom.column_header().into(),
                        score,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// Caller guarantees the invariants (used by the table builder).
    pub(crate) fn from_validated(records: Vec<SymptomRecord>) -> Self {
        debug_assert_eq!(records.len(), TRACKED_DAYS);
        Self { records }
    }

    pub fn records(&self) -> &[SymptomRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One symptom's scores across all days, in day order.
    pub fn series(&self, symptom: Symptom) -> Vec<u8> {
        self.records.iter().map(|r| r.score(symptom)).collect()
    }
}

impl TryFrom<Vec<SymptomRecord>> for SymptomTable {
    type Error = ModelError;

    fn try_from(records: Vec<SymptomRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<SymptomTable> for Vec<SymptomRecord> {
    fn from(table: SymptomTable) -> Self {
        table.records
    }
}
