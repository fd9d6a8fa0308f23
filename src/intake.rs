//! Daily symptom intake: the typed ten-day form and its selector keys.
//!
//! Each of the 50 selectors is addressed by `"{symptom}_{day}"`
//! (e.g. `headache_1`, `fatigue_10`). Selectors that were never touched
//! read as `None`, the first option of every select box.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{SeverityLevel, Symptom, SYMPTOM_COUNT, TRACKED_DAYS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown selector key: {0}")]
    UnknownKey(String),

    #[error("Day {0} is outside the tracking window 1..=10")]
    DayOutOfRange(u32),

    #[error("Unknown severity level '{value}' for {key}")]
    UnknownLevel { key: String, value: String },
}

// ═══════════════════════════════════════════
// Typed form
// ═══════════════════════════════════════════

/// Immutable snapshot of everything the user has entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomForm {
    patient_name: String,
    levels: [[SeverityLevel; SYMPTOM_COUNT]; TRACKED_DAYS],
}

impl SymptomForm {
    pub fn new(patient_name: impl Into<String>) -> Self {
        Self {
            patient_name: patient_name.into(),
            ..Self::default()
        }
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Builder-style setter; `day` is 1-based.
    pub fn with_level(
        mut self,
        day: u8,
        symptom: Symptom,
        level: SeverityLevel,
    ) -> Result<Self, FormError> {
        let row = day_index(u32::from(day))?;
        self.levels[row][symptom.index()] = level;
        Ok(self)
    }

    /// Same level for every symptom on every day.
    pub fn with_all(mut self, level: SeverityLevel) -> Self {
        self.levels = [[level; SYMPTOM_COUNT]; TRACKED_DAYS];
        self
    }

    pub fn level(&self, day: u8, symptom: Symptom) -> Option<SeverityLevel> {
        let row = day_index(u32::from(day)).ok()?;
        Some(self.levels[row][symptom.index()])
    }

    /// Integer scores per day, column order, day 1 first.
    pub fn scores(&self) -> [[u8; SYMPTOM_COUNT]; TRACKED_DAYS] {
        self.levels.map(|day| day.map(SeverityLevel::score))
    }

    /// Greeting shown once a patient name has been entered.
    pub fn greeting(&self) -> Option<String> {
        if self.patient_name.is_empty() {
            None
        } else {
            Some(format!("Tracking symptoms for: {}", self.patient_name))
        }
    }
}

fn day_index(day: u32) -> Result<usize, FormError> {
    if day == 0 || day as usize > TRACKED_DAYS {
        return Err(FormError::DayOutOfRange(day));
    }
    Ok(day as usize - 1)
}

// ═══════════════════════════════════════════
// Selector keys
// ═══════════════════════════════════════════

pub fn field_key(symptom: Symptom, day: u8) -> String {
    format!("{}_{}", symptom.as_str(), day)
}

/// Parses `"{symptom}_{day}"` back into its parts.
pub fn parse_field_key(key: &str) -> Result<(Symptom, u8), FormError> {
    let (stem, day) = key
        .rsplit_once('_')
        .ok_or_else(|| FormError::UnknownKey(key.into()))?;
    let symptom = Symptom::from_str(stem).map_err(|_| FormError::UnknownKey(key.into()))?;
    let day: u32 = day.parse().map_err(|_| FormError::UnknownKey(key.into()))?;
    let row = day_index(day)?;
    let day = (row + 1) as u8;
    // `mood_03` or `mood_+3` would otherwise alias `mood_3`
    if field_key(symptom, day) != key {
        return Err(FormError::UnknownKey(key.into()));
    }
    Ok((symptom, day))
}

pub fn field_prompt(symptom: Symptom, day: u8) -> String {
    format!("{} Severity (Day {day}):", symptom.column_header())
}

// ═══════════════════════════════════════════
// Wire format
// ═══════════════════════════════════════════

/// Form as submitted by a client: patient name plus selector key → level label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomFormInput {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub selections: BTreeMap<String, String>,
}

impl TryFrom<SymptomFormInput> for SymptomForm {
    type Error = FormError;

    fn try_from(input: SymptomFormInput) -> Result<Self, Self::Error> {
        let mut form = SymptomForm::new(input.patient_name);
        for (key, value) in &input.selections {
            let (symptom, day) = parse_field_key(key)?;
            let level = SeverityLevel::from_str(value).map_err(|_| FormError::UnknownLevel {
                key: key.clone(),
                value: value.clone(),
            })?;
            form = form.with_level(day, symptom, level)?;
        }
        Ok(form)
    }
}

impl From<&SymptomForm> for SymptomFormInput {
    fn from(form: &SymptomForm) -> Self {
        let mut selections = BTreeMap::new();
        for day in 1..=TRACKED_DAYS as u8 {
            for symptom in Symptom::ALL {
                if let Some(level) = form.level(day, *symptom) {
                    selections.insert(field_key(*symptom, day), level.as_str().to_string());
                }
            }
        }
        Self {
            patient_name: form.patient_name.clone(),
            selections,
        }
    }
}

// ═══════════════════════════════════════════
// Schema — static data for rendering the form
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub key: String,
    pub day: u8,
    pub symptom: Symptom,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub days: Vec<u8>,
    pub levels: Vec<&'static str>,
    pub default_level: &'static str,
    pub fields: Vec<FormField>,
}

pub fn form_schema() -> FormSchema {
    let days: Vec<u8> = (1..=TRACKED_DAYS as u8).collect();
    let fields = days
        .iter()
        .flat_map(|&day| {
            Symptom::ALL.iter().map(move |&symptom| FormField {
                key: field_key(symptom, day),
                day,
                symptom,
                prompt: field_prompt(symptom, day),
            })
        })
        .collect();

    FormSchema {
        days,
        levels: SeverityLevel::ALL.iter().map(|l| l.as_str()).collect(),
        default_level: SeverityLevel::default().as_str(),
        fields,
    }
}
