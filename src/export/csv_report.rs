use crate::models::{Symptom, SymptomRecord, SymptomTable, SYMPTOM_COUNT};

use super::{csv_filename, ExportError, ReportArtifact, CSV_MIME};

/// Header row, strictly in table column order.
pub const CSV_HEADER: [&str; 1 + SYMPTOM_COUNT] = [
    "Day",
    "Headache",
    "Dizziness/Vertigo",
    "Memory Problems",
    "Mood Changes",
    "Fatigue",
];

pub fn write_csv(table: &SymptomTable) -> Result<Vec<u8>, ExportError> {
    let mut wtr = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for record in table.records() {
        let mut row = Vec::with_capacity(1 + SYMPTOM_COUNT);
        row.push(record.day.to_string());
        row.extend(record.scores().iter().map(u8::to_string));
        wtr.write_record(&row)?;
    }

    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// CSV download for the symptom table.
pub fn generate_csv(table: &SymptomTable, patient_name: &str) -> Result<ReportArtifact, ExportError> {
    let bytes = write_csv(table)?;
    Ok(ReportArtifact {
        filename: csv_filename(patient_name),
        mime: CSV_MIME,
        bytes,
    })
}

/// Reads an exported CSV back into a validated table.
pub fn parse_csv(bytes: &[u8]) -> Result<SymptomTable, ExportError> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(ExportError::Parse(format!(
            "unexpected header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut records = Vec::new();
    for (line, row) in rdr.records().enumerate() {
        let row = row?;
        let field = |i: usize| -> Result<u8, ExportError> {
            let raw = row.get(i).unwrap_or_default();
            raw.trim().parse::<u8>().map_err(|_| {
                ExportError::Parse(format!(
                    "row {}: column '{}' is not a score: '{raw}'",
                    line + 1,
                    CSV_HEADER[i]
                ))
            })
        };

        let day = field(0)?;
        let mut scores = [0u8; SYMPTOM_COUNT];
        for symptom in Symptom::ALL {
            let i = symptom.index();
            scores[i] = field(i + 1)?;
        }
        records.push(SymptomRecord::from_scores(day, scores));
    }

    Ok(SymptomTable::from_records(records)?)
}
