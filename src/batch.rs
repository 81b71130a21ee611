//! Batch scoring of an uploaded CSV: all rows or none.

use itertools::Itertools;

use crate::model::{EfficiencyModel, FEATURE_NAMES};
use crate::prelude::*;

pub const PREDICTION_COLUMN: &str = "Predicted_Efficiency (%)";

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("the file is missing the required columns: {}", .0.iter().join(", "))]
    MissingColumns(Vec<String>),

    #[error("failed to parse the file: {0}")]
    Parse(String),

    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// The uploaded table with the appended prediction column.
/// Scores are kept already rounded to two decimal places.
#[derive(Debug)]
pub struct ScoredBatch {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    scores: Vec<f64>,
}

impl ScoredBatch {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .map(String::as_str)
            .chain([PREDICTION_COLUMN])
    }

    pub fn rows(&self) -> impl Iterator<Item = (&[String], f64)> {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .zip(self.scores.iter().copied())
    }

    /// Serialises the augmented table back to CSV for download.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record(self.headers())?;
            for (row, score) in self.rows() {
                let mut record = row.to_vec();
                record.push(format!("{score:.2}"));
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
        Ok(buffer)
    }
}

/// Verifies the header contains every schema column, then scores every row.
/// Any malformed row fails the whole batch, nothing is partially scored.
pub fn score_csv(model: &EfficiencyModel, bytes: &[u8]) -> StdResult<ScoredBatch, BatchError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|error| BatchError::Parse(error.to_string()))?
        .iter()
        .map(ToString::to_string)
        .collect_vec();

    let indexes: AHashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| (header.as_str(), index))
        .collect();
    let missing = FEATURE_NAMES
        .iter()
        .filter(|&&name| !indexes.contains_key(name))
        .map(ToString::to_string)
        .collect_vec();
    if !missing.is_empty() {
        return Err(BatchError::MissingColumns(missing));
    }
    let feature_indexes: Vec<usize> = FEATURE_NAMES.iter().map(|&name| indexes[name]).collect();

    let mut rows = Vec::new();
    let mut scores = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|error| BatchError::Parse(error.to_string()))?;
        let mut features: [f64; 7] = [0.0; 7];
        for (feature, &index) in features.iter_mut().zip(&feature_indexes) {
            let value = record.get(index).unwrap_or_default().trim();
            *feature = value.parse().map_err(|_| {
                BatchError::Parse(format!("row {}: `{value}` is not a number", line + 1))
            })?;
        }
        if features.iter().any(|feature| !feature.is_finite()) {
            return Err(BatchError::Prediction(format!(
                "row {}: non-finite feature value",
                line + 1,
            )));
        }
        let score = model.predict(&features);
        if !score.is_finite() {
            return Err(BatchError::Prediction(format!(
                "row {}: the model produced a non-finite score",
                line + 1,
            )));
        }
        rows.push(record.iter().map(ToString::to_string).collect_vec());
        scores.push(round2(score));
    }
    Ok(ScoredBatch {
        headers,
        rows,
        scores,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
