//! Training-dataset loading, encoding, and splitting.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::{FEATURE_NAMES, TARGET_NAME};
use crate::prelude::*;

const SITE_TYPE: &str = "site_type";
const LOCATION_TYPE: &str = "location_type";

/// Encoded feature rows in [`FEATURE_NAMES`] order, plus the target column.
pub struct Dataset {
    pub rows: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Reads a historical sensor CSV and encodes it into the fixed feature schema.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
        Self::from_reader(csv::Reader::from_reader(file))
    }

    fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        let column = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| anyhow!("the dataset is missing the `{name}` column"))
        };
        // The raw numeric columns carry the schema names; the categorical pair
        // is encoded below into the two trailing indicator features.
        let numeric_columns: Vec<usize> = FEATURE_NAMES[..5]
            .iter()
            .map(|&name| column(name))
            .collect::<Result<_>>()?;
        let site_type_column = column(SITE_TYPE)?;
        let location_type_column = column(LOCATION_TYPE)?;
        let target_column = column(TARGET_NAME)?;

        let mut rows = Vec::new();
        let mut targets = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            let parse = |index: usize| -> Result<f64> {
                record[index]
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("row {}: `{}` is not a number", line + 1, &record[index]))
            };
            let mut row: Vec<f64> = numeric_columns
                .iter()
                .map(|&index| parse(index))
                .collect::<Result<_>>()?;
            row.push(
                encode_category(&record[site_type_column], "Rooftop", "Ground")
                    .with_context(|| format!("row {}: bad `{SITE_TYPE}`", line + 1))?,
            );
            row.push(
                encode_category(&record[location_type_column], "Urban", "Rural")
                    .with_context(|| format!("row {}: bad `{LOCATION_TYPE}`", line + 1))?,
            );
            rows.push(row);
            targets.push(parse(target_column)?);
        }
        if rows.is_empty() {
            bail!("the dataset contains no rows");
        }
        Ok(Self { rows, targets })
    }

    /// Splits into training and held-out parts with a seeded shuffle.
    /// At least one row always stays on the training side.
    pub fn split(&self, test_fraction: f64, seed: u64) -> (Dataset, Dataset) {
        let mut indices = (0..self.rows.len()).collect_vec();
        indices.shuffle(&mut StdRng::seed_from_u64(seed));
        let n_test = ((self.rows.len() as f64) * test_fraction).round() as usize;
        let n_test = n_test.min(self.rows.len() - 1);
        let (test_indices, train_indices) = indices.split_at(n_test);
        (self.subset(train_indices), self.subset(test_indices))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            rows: indices.iter().map(|&index| self.rows[index].clone()).collect(),
            targets: indices.iter().map(|&index| self.targets[index]).collect(),
        }
    }
}

/// Drop-first one-hot encoding: the kept category maps to 1, the dropped one to 0.
/// The mapping is fixed, so every artifact shares the same indicator columns.
fn encode_category(value: &str, kept: &str, dropped: &str) -> Result<f64> {
    let value = value.trim();
    if value == kept {
        Ok(1.0)
    } else if value == dropped {
        Ok(0.0)
    } else {
        Err(anyhow!("unexpected value `{value}`: expected `{kept}` or `{dropped}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
temperature,Voltage,power_usage,battery_health,uptime,site_type,location_type,energy_efficiency
30,230,1000,80,12,Ground,Rural,75.5
45,200,2500,50,24,Rooftop,Urban,40.0
";

    fn from_str(data: &str) -> Result<Dataset> {
        Dataset::from_reader(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn encoding_ok() -> Result {
        let dataset = from_str(CSV)?;
        assert_eq!(dataset.rows[0], vec![30.0, 230.0, 1000.0, 80.0, 12.0, 0.0, 0.0]);
        assert_eq!(dataset.rows[1], vec![45.0, 200.0, 2500.0, 50.0, 24.0, 1.0, 1.0]);
        assert_eq!(dataset.targets, vec![75.5, 40.0]);
        Ok(())
    }

    #[test]
    fn missing_column_fails_ok() {
        let data = "temperature,Voltage\n30,230\n";
        assert!(from_str(data).is_err());
    }

    #[test]
    fn unexpected_category_fails_ok() {
        let data = CSV.replace("Rooftop", "Basement");
        assert!(from_str(&data).is_err());
    }

    #[test]
    fn split_sizes_and_determinism_ok() -> Result {
        let mut data = CSV.lines().take(1).join("\n");
        for i in 0..10 {
            data.push_str(&format!("\n{i},230,1000,80,12,Ground,Rural,{}", 50 + i));
        }
        let dataset = from_str(&data)?;
        let (train, test) = dataset.split(0.2, 42);
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);

        let (train_again, _) = dataset.split(0.2, 42);
        assert_eq!(train.rows, train_again.rows);
        Ok(())
    }
}
