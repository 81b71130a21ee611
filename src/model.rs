//! The trained model artifact: a fitted regressor plus its feature schema.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::math::boosting::GradientBoostingRegressor;
use crate::math::forest::RandomForestRegressor;
use crate::prelude::*;

/// Ordered feature schema shared by the trainer and both prediction paths.
/// The names are case-sensitive and the order is the model's input order.
pub const FEATURE_NAMES: [&str; 7] = [
    "temperature",
    "Voltage",
    "power_usage",
    "battery_health",
    "uptime",
    "site_type_Rooftop",
    "location_type_Urban",
];

pub const TARGET_NAME: &str = "energy_efficiency";

#[derive(Serialize, Deserialize)]
pub enum Regressor {
    Forest(RandomForestRegressor),
    Boosting(GradientBoostingRegressor),
}

impl Regressor {
    pub fn predict(&self, features: &[f64]) -> f64 {
        match self {
            Self::Forest(forest) => forest.predict(features),
            Self::Boosting(boosting) => boosting.predict(features),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct EfficiencyModel {
    schema: Vec<String>,
    regressor: Regressor,
}

impl EfficiencyModel {
    pub fn new(regressor: Regressor) -> Self {
        Self {
            schema: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
            regressor,
        }
    }

    /// Predicts the efficiency score for one encoded feature row.
    pub fn predict(&self, features: &[f64; 7]) -> f64 {
        self.regressor.predict(features)
    }

    pub fn save(&self, path: &Path) -> Result {
        let blob = bincode::serialize(self)?;
        fs::write(path, blob).with_context(|| format!("failed to write {path:?}"))?;
        Ok(())
    }

    /// Loads the artifact and validates the persisted schema against [`FEATURE_NAMES`],
    /// so a model trained on a different column order fails here instead of
    /// silently producing wrong predictions.
    pub fn load(path: &Path) -> Result<Self> {
        let blob = fs::read(path).with_context(|| format!("failed to read {path:?}"))?;
        let model: Self =
            bincode::deserialize(&blob).with_context(|| format!("failed to decode {path:?}"))?;
        if model.schema != FEATURE_NAMES {
            bail!(
                "artifact schema {:?} does not match the expected {:?}",
                model.schema,
                FEATURE_NAMES,
            );
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tree::TreeParams;

    fn tiny_regressor() -> Regressor {
        let rows: Vec<Vec<f64>> = (0..8).map(|i| vec![f64::from(i); 7]).collect();
        let targets: Vec<f64> = (0..8).map(|i| f64::from(i) * 10.0).collect();
        let params = TreeParams {
            max_depth: 3,
            min_samples_leaf: 1,
        };
        Regressor::Boosting(GradientBoostingRegressor::fit(&rows, &targets, 10, 0.5, params))
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("energy-optimizer-{}-{}", std::process::id(), name))
    }

    #[test]
    fn save_load_round_trip_ok() -> Result {
        let model = EfficiencyModel::new(tiny_regressor());
        let features = [3.0; 7];
        let expected = model.predict(&features);

        let path = scratch_path("round-trip.bin");
        model.save(&path)?;
        let loaded = EfficiencyModel::load(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(loaded.predict(&features), expected);
        Ok(())
    }

    #[test]
    fn load_rejects_schema_mismatch_ok() -> Result {
        let model = EfficiencyModel {
            schema: vec!["not_a_feature".to_string()],
            regressor: tiny_regressor(),
        };
        let path = scratch_path("bad-schema.bin");
        model.save(&path)?;
        let result = EfficiencyModel::load(&path);
        fs::remove_file(&path)?;

        assert!(result.is_err());
        Ok(())
    }
}
