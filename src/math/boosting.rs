//! Gradient-boosted regression trees with a squared-error loss:
//! a mean base score and stagewise residual trees scaled by the learning rate.

use serde::{Deserialize, Serialize};

use crate::math::tree::{RegressionTree, TreeParams};

#[derive(Serialize, Deserialize)]
pub struct GradientBoostingRegressor {
    base_score: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoostingRegressor {
    pub fn fit(
        rows: &[Vec<f64>],
        targets: &[f64],
        n_trees: usize,
        learning_rate: f64,
        params: TreeParams,
    ) -> Self {
        assert!(!rows.is_empty());
        assert!(learning_rate > 0.0);

        let base_score = targets.iter().sum::<f64>() / targets.len() as f64;
        let indices: Vec<usize> = (0..rows.len()).collect();
        let mut predictions = vec![base_score; rows.len()];
        let mut trees = Vec::with_capacity(n_trees);
        for _ in 0..n_trees {
            let residuals: Vec<f64> = targets
                .iter()
                .zip(&predictions)
                .map(|(target, prediction)| target - prediction)
                .collect();
            let tree = RegressionTree::fit(rows, &residuals, &indices, params);
            for (index, prediction) in predictions.iter_mut().enumerate() {
                *prediction += learning_rate * tree.predict(&rows[index]);
            }
            trees.push(tree);
        }
        Self {
            base_score,
            learning_rate,
            trees,
        }
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        self.base_score
            + self.learning_rate
                * self
                    .trees
                    .iter()
                    .map(|tree| tree.predict(features))
                    .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_training_data_ok() {
        let rows: Vec<Vec<f64>> = (0..20).map(|i| vec![f64::from(i)]).collect();
        let targets: Vec<f64> = (0..20).map(|i| 3.0 * f64::from(i)).collect();
        let params = TreeParams {
            max_depth: 8,
            min_samples_leaf: 1,
        };
        let model = GradientBoostingRegressor::fit(&rows, &targets, 60, 0.5, params);
        for (row, target) in rows.iter().zip(&targets) {
            assert!((model.predict(row) - target).abs() < 1e-6);
        }
    }

    #[test]
    fn constant_target_predicts_base_score_ok() {
        let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![f64::from(i)]).collect();
        let targets = vec![7.5; 10];
        let params = TreeParams {
            max_depth: 5,
            min_samples_leaf: 1,
        };
        let model = GradientBoostingRegressor::fit(&rows, &targets, 20, 0.1, params);
        assert!((model.predict(&[4.0]) - 7.5).abs() < f64::EPSILON);
    }
}
