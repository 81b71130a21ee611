//! Bagged forest of regression trees with averaged predictions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::math::tree::{RegressionTree, TreeParams};

#[derive(Serialize, Deserialize)]
pub struct RandomForestRegressor {
    trees: Vec<RegressionTree>,
}

impl RandomForestRegressor {
    /// Fits `n_trees` trees, each on a bootstrap sample of the rows.
    pub fn fit(
        rows: &[Vec<f64>],
        targets: &[f64],
        n_trees: usize,
        params: TreeParams,
        seed: u64,
    ) -> Self {
        assert!(n_trees != 0);
        let mut rng = StdRng::seed_from_u64(seed);
        let trees = (0..n_trees)
            .map(|_| {
                let sample: Vec<usize> = (0..rows.len())
                    .map(|_| rng.gen_range(0..rows.len()))
                    .collect();
                RegressionTree::fit(rows, targets, &sample, params)
            })
            .collect();
        Self { trees }
    }

    pub fn predict(&self, features: &[f64]) -> f64 {
        self.trees
            .iter()
            .map(|tree| tree.predict(features))
            .sum::<f64>()
            / self.trees.len() as f64
    }
}
