//! Offline training: fits a tree-ensemble regressor and writes the artifact.

use itertools::Itertools;

use crate::dataset::Dataset;
use crate::math::boosting::GradientBoostingRegressor;
use crate::math::forest::RandomForestRegressor;
use crate::math::metrics::{mean_absolute_error, r_squared, root_mean_squared_error};
use crate::math::tree::TreeParams;
use crate::model::{EfficiencyModel, Regressor};
use crate::opts::{HyperOpts, ModelKind, TrainOpts};
use crate::prelude::*;

pub fn run(opts: TrainOpts) -> Result {
    let start_instant = Instant::now();

    let dataset = Dataset::from_csv(&opts.dataset)?;
    info!(path = ?opts.dataset, n_rows = dataset.len(), "dataset loaded");

    let (train, test) = dataset.split(opts.test_fraction, opts.seed);
    info!(n_train = train.len(), n_test = test.len(), "split");

    let regressor = fit(&train, opts.model, opts.hyper, opts.seed);
    evaluate(&regressor, &test);

    EfficiencyModel::new(regressor).save(&opts.output)?;
    info!(path = ?opts.output, elapsed = ?start_instant.elapsed(), "artifact written");
    Ok(())
}

fn fit(train: &Dataset, kind: ModelKind, hyper: HyperOpts, seed: u64) -> Regressor {
    match kind {
        ModelKind::Forest => {
            let params = TreeParams {
                max_depth: hyper.max_depth.unwrap_or(16),
                min_samples_leaf: 1,
            };
            let n_trees = hyper.n_trees.unwrap_or(100);
            info!(n_trees, max_depth = params.max_depth, "fitting the bagged forest");
            Regressor::Forest(RandomForestRegressor::fit(
                &train.rows,
                &train.targets,
                n_trees,
                params,
                seed,
            ))
        }
        ModelKind::Boosting => {
            let params = TreeParams {
                max_depth: hyper.max_depth.unwrap_or(5),
                min_samples_leaf: 1,
            };
            let n_trees = hyper.n_trees.unwrap_or(200);
            info!(
                n_trees,
                max_depth = params.max_depth,
                learning_rate = hyper.learning_rate,
                "fitting the boosted ensemble",
            );
            Regressor::Boosting(GradientBoostingRegressor::fit(
                &train.rows,
                &train.targets,
                n_trees,
                hyper.learning_rate,
                params,
            ))
        }
    }
}

fn evaluate(regressor: &Regressor, test: &Dataset) {
    if test.is_empty() {
        warn!("no held-out rows, skipping the evaluation");
        return;
    }
    let predicted = test
        .rows
        .iter()
        .map(|row| regressor.predict(row))
        .collect_vec();
    info!(
        mae = mean_absolute_error(&test.targets, &predicted),
        rmse = root_mean_squared_error(&test.targets, &predicted),
        r2 = r_squared(&test.targets, &predicted),
        "held-out evaluation",
    );
}
