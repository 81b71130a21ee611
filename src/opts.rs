//! CLI options.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    /// Increases log verbosity
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Train(TrainOpts),
    Web(WebOpts),
}

/// Fits the efficiency model on a historical dataset and writes the artifact
#[derive(Args)]
pub struct TrainOpts {
    /// Historical sensor dataset (CSV)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Model family to fit
    #[arg(long, value_enum, default_value = "boosting")]
    pub model: ModelKind,

    /// Artifact output path
    #[arg(short, long, default_value = "efficiency-model.bin")]
    pub output: PathBuf,

    /// Held-out fraction of the dataset
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Random seed for the split and the bootstrap sampling
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub hyper: HyperOpts,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModelKind {
    /// Bagged forest of regression trees
    Forest,

    /// Gradient-boosted ensemble
    Boosting,
}

/// Tree-ensemble hyperparameters.
#[derive(Args, Clone, Copy)]
pub struct HyperOpts {
    /// Number of trees (defaults: 100 for the forest, 200 for boosting)
    #[arg(long)]
    pub n_trees: Option<usize>,

    /// Maximum tree depth (defaults: 16 for the forest, 5 for boosting)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Boosting learning rate
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    /// Trained model artifact
    #[arg(short, long, default_value = "efficiency-model.bin")]
    pub model: PathBuf,

    /// Web application bind host
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value_t = 8081)]
    pub port: u16,
}
