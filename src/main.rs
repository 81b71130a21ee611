mod batch;
mod dataset;
mod diagnostics;
mod logging;
mod math;
mod model;
mod models;
mod opts;
mod prelude;
mod trainer;
mod web;

use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    logging::init(opts.verbosity)?;
    match opts.subcommand {
        Subcommand::Train(opts) => trainer::run(opts),
        Subcommand::Web(opts) => web::run(opts).await,
    }
}
