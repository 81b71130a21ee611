//! Logging initialisation.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Initialises tracing. `ENERGY_OPTIMIZER_LOG` overrides the verbosity flag.
pub fn init(verbosity: u8) -> Result {
    let default_directives = match verbosity {
        0 => "energy_optimizer=info",
        1 => "energy_optimizer=debug",
        _ => "energy_optimizer=trace",
    };
    let filter = EnvFilter::try_from_env("ENERGY_OPTIMIZER_LOG")
        .or_else(|_| EnvFilter::try_new(default_directives))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_filter(filter);
    tracing_subscriber::Registry::default()
        .with(format_layer)
        .init();
    Ok(())
}
