pub use std::result::Result as StdResult;
pub use std::sync::Arc;
pub use std::time::Instant;

pub use anyhow::{anyhow, bail, Context};
pub use tracing::{debug, error, info, instrument, warn};

pub type AHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
pub type Result<T = (), E = anyhow::Error> = StdResult<T, E>;
