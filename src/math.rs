pub mod boosting;
pub mod forest;
pub mod metrics;
pub mod tree;
