pub mod batch;
pub mod index;
pub mod predict;
