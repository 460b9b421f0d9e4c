//! Random-workload driver for [`rb_tree`].
//!
//! Seeds a tree with random [`Sample`](driver::Sample) payloads, looks up
//! random keys, and prints the hits, misses and the tree dump. The `rb-demo`
//! binary is a thin wrapper around [`driver::run`].

pub mod config;
pub mod driver;
pub mod error;
pub mod sampler;

pub use config::DemoConfig;
pub use driver::{run, RunReport, Sample};
pub use error::DemoError;
