//! Parsing of raw emoji datasets into typed records.

pub mod dataset;

pub use dataset::{load_dataset, parse_dataset, DatasetReport};
