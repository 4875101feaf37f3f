#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod handler;
pub mod options;
pub mod report;
pub mod stats;
pub mod tokenizer;

pub use error::{Result, StatError};
pub use handler::Handler;
pub use options::{DataKind, SortingMode};
pub use stats::RunSummary;
