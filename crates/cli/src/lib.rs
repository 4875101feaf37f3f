// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod streams;

use std::io::Write;

use clap::ValueEnum;
use tally_sort_core::options::accepted_names;
use tally_sort_core::{DataKind, Handler, RunSummary, SortingMode, StatError};

use crate::config::{
    Configuration, DATA_TYPE_FLAG, INPUT_FILE_FLAG, OUTPUT_FILE_FLAG, SORTING_TYPE_FLAG,
};
use crate::error::Result;

/// Dispatch the configured handler over the configured streams.
///
/// Both streams are closed when this returns, on success and on error.
///
/// # Errors
/// Returns an error if reading the input or writing the report fails.
pub fn run(config: Configuration) -> Result<RunSummary> {
    let Configuration {
        data_kind,
        sorting_mode,
        input,
        output,
    } = config;

    let handler = Handler::for_kind(data_kind);
    tracing::debug!(?handler, %sorting_mode, %input, %output, "dispatching");

    let mut writer = output.into_writer();
    let summary = handler.run(sorting_mode, input.into_reader(), &mut writer)?;
    writer
        .flush()
        .map_err(|source| StatError::Write { source })?;
    Ok(summary)
}

/// One-line usage hint listing every flag and its accepted values.
#[must_use]
pub fn usage() -> String {
    format!(
        "Usage: tally_sort [{DATA_TYPE_FLAG} {}] [{SORTING_TYPE_FLAG} {}] [{INPUT_FILE_FLAG} <path>] [{OUTPUT_FILE_FLAG} <path>]",
        names::<DataKind>(),
        names::<SortingMode>(),
    )
}

fn names<T: ValueEnum>() -> String {
    accepted_names::<T>().join("|")
}
