// crates/cli/src/config.rs
use std::io::Write;

use tally_sort_core::{DataKind, SortingMode};
use tracing::{debug, warn};

use crate::error::{CliError, Result};
use crate::streams::{InputSource, OutputSink};

pub const DATA_TYPE_FLAG: &str = "-dataType";
pub const SORTING_TYPE_FLAG: &str = "-sortingType";
pub const INPUT_FILE_FLAG: &str = "-inputFile";
pub const OUTPUT_FILE_FLAG: &str = "-outputFile";

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Default)]
pub struct Configuration {
    pub data_kind: DataKind,
    pub sorting_mode: SortingMode,
    pub input: InputSource,
    pub output: OutputSink,
}

impl Configuration {
    /// Resolve the argument list (program name excluded).
    ///
    /// Flags may come in any order and a repeated flag overrides the earlier
    /// one. Unknown `-` flags are reported to `notices` and skipped, together
    /// with a bare value directly following them. File flags open their file
    /// immediately; a replaced handle is closed right away.
    ///
    /// # Errors
    /// Fails on a missing or unknown data/sorting type, on a bare token that is
    /// not the value of a flag, and when an input/output file cannot be opened.
    pub fn resolve<I, S, W>(args: I, notices: &mut W) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: Write + ?Sized,
    {
        let mut config = Self::default();
        let mut tokens = args.into_iter().map(Into::into).peekable();

        while let Some(token) = tokens.next() {
            if !token.starts_with('-') {
                return Err(CliError::UnexpectedToken(token));
            }

            match token.as_str() {
                DATA_TYPE_FLAG => {
                    let value = tokens.next().ok_or(CliError::MissingDataType)?;
                    config.data_kind = value
                        .parse::<DataKind>()
                        .map_err(|_| CliError::UnknownDataType(value))?;
                    debug!(data_kind = %config.data_kind, "resolved data type");
                }
                SORTING_TYPE_FLAG => {
                    let value = tokens.next().ok_or(CliError::MissingSortingType)?;
                    config.sorting_mode = value
                        .parse::<SortingMode>()
                        .map_err(|_| CliError::UnknownSortingType(value))?;
                    debug!(sorting_mode = %config.sorting_mode, "resolved sorting type");
                }
                INPUT_FILE_FLAG => match tokens.next() {
                    Some(path) => {
                        config.input = InputSource::open(path)?;
                        debug!(input = %config.input, "opened input file");
                    }
                    None => warn!(input = %config.input, "-inputFile has no path; keeping input"),
                },
                OUTPUT_FILE_FLAG => match tokens.next() {
                    Some(path) => {
                        config.output = OutputSink::create(path)?;
                        debug!(output = %config.output, "opened output file");
                    }
                    None => warn!(output = %config.output, "-outputFile has no path; keeping output"),
                },
                _ => {
                    writeln!(notices, "\"{token}\" isn't a valid parameter. It's skipped.")
                        .map_err(CliError::Notice)?;
                    let value = tokens.next_if(|next| !next.starts_with('-'));
                    debug!(flag = %token, ?value, "skipped unknown parameter");
                }
            }
        }

        Ok(config)
    }
}
