// crates/core/src/handler.rs
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Read, Write};

use crate::error::{Result, StatError};
use crate::options::{DataKind, SortingMode};
use crate::report;
use crate::stats::RunSummary;
use crate::tokenizer::{self, Integers};

/// Processing strategy for one data kind.
///
/// The handler holds no stream state: the input and the output sink are
/// handed to [`Handler::run`] on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Integer,
    Word,
    Line,
}

impl Handler {
    /// Pick the handler for `kind`.
    #[must_use]
    pub const fn for_kind(kind: DataKind) -> Self {
        match kind {
            DataKind::Integer => Self::Integer,
            DataKind::Word => Self::Word,
            DataKind::Line => Self::Line,
        }
    }

    #[must_use]
    pub const fn kind(self) -> DataKind {
        match self {
            Self::Integer => DataKind::Integer,
            Self::Word => DataKind::Word,
            Self::Line => DataKind::Line,
        }
    }

    /// Read all of `input`, then write the report for `mode` to `output`.
    ///
    /// Nothing is written before the whole input has been consumed.
    ///
    /// # Errors
    /// [`StatError::Read`] if `input` fails, [`StatError::Write`] if `output` fails.
    pub fn run<R, W>(self, mode: SortingMode, input: R, output: &mut W) -> Result<RunSummary>
    where
        R: Read,
        W: Write + ?Sized,
    {
        let text = tokenizer::read_text(input)?;
        tracing::debug!(kind = %self.kind(), %mode, bytes = text.len(), "input buffered");

        let outcome = match self {
            Self::Integer => report_integers(mode, &text, output),
            Self::Word => report_words(mode, &text, output),
            Self::Line => report_lines(mode, &text, output),
        };
        let Outcome {
            total,
            skipped,
            groups,
        } = outcome.map_err(|source| StatError::Write { source })?;

        Ok(RunSummary {
            data_kind: self.kind(),
            sorting_mode: mode,
            total,
            skipped,
            groups,
        })
    }
}

impl From<DataKind> for Handler {
    fn from(kind: DataKind) -> Self {
        Self::for_kind(kind)
    }
}

struct Outcome {
    total: usize,
    skipped: usize,
    groups: usize,
}

impl Outcome {
    const fn new(total: usize, groups: usize) -> Self {
        Self {
            total,
            skipped: 0,
            groups,
        }
    }
}

fn report_integers<W: Write + ?Sized>(
    mode: SortingMode,
    text: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    let Integers {
        mut values,
        skipped,
    } = tokenizer::integers(text);

    for token in &skipped {
        writeln!(out, "\"{token}\" isn't a long. It's skipped.")?;
    }
    writeln!(out, "Total numbers: {}", values.len())?;

    let total = values.len();
    let groups = match mode {
        SortingMode::Natural => {
            values.sort_unstable();
            report::write_joined(&values, out)?;
            0
        }
        SortingMode::ByCount => report_by_count(values, out)?,
    };

    Ok(Outcome {
        total,
        skipped: skipped.len(),
        groups,
    })
}

fn report_words<W: Write + ?Sized>(
    mode: SortingMode,
    text: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut words = tokenizer::words(text);
    writeln!(out, "Total words: {}", words.len())?;

    let total = words.len();
    let groups = match mode {
        SortingMode::Natural => {
            words.sort_unstable();
            report::write_joined(&words, out)?;
            0
        }
        SortingMode::ByCount => report_by_count(words, out)?,
    };
    Ok(Outcome::new(total, groups))
}

fn report_lines<W: Write + ?Sized>(
    mode: SortingMode,
    text: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut lines = tokenizer::lines(text);
    writeln!(out, "Total lines: {}", lines.len())?;

    let total = lines.len();
    let groups = match mode {
        // Length-descending, not lexicographic like the other kinds.
        SortingMode::Natural => {
            report::sort_longest_first(&mut lines);
            report::write_listing(&lines, out)?;
            0
        }
        SortingMode::ByCount => report_by_count(lines, out)?,
    };
    Ok(Outcome::new(total, groups))
}

/// Shared by every data kind; returns the number of groups written.
fn report_by_count<T, W>(records: Vec<T>, out: &mut W) -> io::Result<usize>
where
    T: Eq + Hash + Ord + Display,
    W: Write + ?Sized,
{
    let total = records.len();
    let groups = report::frequency_groups(records);
    report::write_frequency_table(&groups, total, out)?;
    Ok(groups.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: DataKind, mode: SortingMode, input: &str) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = Handler::for_kind(kind)
            .run(mode, input.as_bytes(), &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn dispatch_covers_every_kind() {
        for kind in [DataKind::Integer, DataKind::Word, DataKind::Line] {
            assert_eq!(Handler::for_kind(kind).kind(), kind);
            assert_eq!(Handler::from(kind), Handler::for_kind(kind));
        }
    }

    #[test]
    fn integers_natural() {
        let (out, summary) = run(DataKind::Integer, SortingMode::Natural, "3 1 2 1");
        assert_eq!(out, "Total numbers: 4\nSorted data: 1 1 2 3\n");
        assert_eq!(summary.total, 4);
        assert_eq!(summary.groups, 0);
    }

    #[test]
    fn integers_by_count() {
        let (out, summary) = run(DataKind::Integer, SortingMode::ByCount, "3 1 2 1");
        assert_eq!(
            out,
            "Total numbers: 4\n2: 1 time(s), 25%\n3: 1 time(s), 25%\n1: 2 time(s), 50%\n"
        );
        assert_eq!(summary.groups, 3);
    }

    #[test]
    fn integers_by_count_tie_break_is_numeric() {
        let (out, _) = run(DataKind::Integer, SortingMode::ByCount, "10 9 -1 -2");
        assert_eq!(
            out,
            "Total numbers: 4\n\
             -2: 1 time(s), 25%\n\
             -1: 1 time(s), 25%\n\
             9: 1 time(s), 25%\n\
             10: 1 time(s), 25%\n"
        );
    }

    #[test]
    fn integers_sort_numerically() {
        let (out, _) = run(DataKind::Integer, SortingMode::Natural, "10 -5 9 100");
        assert_eq!(out, "Total numbers: 4\nSorted data: -5 9 10 100\n");
    }

    #[test]
    fn skipped_integers_are_reported_before_the_total() {
        let (out, summary) = run(DataKind::Integer, SortingMode::Natural, "4 abc 2 1.5");
        assert_eq!(
            out,
            "\"abc\" isn't a long. It's skipped.\n\
             \"1.5\" isn't a long. It's skipped.\n\
             Total numbers: 2\n\
             Sorted data: 2 4\n"
        );
        assert_eq!(summary.total, 2);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn words_natural() {
        let (out, _) = run(DataKind::Word, SortingMode::Natural, "cc a bb");
        assert_eq!(out, "Total words: 3\nSorted data: a bb cc\n");
    }

    #[test]
    fn words_by_count() {
        let (out, summary) = run(DataKind::Word, SortingMode::ByCount, "b a b\nc b");
        assert_eq!(
            out,
            "Total words: 5\na: 1 time(s), 20%\nc: 1 time(s), 20%\nb: 3 time(s), 60%\n"
        );
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn lines_natural_is_longest_first() {
        let (out, _) = run(DataKind::Line, SortingMode::Natural, "bb\na\nccc\n");
        assert_eq!(out, "Total lines: 3\nSorted data:\nccc\nbb\na\n");
    }

    #[test]
    fn lines_natural_measures_utf16_length() {
        let (out, _) = run(DataKind::Line, SortingMode::Natural, "ab\n😀😀\n");
        assert_eq!(out, "Total lines: 2\nSorted data:\n😀😀\nab\n");
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let (out, summary) = run(DataKind::Line, SortingMode::Natural, "a\rbb\rccc");
        assert_eq!(out, "Total lines: 3\nSorted data:\nccc\nbb\na\n");
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn natural_order_differs_between_words_and_lines() {
        let input = "a\nzz\nmmm\n";
        let (words, _) = run(DataKind::Word, SortingMode::Natural, input);
        let (lines, _) = run(DataKind::Line, SortingMode::Natural, input);
        assert_eq!(words, "Total words: 3\nSorted data: a mmm zz\n");
        assert_eq!(lines, "Total lines: 3\nSorted data:\nmmm\nzz\na\n");
    }

    #[test]
    fn lines_by_count_keeps_whole_lines() {
        let (out, _) = run(DataKind::Line, SortingMode::ByCount, "a b\n\na b\n");
        assert_eq!(out, "Total lines: 3\n: 1 time(s), 33%\na b: 2 time(s), 67%\n");
    }

    #[test]
    fn empty_input() {
        let (out, _) = run(DataKind::Integer, SortingMode::Natural, "");
        assert_eq!(out, "Total numbers: 0\nSorted data: \n");

        let (out, summary) = run(DataKind::Word, SortingMode::ByCount, "  \n");
        assert_eq!(out, "Total words: 0\n");
        assert_eq!(summary.groups, 0);

        let (out, _) = run(DataKind::Line, SortingMode::Natural, "");
        assert_eq!(out, "Total lines: 0\nSorted data:\n");
    }

    #[test]
    fn write_failures_surface_as_write_errors() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Handler::Word
            .run(SortingMode::Natural, &b"a b"[..], &mut Full)
            .unwrap_err();
        assert!(matches!(err, StatError::Write { .. }));
    }
}
