// crates/core/src/report.rs
use hashbrown::HashMap;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

/// One distinct record and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyGroup<T> {
    pub value: T,
    pub count: usize,
}

impl<T> FrequencyGroup<T> {
    /// Share of `total`, rounded to the nearest whole percent.
    #[must_use]
    pub fn percent(&self, total: usize) -> u32 {
        percent(self.count, total)
    }
}

/// `round(count / total * 100)`, with halves rounded up. Zero when `total` is zero.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Group equal records and order the groups by ascending count, then by
/// ascending value.
///
/// Counts always add up to the number of records consumed.
pub fn frequency_groups<T, I>(records: I) -> Vec<FrequencyGroup<T>>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for record in records {
        *counts.entry(record).or_insert(0) += 1;
    }

    let mut groups: Vec<_> = counts
        .into_iter()
        .map(|(value, count)| FrequencyGroup { value, count })
        .collect();
    // Values are distinct, so an unstable sort is still deterministic.
    groups.sort_unstable_by(|a, b| a.count.cmp(&b.count).then_with(|| a.value.cmp(&b.value)));
    groups
}

/// Longest line first, measured in UTF-16 code units, so a character outside
/// the BMP counts twice. Lines of equal length keep their input order.
pub fn sort_longest_first(lines: &mut [&str]) {
    lines.sort_by_key(|line| Reverse(line.encode_utf16().count()));
}

/// `Sorted data: a b c` on a single line.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_joined<T, W>(values: &[T], out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    out.write_all(b"Sorted data: ")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
    }
    out.write_all(b"\n")
}

/// `Sorted data:` header followed by one value per line.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_listing<T, W>(values: &[T], out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    writeln!(out, "Sorted data:")?;
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// One `{value}: {count} time(s), {percent}%` line per group.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_frequency_table<T, W>(
    groups: &[FrequencyGroup<T>],
    total: usize,
    out: &mut W,
) -> io::Result<()>
where
    T: Display,
    W: Write + ?Sized,
{
    for group in groups {
        writeln!(
            out,
            "{}: {} time(s), {}%",
            group.value,
            group.count,
            group.percent(total)
        )?;
    }
    Ok(())
}
