use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the input is split into records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
pub enum DataKind {
    /// Whitespace-separated 64-bit signed integers.
    #[default]
    #[value(name = "long")]
    #[serde(rename = "long")]
    Integer,
    /// Runs of non-whitespace characters.
    #[value(name = "word")]
    #[serde(rename = "word")]
    Word,
    /// Whole lines without their terminator.
    #[value(name = "line")]
    #[serde(rename = "line")]
    Line,
}

/// How the report orders the records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
pub enum SortingMode {
    /// Every record in its natural order.
    #[default]
    #[value(name = "natural")]
    #[serde(rename = "natural")]
    Natural,
    /// One line per distinct record with its count and share.
    #[value(name = "byCount")]
    #[serde(rename = "byCount")]
    ByCount,
}

impl DataKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "long",
            Self::Word => "word",
            Self::Line => "line",
        }
    }
}

impl SortingMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::ByCount => "byCount",
        }
    }
}

/// Names accepted on the command line for `T`, in declaration order.
#[must_use]
pub fn accepted_names<T: ValueEnum>() -> Vec<String> {
    T::value_variants()
        .iter()
        .filter_map(T::to_possible_value)
        .map(|value| value.get_name().to_owned())
        .collect()
}

impl FromStr for DataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, false)
    }
}

impl FromStr for SortingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, false)
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
