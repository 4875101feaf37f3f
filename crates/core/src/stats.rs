use serde::{Deserialize, Serialize};

use crate::options::{DataKind, SortingMode};

/// What a single handler run produced, independent of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub data_kind: DataKind,
    pub sorting_mode: SortingMode,
    /// Number of records that made it into the batch.
    pub total: usize,
    /// Tokens rejected by the tokenizer (only integers can be rejected).
    pub skipped: usize,
    /// Number of frequency groups written; zero for natural order.
    pub groups: usize,
}
