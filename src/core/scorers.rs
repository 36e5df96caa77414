//! Goal scorers column detection
//!
//! A labelled column wins; otherwise the most text-heavy column past the
//! fixed match columns is taken.

use crate::config::{contains_any, ScorerDetection};
use crate::core::cell::{is_missing, parse_number, to_clean_str};
use crate::types::RowTable;
use calamine::Data;
use tracing::debug;

/// Where the scorers text for each row comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerSource {
    /// Column whose header names the scorers
    Header(usize),
    /// Column picked by content; `textual` non-numeric values were sampled
    Heuristic { column: usize, textual: usize },
    /// No candidate column at all
    None,
}

impl ScorerSource {
    pub fn column(&self) -> Option<usize> {
        match self {
            ScorerSource::Header(col) => Some(*col),
            ScorerSource::Heuristic { column, .. } => Some(*column),
            ScorerSource::None => None,
        }
    }

    /// Scorers text per row, aligned one-to-one with `table.rows`
    pub fn texts(&self, table: &RowTable) -> Vec<String> {
        match self.column() {
            Some(col) => table.column(col).map(to_clean_str).collect(),
            None => vec![String::new(); table.len()],
        }
    }
}

/// Find the scorers column: header keywords first, then content
pub fn locate(table: &RowTable, detection: &ScorerDetection) -> ScorerSource {
    if let Some(col) = header_match(&table.headers, &detection.keywords) {
        debug!(column = col, "scorers column found by header");
        return ScorerSource::Header(col);
    }
    match most_textual_column(table, detection.min_index, detection.sample_size) {
        Some((column, textual)) => {
            debug!(column, textual, "scorers column found by content");
            ScorerSource::Heuristic { column, textual }
        }
        None => {
            debug!("no scorers column available");
            ScorerSource::None
        }
    }
}

/// First text header containing one of the keywords (case-insensitive)
pub fn header_match(headers: &[Data], keywords: &[String]) -> Option<usize> {
    headers.iter().position(|h| match h {
        Data::String(s) => contains_any(s, keywords),
        _ => false,
    })
}

/// Column past `min_index` with the most values that are not numbers.
///
/// Only the first `sample_size` non-missing values of each column count.
/// Ties go to the lowest index. Returns `(column, textual_count)`.
pub fn most_textual_column(
    table: &RowTable,
    min_index: usize,
    sample_size: usize,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for col in (min_index + 1)..table.width() {
        let textual = textual_count(table.column(col), sample_size);
        if best.map_or(true, |(_, score)| textual > score) {
            best = Some((col, textual));
        }
    }
    best
}

fn textual_count<'a>(values: impl Iterator<Item = &'a Data>, sample_size: usize) -> usize {
    values
        .filter(|v| !is_missing(v))
        .take(sample_size)
        .filter(|v| !is_numeric(v))
        .count()
}

fn is_numeric(value: &Data) -> bool {
    match value {
        Data::Int(_) | Data::Float(_) => true,
        Data::String(s) => parse_number(s).is_some(),
        _ => false,
    }
}
