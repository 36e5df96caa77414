//! Row classification: division headers, fixtures, noise

use crate::config::{ColumnMap, ConverterConfig};
use crate::core::cell::{parse_int_safe, to_clean_str};
use crate::core::scorers;
use crate::types::{Block, MatchBlock, Outcome, RowTable, SheetRow};
use tracing::debug;

/// Current division label and whether its header block was written yet.
///
/// A label is emitted at most once per header occurrence, right before the
/// first fixture that follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionState {
    label: Option<String>,
    emitted: bool,
}

impl DivisionState {
    /// Seed from the second column's header, if it names a division
    pub fn from_header(header: &str, config: &ConverterConfig) -> Self {
        let mut state = Self::default();
        if config.is_division(header) {
            state.enter(header);
        }
        state
    }

    /// Switch to a new division; its header is pending again
    pub fn enter(&mut self, label: &str) {
        self.label = Some(label.trim().to_uppercase());
        self.emitted = false;
    }

    /// The label to emit before the next fixture, once
    pub fn take_pending(&mut self) -> Option<String> {
        if self.emitted {
            return None;
        }
        let label = self.label.clone()?;
        self.emitted = true;
        Some(label)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Fields of one row at the configured column positions, normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub home: String,
    pub away: String,
    pub home_goals: String,
    pub away_goals: String,
    pub home_half_time: String,
    pub away_half_time: String,
}

impl RowFields {
    pub fn extract(row: &SheetRow, columns: &ColumnMap) -> Self {
        let field = |col: usize| to_clean_str(row.cell(col));
        Self {
            home: field(columns.home),
            away: field(columns.away),
            home_goals: field(columns.home_goals),
            away_goals: field(columns.away_goals),
            home_half_time: field(columns.home_half_time),
            away_half_time: field(columns.away_half_time),
        }
    }

    /// Both team names present
    pub fn is_fixture(&self) -> bool {
        !self.home.trim().is_empty() && !self.away.trim().is_empty()
    }
}

/// Build a match block from a fixture row and its raw scorers text.
///
/// Played 0-0 matches get a single space as scorers. That only applies when
/// both goal cells actually parse to zero; blank or garbled goals still
/// render as 0 but keep the scorers cell.
pub fn match_block(fields: RowFields, scorers: String, config: &ConverterConfig) -> MatchBlock {
    let postponed = config.is_postponed(&fields.home_goals);
    let home_goals = parse_int_safe(&fields.home_goals);
    let away_goals = parse_int_safe(&fields.away_goals);

    let scorers = if !postponed && home_goals == Some(0) && away_goals == Some(0) {
        " ".to_string()
    } else {
        scorers
    };

    let outcome = if postponed {
        Outcome::NotPlayed {
            status: fields.home_goals,
        }
    } else {
        Outcome::Played {
            home_goals: home_goals.unwrap_or(0),
            away_goals: away_goals.unwrap_or(0),
            half_time_home: parse_int_safe(&fields.home_half_time).unwrap_or(0),
            half_time_away: parse_int_safe(&fields.away_half_time).unwrap_or(0),
        }
    };

    MatchBlock {
        home: fields.home,
        away: fields.away,
        outcome,
        scorers,
    }
}

/// Walk every row in order and produce the output blocks
pub fn classify(table: &RowTable, config: &ConverterConfig) -> Vec<Block> {
    let scorer_texts = scorers::locate(table, &config.scorers).texts(table);
    let mut state = DivisionState::from_header(&to_clean_str(table.header(1)), config);
    let mut blocks = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let fields = RowFields::extract(row, &config.columns);

        if config.is_division(&fields.home) {
            debug!(sheet = %row.sheet, row = i, label = %fields.home, "division header");
            state.enter(&fields.home);
            continue;
        }

        if !fields.is_fixture() {
            debug!(sheet = %row.sheet, row = i, "skipped row");
            continue;
        }

        if let Some(label) = state.take_pending() {
            blocks.push(Block::Division(label));
        }

        let scorers = scorer_texts.get(i).cloned().unwrap_or_default();
        blocks.push(Block::Match(match_block(fields, scorers, config)));
    }

    blocks
}
