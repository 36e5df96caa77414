use calamine::Data;

static EMPTY: Data = Data::Empty;

//==============================================================================
// Unified Row Table
//==============================================================================

/// One data row of a worksheet, tagged with the sheet it came from.
///
/// `cells[i]` is the raw value in column `i`, counted from column A.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub sheet: String,
    pub cells: Vec<Data>,
}

impl SheetRow {
    pub fn new(sheet: impl Into<String>, cells: Vec<Data>) -> Self {
        Self {
            sheet: sheet.into(),
            cells,
        }
    }

    /// Raw cell at a column position; short rows read as empty
    pub fn cell(&self, col: usize) -> &Data {
        self.cells.get(col).unwrap_or(&EMPTY)
    }
}

/// All sheets of a workbook concatenated into one ordered row sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    /// Header cells by column position
    pub headers: Vec<Data>,
    pub rows: Vec<SheetRow>,
    /// Sheet names in workbook order, including sheets that held no rows
    pub sheets: Vec<String>,
}

impl RowTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet's header and rows.
    ///
    /// Headers are positional: the first sheet's header wins, including its
    /// blank cells. Wider sheets only add columns past the current width.
    pub fn push_sheet(&mut self, name: &str, headers: Vec<Data>, rows: Vec<Vec<Data>>) {
        self.sheets.push(name.to_string());
        let known = self.headers.len();
        self.headers.extend(headers.into_iter().skip(known));
        self.rows
            .extend(rows.into_iter().map(|cells| SheetRow::new(name, cells)));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns: the widest of the header and every row
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn header(&self, col: usize) -> &Data {
        self.headers.get(col).unwrap_or(&EMPTY)
    }

    /// Raw values of one column, one per row
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Data> + '_ {
        self.rows.iter().map(move |r| r.cell(col))
    }
}

//==============================================================================
// Rendered Output
//==============================================================================

/// How a fixture ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Played {
        home_goals: i64,
        away_goals: i64,
        half_time_home: i64,
        half_time_away: i64,
    },
    /// Postponed or abandoned; `status` is the goals cell as entered
    NotPlayed { status: String },
}

/// A single rendered fixture and its scorers line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBlock {
    pub home: String,
    pub away: String,
    pub outcome: Outcome,
    pub scorers: String,
}

impl MatchBlock {
    /// Text inside the `<subhead>` tag
    pub fn subhead(&self) -> String {
        match &self.outcome {
            Outcome::Played {
                home_goals,
                away_goals,
                half_time_home,
                half_time_away,
            } => format!(
                "{} - {} {}-{} ({}-{})",
                self.home, self.away, home_goals, away_goals, half_time_home, half_time_away
            ),
            Outcome::NotPlayed { status } => format!("{} - {} {}", self.home, self.away, status),
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self.outcome, Outcome::Played { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Upper-cased division/class label
    Division(String),
    Match(MatchBlock),
}
