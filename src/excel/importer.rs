//! Workbook loader - Excel (.xlsx) → unified row table

use crate::error::{ConvertError, ConvertResult};
use crate::types::RowTable;
use calamine::{Data, Range, Reader, Xlsx};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Reads every worksheet of an .xlsx file into one [`RowTable`]
pub struct WorkbookLoader {
    bytes: Vec<u8>,
}

impl WorkbookLoader {
    /// Loader over an uploaded file's raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        Ok(Self::from_bytes(fs::read(path)?))
    }

    /// Concatenate all sheets in workbook order.
    ///
    /// Each sheet's first non-blank row is its header; the rows after it are
    /// data. A workbook without data rows yields an empty table, not an error.
    pub fn load(&self) -> ConvertResult<RowTable> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(self.bytes.as_slice()))
            .map_err(|e| ConvertError::Workbook(format!("Failed to open Excel file: {}", e)))?;

        let mut table = RowTable::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                ConvertError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            let (headers, rows) = split_sheet(&range);
            debug!(sheet = %sheet_name, rows = rows.len(), "sheet loaded");
            table.push_sheet(&sheet_name, headers, rows);
        }

        Ok(table)
    }
}

/// Header and data rows of one sheet, positioned from column A
fn split_sheet(range: &Range<Data>) -> (Vec<Data>, Vec<Vec<Data>>) {
    let Some((_, start_col)) = range.start() else {
        return (Vec::new(), Vec::new());
    };
    let pad = start_col as usize;

    let mut rows = range
        .rows()
        .map(|row| {
            let mut cells = vec![Data::Empty; pad];
            cells.extend(row.iter().cloned());
            cells
        })
        .filter(|cells| !is_blank_row(cells));

    let headers = rows.next().unwrap_or_default();
    (headers, rows.collect())
}

fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|c| match c {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    })
}
