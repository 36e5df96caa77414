//! End-to-end conversion: workbook bytes in, tagged report out

use crate::config::ConverterConfig;
use crate::core::classifier::classify;
use crate::error::{ConvertError, ConvertResult};
use crate::excel::WorkbookLoader;
use crate::types::{Block, RowTable};
use crate::writer;
use tracing::info;

/// Result of one conversion, with enough detail to report on it
#[derive(Debug, Clone)]
pub struct Conversion {
    pub sheets: usize,
    pub rows: usize,
    pub blocks: Vec<Block>,
    pub output: String,
}

impl Conversion {
    pub fn match_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Match(_)))
            .count()
    }

    pub fn divisions(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Division(label) => Some(label.as_str()),
                Block::Match(_) => None,
            })
            .collect()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.output.into_bytes()
    }
}

/// Convert an already loaded table. An empty table is a hard failure.
pub fn convert_table(table: &RowTable, config: &ConverterConfig) -> ConvertResult<Conversion> {
    if table.is_empty() {
        return Err(ConvertError::NoData);
    }

    let blocks = classify(table, config);
    let output = writer::render(&blocks);
    let conversion = Conversion {
        sheets: table.sheets.len(),
        rows: table.len(),
        blocks,
        output,
    };

    info!(
        sheets = conversion.sheets,
        rows = conversion.rows,
        matches = conversion.match_count(),
        "conversion complete"
    );
    Ok(conversion)
}

/// Load a workbook from raw bytes and convert it
pub fn convert(bytes: &[u8], config: &ConverterConfig) -> ConvertResult<Conversion> {
    let table = WorkbookLoader::from_bytes(bytes).load()?;
    convert_table(&table, config)
}

/// Raw .xlsx bytes in, UTF-8 report bytes out
pub fn convert_bytes(bytes: &[u8], config: &ConverterConfig) -> ConvertResult<Vec<u8>> {
    convert(bytes, config).map(Conversion::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    #[test]
    fn test_empty_table_is_no_data() {
        let err = convert_table(&RowTable::new(), &ConverterConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoData));
    }

    #[test]
    fn test_header_only_sheets_are_no_data() {
        let mut table = RowTable::new();
        table.push_sheet("Blad1", vec![Data::String("Thuis".to_string())], vec![]);
        let err = convert_table(&table, &ConverterConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoData));
    }

    #[test]
    fn test_rows_without_fixtures_still_render_body() {
        let mut table = RowTable::new();
        table.push_sheet("Blad1", vec![], vec![vec![Data::String("opmerking".to_string())]]);

        let conversion = convert_table(&table, &ConverterConfig::default()).unwrap();
        assert_eq!(conversion.rows, 1);
        assert_eq!(conversion.match_count(), 0);
        assert_eq!(conversion.output, "<body>\n</body>");
    }
}
