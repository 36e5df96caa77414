//! Excel input
//!
//! Reads uploaded .xlsx workbooks into the unified row table the converter walks.

mod importer;

pub use importer::WorkbookLoader;

use crate::error::{ConvertError, ConvertResult};

/// Reject file names that are not .xlsx (case-insensitive)
pub fn ensure_xlsx(file_name: &str) -> ConvertResult<()> {
    if file_name.to_lowercase().ends_with(".xlsx") {
        Ok(())
    } else {
        Err(ConvertError::UnsupportedFile(file_name.to_string()))
    }
}
