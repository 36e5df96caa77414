//! Uitslagen - football results spreadsheet to tagged text
//!
//! Reads every worksheet of an .xlsx file of match results, finds the
//! division headers, fixtures and goal scorers, and renders a flat tagged
//! report grouped by division.
//!
//! # Example
//!
//! ```no_run
//! use uitslagen::config::ConverterConfig;
//! use uitslagen::core::convert;
//!
//! let bytes = std::fs::read("uitslagen.xlsx")?;
//! let conversion = convert(&bytes, &ConverterConfig::default())?;
//!
//! println!("Matches: {}", conversion.match_count());
//! std::fs::write("uitslagen_output.txt", conversion.into_bytes())?;
//! # Ok::<(), uitslagen::error::ConvertError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::{ColumnMap, ConverterConfig};
pub use error::{ConvertError, ConvertResult};
pub use types::{Block, MatchBlock, Outcome, RowTable, SheetRow};
