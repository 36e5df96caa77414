//! Extraction core: cell cleanup, scorers detection, row classification

pub mod cell;
pub mod classifier;
pub mod converter;
pub mod scorers;

pub use classifier::{classify, DivisionState, RowFields};
pub use converter::{convert, convert_bytes, convert_table, Conversion};
pub use scorers::ScorerSource;
