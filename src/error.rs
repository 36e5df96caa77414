use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Could not read workbook: {0}")]
    Workbook(String),

    #[error("No data found in the Excel file")]
    NoData,

    #[error("Unsupported file type: {0} (only .xlsx files are accepted)")]
    UnsupportedFile(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
