//! Converter configuration
//!
//! The source spreadsheets carry no reliable column names, so every
//! position and keyword the converter relies on lives here. A YAML file
//! may override any subset of it:
//!
//! ```yaml
//! columns:
//!   home: 2
//!   away: 4
//! scorers:
//!   min_index: 12
//! ```

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Zero-based column positions of the match fields, counted from column A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub home: usize,
    pub away: usize,
    pub home_goals: usize,
    pub away_goals: usize,
    pub home_half_time: usize,
    pub away_half_time: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            home: 1,
            away: 3,
            home_goals: 5,
            away_goals: 7,
            home_half_time: 8,
            away_half_time: 10,
        }
    }
}

/// How the goal scorers column is found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerDetection {
    /// Header substrings (lowercase) that name the scorers column
    pub keywords: Vec<String>,
    /// Only columns with an index strictly above this are sampled
    pub min_index: usize,
    /// Non-missing values sampled per column
    pub sample_size: usize,
}

impl Default for ScorerDetection {
    fn default() -> Self {
        Self {
            keywords: vec![
                "doelpunt".to_string(),
                "makers".to_string(),
                "scorer".to_string(),
            ],
            min_index: 10,
            sample_size: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub columns: ColumnMap,
    pub scorers: ScorerDetection,
    /// Substrings marking a division/class header cell
    pub division_keywords: Vec<String>,
    /// Substrings in the home goals cell marking a postponed or abandoned match
    pub postponed_markers: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            scorers: ScorerDetection::default(),
            division_keywords: vec!["divisie".to_string(), "klasse".to_string()],
            postponed_markers: vec!["afg".to_string(), "gest".to_string()],
        }
    }
}

impl ConverterConfig {
    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> ConvertResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConvertResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> ConvertResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConvertResult<()> {
        check_keywords("division_keywords", &self.division_keywords)?;
        check_keywords("postponed_markers", &self.postponed_markers)?;
        check_keywords("scorers.keywords", &self.scorers.keywords)?;
        if self.scorers.sample_size == 0 {
            return Err(ConvertError::Config(
                "scorers.sample_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Case-insensitive division/class keyword match
    pub fn is_division(&self, text: &str) -> bool {
        contains_any(text, &self.division_keywords)
    }

    pub fn is_postponed(&self, goals_cell: &str) -> bool {
        contains_any(goals_cell, &self.postponed_markers)
    }
}

/// Case-insensitive substring test against lowercase keywords
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    let lower = text.trim().to_lowercase();
    keywords.iter().any(|k| lower.contains(k.as_str()))
}

fn check_keywords(field: &str, keywords: &[String]) -> ConvertResult<()> {
    if keywords.is_empty() {
        return Err(ConvertError::Config(format!("{} must not be empty", field)));
    }
    for k in keywords {
        if k.trim().is_empty() {
            return Err(ConvertError::Config(format!(
                "{} contains an empty keyword",
                field
            )));
        }
        if *k != k.to_lowercase() {
            return Err(ConvertError::Config(format!(
                "{} keyword '{}' must be lowercase",
                field, k
            )));
        }
    }
    Ok(())
}
