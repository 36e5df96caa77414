//! Cell normalization and lenient number parsing
//!
//! Match sheets are typed in by hand, so nothing here fails: unreadable
//! values become an empty string or `None`.

use calamine::{CellErrorType, Data};

/// Text values the workbook reader treats as "no value"
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for empty cells, `#N/A` cells and NA marker strings.
///
/// Other error cells (`#DIV/0!`, `#VALUE!`) are kept and render as text.
pub fn is_missing(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(CellErrorType::NA) => true,
        Data::Error(_) => false,
        Data::String(s) => NA_MARKERS.contains(&s.as_str()),
        Data::Float(f) => f.is_nan(),
        _ => false,
    }
}

/// Trimmed display string for a cell; missing values become `""`
pub fn to_clean_str(cell: &Data) -> String {
    if is_missing(cell) {
        return String::new();
    }
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Parse a float, accepting a decimal comma and surrounding whitespace
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.replace(',', ".").parse::<f64>().ok()
}

/// Best-effort integer: parse as a float, then truncate.
///
/// Empty input, `"none"`, non-numbers and non-finite values give `None`.
pub fn parse_int_safe(s: &str) -> Option<i64> {
    if s.trim().eq_ignore_ascii_case("none") {
        return None;
    }
    let value = parse_number(s)?.trunc();
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
