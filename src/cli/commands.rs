use crate::config::ConverterConfig;
use crate::core::cell::to_clean_str;
use crate::core::{convert_table, scorers, ScorerSource};
use crate::error::ConvertResult;
use crate::excel::{ensure_xlsx, WorkbookLoader};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default report file name, as handed out by the upload service
pub const DEFAULT_OUTPUT: &str = "uitslagen_output.txt";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
) -> ConvertResult<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    println!("{}", "⚽ Uitslagen - Converting results".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    ensure_xlsx(&file_name(&input))?;
    let config = ConverterConfig::load_or_default(config.as_deref())?;

    if verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let table = WorkbookLoader::open(&input)?.load()?;

    if verbose {
        println!(
            "   Found {} sheets, {} rows\n",
            table.sheets.len(),
            table.len()
        );
    }

    let conversion = convert_table(&table, &config)?;

    if verbose {
        for label in conversion.divisions() {
            println!("   🏆 {}", label.bright_blue());
        }
        println!();
        println!("{}", "💾 Writing report...".cyan());
    }

    let matches = conversion.match_count();
    fs::write(&output, conversion.into_bytes())?;

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!("   Matches: {}", matches);
    println!("   Report:  {}\n", output.display());

    Ok(())
}

/// Execute the inspect command: show what the converter would detect
pub fn inspect(input: PathBuf, config: Option<PathBuf>) -> ConvertResult<()> {
    println!("{}", "🔍 Uitslagen - Inspecting workbook".bold().green());
    println!("   File: {}\n", input.display());

    let config = ConverterConfig::load_or_default(config.as_deref())?;
    let table = WorkbookLoader::open(&input)?.load()?;

    println!("   Sheets: {}", table.sheets.join(", "));
    println!("   Rows:   {}", table.len());
    println!("   Columns: {}", table.width());

    let second_header = to_clean_str(table.header(1));
    if config.is_division(&second_header) {
        println!(
            "   Initial division: {}",
            second_header.to_uppercase().bright_blue()
        );
    } else {
        println!("   Initial division: {}", "none".dimmed());
    }

    match scorers::locate(&table, &config.scorers) {
        ScorerSource::Header(col) => println!(
            "   Scorers column: {} ({})",
            col,
            format!("header '{}'", to_clean_str(table.header(col))).bright_yellow()
        ),
        ScorerSource::Heuristic { column, textual } => println!(
            "   Scorers column: {} ({})",
            column,
            format!("content, {} text values", textual).bright_yellow()
        ),
        ScorerSource::None => println!("   Scorers column: {}", "none".dimmed()),
    }
    println!();

    Ok(())
}
