use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use uitslagen::cli;

#[derive(Parser)]
#[command(name = "uitslagen")]
#[command(about = "Convert football results spreadsheets into a tagged text report.")]
#[command(long_about = "Uitslagen - football results spreadsheet converter

Reads every sheet of an .xlsx file, detects division headers, fixtures,
postponed matches and goal scorers, and writes a tagged text report.

COMMANDS:
  convert   - Convert an .xlsx file to the tagged text report
  inspect   - Show the sheets and columns the converter detects

EXAMPLES:
  uitslagen convert uitslagen.xlsx
  uitslagen convert uitslagen.xlsx -o zaterdag.txt --config kolommen.yaml
  uitslagen inspect uitslagen.xlsx")]
#[command(version)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert an .xlsx results file to the tagged text report.

OUTPUT FORMAT:
  <body>
  <subhead_lead>2E KLASSE A</subhead_lead>
  <subhead>Home - Away 2-1 (1-0)</subhead>
  <howto_facts>
  scorers
  </howto_facts>
  </body>

Postponed matches keep their status text: <subhead>Home - Away afgelast</subhead>

COLUMN CONFIG (optional YAML, any subset):
  columns:
    home: 1
    away: 3
    home_goals: 5
    away_goals: 7
    home_half_time: 8
    away_half_time: 10")]
    /// Convert an .xlsx file to the tagged text report
    Convert {
        /// Path to Excel file (.xlsx)
        input: PathBuf,

        /// Output text file (default: uitslagen_output.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file overriding column positions and keywords
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the sheets and columns the converter detects
    Inspect {
        /// Path to Excel file (.xlsx)
        input: PathBuf,

        /// YAML file overriding column positions and keywords
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "uitslagen=debug"
    } else {
        "uitslagen=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            config,
        } => cli::convert(input, output, config, cli.verbose),

        Commands::Inspect { input, config } => cli::inspect(input, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
