//! Uitslagen API Server binary
//!
//! Upload service around the converter: POST an .xlsx, get the text report back.

use std::path::PathBuf;

use clap::Parser;
use uitslagen::api::{
    run_api_server,
    server::{ApiConfig, DEFAULT_MAX_UPLOAD_BYTES},
};
use uitslagen::config::ConverterConfig;

#[derive(Parser, Debug)]
#[command(name = "uitslagen-server")]
#[command(version)]
#[command(author = "RoyalBit Inc. <admin@royalbit.ca>")]
#[command(about = "Uitslagen Server - upload football results spreadsheets, download the text report")]
#[command(long_about = r#"
Uitslagen Server - HTTP upload service

Endpoints:
  - POST /api/v1/convert   - Upload an .xlsx (multipart field "file"),
                             receive uitslagen_output.txt
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Features:
  - Upload size limit (default 10 MiB)
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON error responses with request IDs
  - Tracing and structured logging

Example usage:
  uitslagen-server                           # Start on localhost:8080
  uitslagen-server --host 0.0.0.0 --port 5000

  curl -F "file=@uitslagen.xlsx" -OJ http://localhost:8080/api/v1/convert
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "UITSLAGEN_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "UITSLAGEN_PORT")]
    port: u16,

    /// Maximum upload size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "UITSLAGEN_MAX_UPLOAD")]
    max_upload: usize,

    /// YAML file overriding column positions and keywords
    #[arg(short, long, env = "UITSLAGEN_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload,
        converter: ConverterConfig::load_or_default(args.config.as_deref())?,
    };

    run_api_server(config).await
}
