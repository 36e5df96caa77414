//! Uitslagen HTTP upload service
//!
//! Thin transport around the converter. Run with `uitslagen-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server};
