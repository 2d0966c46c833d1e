//! Blueprint command line and HTTP front end.

pub mod api;
pub mod cli;
pub mod commands;
pub mod server;

pub use api::{handle_export, ApiResponse, ExportFormat, ExportRequest};
pub use server::{router, serve};
