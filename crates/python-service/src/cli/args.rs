//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ENV_FILE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Python Service - root metadata and health probes over HTTP
#[derive(Parser, Debug)]
#[command(name = "python-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Environment file read before the process environment, if present
    #[arg(long, global = true, env = "ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

impl ServeArgs {
    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
