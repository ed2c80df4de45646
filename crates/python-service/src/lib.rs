//! Python Service - a minimal web-service scaffold
//!
//! Exposes a root metadata endpoint and liveness/readiness probes, backed by
//! settings read from the environment once at startup.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings and constants
//! - **api**: HTTP handlers, routes and OpenAPI docs
//! - **types**: Shared response envelope
//! - **errors**: Startup and server errors
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (8000)
//! cargo run -- serve
//!
//! # Bind elsewhere, reading a non-default env file
//! cargo run -- --env-file .env.local serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Settings;
pub use errors::{AppError, AppResult};
