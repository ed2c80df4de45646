//! HTTP request handlers.

pub mod health_handler;
pub mod root_handler;

pub use health_handler::health_routes;
pub use root_handler::root;
