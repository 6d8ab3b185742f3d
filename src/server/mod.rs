//! HTTP server implementation
//!
//! Routes, the access gate middleware and server lifecycle.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::run_server;
pub use server::HttpServer;
pub use state::AppState;
