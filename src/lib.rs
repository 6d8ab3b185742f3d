//! # EZTest Access
//!
//! Scope-based role access control for the EZTest test management platform.
//!
//! Every protected operation names a module (`prn`, `tc`, `tr`, `usr`, ...)
//! and an action (`r`, `w`, `u`, `d`). A role holds at most one privilege row
//! per module, capping the strongest action it may perform and fixing the data
//! scope (`all`, `project`, `own`) it works under. Actions are scored
//! `r=1 < w=2 < u=3 < d=4`, so a row capped at `u` also grants `r` and `w`.
//!
//! ## Checking a permission
//!
//! ```rust,no_run
//! use eztest_access::auth::rbac::{InMemoryPolicyStore, PermissionResolver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = PermissionResolver::new(Arc::new(InMemoryPolicyStore::with_defaults()));
//!     let decision = resolver.resolve("viewer", "tc", "r").await?;
//!     assert!(decision.access);
//!     assert_eq!(decision.scope_name, "project");
//!     Ok(())
//! }
//! ```
//!
//! ## Gating a route
//!
//! ```rust,no_run
//! use actix_web::{web, HttpResponse};
//! use eztest_access::server::middleware::AccessGate;
//!
//! fn routes(cfg: &mut web::ServiceConfig) {
//!     cfg.service(
//!         web::resource("/api/projects")
//!             .wrap(AccessGate::new("prn", "r"))
//!             .route(web::get().to(HttpResponse::Ok)),
//!     );
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod projects;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{PermissionResolver, PolicyStore, ScopeInfo, ScopeName};
pub use auth::{AuthMethod, UserInfo};
pub use config::Config;
pub use server::middleware::AccessGate;
pub use server::{AppState, HttpServer};
pub use utils::error::{AccessError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
