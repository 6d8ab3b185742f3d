//! HTTP middleware implementations
//!
//! - Access gate (identity plus role/module/action check per resource)
//! - Request ID tracking

mod access_gate;
mod helpers;
mod request_id;


pub(crate) use access_gate::bounded;
pub use access_gate::{get_scope_info, get_user_info, AccessGate, AccessGateService};
pub use helpers::extract_auth_method;
pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService};
