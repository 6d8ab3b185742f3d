//! Authentication and authorization
//!
//! Identity comes from a session cookie or a bearer JWT. Authorization is
//! role based: [`rbac::PermissionResolver`] decides whether a role may perform
//! an action on a module and which data scope applies.

pub mod identity;
pub mod jwt;
pub mod rbac;
pub mod session;
pub mod types;


pub use identity::IdentityResolver;
pub use session::{InMemorySessionStore, SessionStore};
pub use types::{AuthMethod, UserInfo};
