//! JWT token handling
//!
//! Bearer tokens carry the caller's identity, including the role keyword the
//! access gate resolves against.

mod handler;
pub mod types;


pub use types::{Claims, JwtHandler};
