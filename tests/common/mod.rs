//! Common test utilities
//!
//! ```rust,ignore
//! use crate::common::{database::TestDatabase, fixtures::UserFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::seeded().await;
//!     let tester = UserFactory::with_role("tester");
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;

pub use database::TestDatabase;
pub use fixtures::{CountingPolicyStore, UserFactory};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
