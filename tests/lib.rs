//! Test suite for eztest-access
//!
//! ## Test Categories
//!
//! ### Common Utilities (`common/`)
//! - In-memory SQLite databases with migrations applied
//! - Counting and failing policy stores, user fixtures
//!
//! ### Integration Tests (`integration/`)
//! - The seeded database as policy and session store
//! - The access gate in front of real handlers
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
