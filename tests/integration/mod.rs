//! Integration tests for eztest-access
//!
//! These tests exercise the real database and HTTP stack without mocking the
//! resolver.

pub mod access_gate_tests;
pub mod database_tests;
