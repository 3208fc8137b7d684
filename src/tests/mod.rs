//! Test modules for Kilo Search.
//!
//! This module contains crate-level testing infrastructure:
//! - Unit tests for configuration and error handling
//! - Property-based tests for the trie using proptest
//! - Test fixtures and utilities
//!
//! Tests that set environment variables use a unique prefix each, so they can
//! run in parallel without observing one another.

pub mod config_tests;
