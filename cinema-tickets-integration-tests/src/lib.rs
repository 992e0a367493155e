//! Integration tests for `cinema-tickets`
//!
//! This crate contains integration tests that verify the interaction between
//! the core library and the in-memory payment and seat reservation services.

// This is a test-only crate
#![cfg(test)]
