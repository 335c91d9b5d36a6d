//! # xsdgen Bench
//!
//! Benchmarking utilities for xsdgen performance testing.

pub mod fixtures;
