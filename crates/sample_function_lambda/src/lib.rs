//! AWS-oriented adapters for the sample function.
//!
//! This crate owns runtime integration details (the Lambda entry point and the
//! DynamoDB-backed data client) and delegates all response logic to
//! `sample_function_core`.

pub mod adapters;
