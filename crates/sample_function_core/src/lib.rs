//! Runtime-agnostic pieces of the sample function.
//!
//! This crate owns the response contract, the data client capability, and the
//! handler itself. It intentionally excludes AWS SDK and Lambda runtime concerns,
//! which live in `sample_function_lambda`.

pub mod contract;
pub mod data_client;
pub mod diagnostics;
pub mod handler;

#[cfg(test)]
mod test_helpers;
