//! Error types and error handling for the calculator.
//!
//! This module defines the error types used throughout the pipeline:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - The category each variant reports to the user
//! - Helpful suggestions attached to some errors

pub mod errors;

#[cfg(test)]
mod tests;
