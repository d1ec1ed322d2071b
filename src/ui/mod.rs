//! Shared UI constants.

pub mod tokens;
