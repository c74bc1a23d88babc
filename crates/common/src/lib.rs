//! Shared building blocks for the dealdesk crates: wire types that more than
//! one crate serializes, and the tracing subscriber setup.

pub mod types;
pub mod utils;
