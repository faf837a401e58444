//! Shared types and helpers used across the contact_hub crates.

pub mod types;
pub mod utils;
