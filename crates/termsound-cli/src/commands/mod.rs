//! CLI command implementations

pub mod generate_all;
