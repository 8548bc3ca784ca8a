//! CLI infrastructure: commands and console output helpers

pub mod commands;
pub mod output;
