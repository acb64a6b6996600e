//! Command-line surface over the graph core.

pub mod commands;
