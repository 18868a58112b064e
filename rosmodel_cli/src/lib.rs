//! rosmodel CLI library
//!
//! Commands, output helpers, configuration, and the model renderer used by
//! the `rosmodel` binary.

pub mod cli_output;
pub mod commands;
pub mod config;
pub mod render;
