//! # avalon-cli — subcommand handlers
//!
//! Each subcommand lives in its own module as an args struct plus a
//! `run_*` function returning the process exit code. The binary entry
//! point in `main.rs` only parses arguments, configures tracing, and
//! dispatches.

pub mod schemas;
pub mod validate;
