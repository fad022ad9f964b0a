//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! The store is purely in-memory, so each invocation builds, drives, and
//! drops its own [`TaskStore`](crate::domain::TaskStore): `demo` runs the
//! sample walkthrough, `check-date` runs the calendar validator on its
//! arguments.
//!
//! All commands support `--format text|json` and a `--limits <path>` TOML
//! override for the store bounds. Call [`run()`] to parse arguments and
//! execute the appropriate command.

mod app;
mod demo;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
