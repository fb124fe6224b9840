//! # auto-reply-cli
//!
//! Local harness for the auto-reply plugin: argument parsing, config loading, and a console
//! "group chat" that wires the plugin into a handler chain the way a host would.

pub mod app;
pub mod cli;
pub mod console;

pub use cli::{Cli, Commands};
