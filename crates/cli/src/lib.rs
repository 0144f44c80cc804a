//! # Argus CLI
//!
//! Command implementations and shared plumbing for the `argus` binary.

pub mod commands;
pub mod context;
pub mod interactive;
pub mod logging;
pub mod output;
