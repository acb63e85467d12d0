//! CLI module for the name verdict gateway
//!
//! - `serve`: run the HTTP API
//! - `classify`: classify one name and print the verdict

pub mod classify;
pub mod serve;

use clap::{Parser, Subcommand};

/// Name Verdict Gateway - judges whether a name looks like a real human name
#[derive(Parser)]
#[command(name = "name-verdict-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Classify a single name and print the verdict as JSON
    Classify(classify::ClassifyArgs),
}
