//! CLI command definitions and dispatch for the `svcdir` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod service;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Campus service directory: REST API, web UI, and catalog tools.
#[derive(Parser)]
#[command(name = "svcdir", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API and web UI server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000, env = "PORT")]
        port: u16,

        /// Host interface to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Reset the catalog to the demo seed data.
    Seed,

    /// List services in the catalog.
    #[command(alias = "ls")]
    List {
        /// Restrict to one category (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
