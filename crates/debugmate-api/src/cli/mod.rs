//! CLI command definitions for the `debugmate` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod transcript;

use clap::{Parser, Subcommand};

/// Debugging assistant backend.
#[derive(Parser)]
#[command(name = "debugmate", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
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
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "3000", env = "DEBUGMATE_PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "DEBUGMATE_HOST")]
        host: String,
    },

    /// Print the message transcript of a session.
    Transcript {
        /// Session id to display.
        session_id: i64,
    },
}
