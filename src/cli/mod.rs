pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::config::app_config::DEFAULT_CONFIG_FILE;

/// Job-board store with an audit trail of every call.
#[derive(Parser, Debug)]
#[command(name = "jobdb", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(long, global = true, env = "JOBDB_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Audit log file (overrides [audit] log_file)
    #[arg(long, global = true)]
    pub audit_log: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a board seed file into a fresh store, through the audit log
    Seed {
        /// TOML file with [[companies]], [[jobs]], [[users]], [[cvs]], [[applications]]
        file: String,
    },

    /// Show recorded store operations
    Log {
        /// Filter by operation name (e.g. addCompany)
        #[arg(long)]
        action: Option<String>,
        /// Filter by thread name
        #[arg(long)]
        thread: Option<String>,
        /// Show last N entries
        #[arg(long)]
        last: Option<usize>,
        /// Print entries as JSON lines
        #[arg(long)]
        json: bool,
    },
}
