pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clock in, clock out. Attendance tracking backed by a plain CSV table.
///
/// Run without a subcommand for the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "asistencia", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Attendance table to use
    #[arg(long, global = true, env = "ASISTENCIA_FILE")]
    pub file: Option<PathBuf>,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Refuse clock-outs earlier than the clock-in instead of storing a negative duration
    #[arg(long, global = true)]
    pub same_day_only: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and reports
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the attendance table if it does not exist
    Init,

    /// Interactive menu (default)
    Menu,

    /// Register a clock-in for today
    Entry {
        /// Person clocking in
        name: String,
        /// Time to record instead of now (HH:MM:SS)
        #[arg(long)]
        at: Option<String>,
    },

    /// Register a clock-out, closing today's earliest open entry
    Exit {
        /// Person clocking out
        name: String,
        /// Time to record instead of now (HH:MM:SS)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show every session of one person and their total hours
    Report {
        /// Person to report on
        name: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Chart total hours per person
    Stats {
        /// Print JSON instead of a chart
        #[arg(long)]
        json: bool,
    },
}
