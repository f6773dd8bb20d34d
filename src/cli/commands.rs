//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "habitr")]
#[command(about = "Habit tracker for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new habit tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default periodicity for new habits (daily, weekly)
        #[arg(short, long, default_value = "daily")]
        periodicity: String,
    },

    /// Create a new habit
    Add {
        /// Habit name
        name: String,

        /// Periodicity (daily, weekly); defaults to the configured value
        #[arg(short, long)]
        periodicity: Option<String>,
    },

    /// Mark a habit as completed
    Done {
        /// Habit name
        name: String,

        /// Completion timestamp (ISO-8601); defaults to now
        #[arg(long)]
        at: Option<String>,
    },

    /// List tracked habits
    List {
        /// Only show habits with this periodicity (daily, weekly)
        #[arg(short, long)]
        periodicity: Option<String>,
    },

    /// Show streak analytics, or details for one habit
    Streaks {
        /// Habit name
        name: Option<String>,
    },

    /// Show which habits are broken
    Broken {
        /// Reference timestamp (ISO-8601); defaults to now
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Delete a habit and its completions
    Delete {
        /// Habit name
        name: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Start the interactive menu
    Menu,
}
