use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorktime
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily clock-in/clock-out records: net hours, monthly averages, overtime and deficit",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit or update a setting)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        /// Update a single setting, e.g. `--set lunch_start=12:30`.
        ///
        /// Keys: lunch_start, lunch_end, dinner_start, dinner_end,
        /// overtime_lunch_start, overtime_lunch_end, required_start,
        /// required_end, required_daily_hours
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Option<String>,
    },

    /// Print the internal audit log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a record, or replace the record already stored for that date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,

        /// Day type: normal (n) or overtime (o)
        #[arg(long = "type", short = 't', default_value = "normal")]
        day_type: String,

        /// Free-text note stored with the record
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete the record for a date
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List records with their net hours
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, e.g. "2025-06:2025-08".
        ///
        /// Special value:
        /// - all                   → the entire archive
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, ranges, or all)"
        )]
        period: Option<String>,
    },

    /// Show the monthly dashboard (worked days, average, overtime, deficit)
    Stats {
        /// Reference date (YYYY-MM-DD); its month is summarized. Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the current time and the countdown to shift start/end
    Status {
        /// Evaluate at this time (HH:MM) instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// Export records with their net hours
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same syntax as `list --period`).
        /// If omitted, all records are exported.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
