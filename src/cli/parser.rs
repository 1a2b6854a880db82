use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for migralog
/// CLI application to track migraine episodes and report on them
#[derive(Parser)]
#[command(
    name = "migralog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple migraine diary CLI: log pain episodes, then derive calendars, summaries and reports",
    long_about = None
)]
pub struct Cli {
    /// Override record store path (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new pain episode
    Add {
        /// Date of the episode (YYYY-MM-DD)
        date: String,

        /// Time of onset
        #[arg(long = "time", help = "Time of onset: m=Morning, n=Noon, e=Evening")]
        time: Option<String>,

        /// Pain severity
        #[arg(
            long = "severity",
            default_value_t = 1,
            help = "Pain severity, 1 (mild) to 5 (worst)"
        )]
        severity: u8,

        /// Trigger tags (repeatable)
        #[arg(
            long = "trigger",
            help = "Trigger tag (repeatable): sleeplessness, fatigue, unknown, dehydration, hunger, heat, stress"
        )]
        triggers: Vec<String>,

        /// Free-text trigger
        #[arg(
            long = "other",
            conflicts_with = "triggers",
            help = "Free-text trigger (replaces any tag selection)"
        )]
        other: Option<String>,

        /// Optional note
        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,

        /// The episode happened on a work day
        #[arg(long = "workday", help = "The episode happened on a work day")]
        workday: bool,

        /// The episode happened on a day off
        #[arg(
            long = "rest-day",
            conflicts_with = "workday",
            help = "The episode happened on a day off"
        )]
        rest_day: bool,

        /// Pain location
        #[arg(
            long = "location",
            help = "Pain location: R=Right, L=Left, E=Eye, RS=Right Side, LS=Left Side"
        )]
        location: Option<String>,
    },

    /// Delete an episode by id
    Del {
        /// Episode id (as shown by `list`)
        id: i64,
    },

    /// List recorded episodes, newest first
    List {
        #[arg(
            long,
            short,
            help = "Filter by period: last7days, last30days, last3months, last6months, last1year, all"
        )]
        period: Option<String>,

        #[arg(
            long = "date",
            help = "Show only episodes recorded on one date (YYYY-MM-DD)"
        )]
        date: Option<String>,
    },

    /// Show the calendar index (dates with severity markers)
    Calendar,

    /// Show per-month summaries
    Summary,

    /// Show aggregate statistics for a period
    Stats {
        #[arg(long, short, help = "Filter by period (default: all)")]
        period: Option<String>,
    },

    /// Compose the text report for a period
    Report {
        #[arg(long, short, help = "Reporting period (default from config)")]
        period: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the report to FILE (or into FILE/ when it is a directory) instead of stdout"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Dump all episodes of one month as text
    Month {
        /// Month to dump (YYYY-MM)
        month: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the dump to FILE instead of stdout"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Export raw episode data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Restrict the export to a period")]
        period: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
