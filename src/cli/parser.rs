use crate::engine::Direction;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for vaxreport
/// CLI application to reconcile school vaccination records and export reports
#[derive(Parser)]
#[command(
    name = "vaxreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile school vaccination records against drive data and export campaign reports",
    long_about = None
)]
pub struct Cli {
    /// Override the students source file (JSON array)
    #[arg(global = true, long = "students")]
    pub students: Option<String>,

    /// Override the drives source file (JSON array)
    #[arg(global = true, long = "drives")]
    pub drives: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconciled vaccination report (one row per student/vaccine pair)
    Report {
        #[arg(
            long,
            default_value = "All",
            help = "Filter rows by exact vaccine name ('All' keeps everything)"
        )]
        vaccine: String,

        #[arg(long, help = "Zero-based page index")]
        page: Option<usize>,

        #[arg(long = "page-size", help = "Rows per page (default from config)")]
        page_size: Option<usize>,

        #[arg(long = "options", help = "Print the available vaccine filter options")]
        options: bool,
    },

    /// Dashboard statistics (total / vaccinated / unvaccinated students)
    Stats,

    /// List vaccination drives
    Drives {
        #[arg(long, help = "Only drives inside the upcoming window")]
        upcoming: bool,

        #[arg(
            long,
            value_name = "DATE",
            help = "Reference date for the upcoming window (YYYY-MM-DD, default today)"
        )]
        now: Option<String>,

        #[arg(long, help = "Upcoming window size in days (default from config)")]
        horizon: Option<i64>,

        #[arg(long, value_enum, help = "Sort by drive date")]
        sort: Option<Direction>,
    },

    /// List students
    Students {
        #[arg(
            long,
            short,
            default_value = "",
            help = "Search by name, class, ID, or vaccine"
        )]
        query: String,
    },

    /// Bulk-import students from a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the canonical student records as JSON (usable as --students source)"
        )]
        out: Option<String>,
    },

    /// Print a sample bulk-import CSV
    SampleCsv,

    /// Export the vaccination report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            default_value = "All",
            help = "Filter rows by exact vaccine name before exporting"
        )]
        vaccine: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
