use crate::core::TimePrecedence;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate factory work logs (CSV) and build daily / per-process reports",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an input CSV and write the error report
    Validate {
        /// Input CSV (UTF-8)
        #[arg(long, short = 'i', value_name = "CSV", default_value = "data/raw/sample_worklog.csv")]
        input: String,

        /// Error report path (default: <output_dir>/errors.csv)
        #[arg(long, value_name = "FILE")]
        errors: Option<String>,

        /// Which time encoding wins when a row has both start/end and minutes
        #[arg(long, value_enum)]
        precedence: Option<TimePrecedence>,
    },

    /// Validate, aggregate and write the reports (CSV + HTML)
    Build {
        /// Input CSV (UTF-8)
        #[arg(long, short = 'i', value_name = "CSV", default_value = "data/raw/sample_worklog.csv")]
        input: String,

        /// Output directory (default: output_dir from the configuration)
        #[arg(long, short = 'o', value_name = "DIR")]
        out: Option<String>,

        /// Also write report.json
        #[arg(long)]
        json: bool,

        /// Which time encoding wins when a row has both start/end and minutes
        #[arg(long, value_enum)]
        precedence: Option<TimePrecedence>,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long,
            short = 'f',
            requires = "init",
            help = "Overwrite an existing configuration file"
        )]
        force: bool,
    },
}
