//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kanta_types::OutputFormat;

#[derive(Parser)]
#[command(name = "dharam-kanta")]
#[command(version)]
#[command(about = "Digital weighbridge register - gross/tare weighment slips")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new slip from the gross weighing
    New {
        /// Vehicle number (normalized to upper case)
        #[arg(long, short = 'n')]
        vehicle: String,

        /// Material description (e.g. "Sand", "Gravel")
        #[arg(long, short = 'm')]
        material: String,

        /// Gross weight in tons
        #[arg(long, short = 'g')]
        gross: f64,
    },

    /// Complete a pending slip with the tare weighing
    Complete {
        /// Slip number (e.g. 00042)
        slip_number: String,

        /// Tare weight in tons
        #[arg(long, short = 't')]
        tare: f64,
    },

    /// List slips in the register
    List {
        /// Show only pending slips
        #[arg(long)]
        pending: bool,

        /// Show only completed slips
        #[arg(long)]
        completed: bool,

        /// Filter by slip number, vehicle number or material
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Print a completed slip (customer and office copies)
    Print {
        /// Slip number (e.g. 00042)
        slip_number: String,

        /// Write the rendered slip to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show register counts and the next slip number
    Status,

    /// Export the register to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o', default_value = "register.xlsx")]
        output: PathBuf,
    },

    /// Manage issuer settings printed on slips
    Settings {
        /// Show current settings
        #[arg(long)]
        show: bool,

        /// Set company name
        #[arg(long)]
        set_company: Option<String>,

        /// Set address
        #[arg(long)]
        set_address: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
