//! Dharam Kanta - digital weighbridge register
//!
//! A CLI tool that records weighment slips: gross weighing in, tare
//! weighing out, net cargo weight derived and frozen.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
