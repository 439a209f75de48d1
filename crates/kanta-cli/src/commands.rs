//! Command handlers

use std::path::PathBuf;

use kanta_app::config::Config;
use kanta_app::export::export_register;
use kanta_app::print::render_print_view;
use kanta_app::repository::{open_settings_store, open_slip_store};
use kanta_domain::model::Slip;
use kanta_store::SlipStore;
use kanta_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_settings, output_slip, output_slips};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::New {
            vehicle,
            material,
            gross,
        } => cmd_new(&cli, &config, vehicle, material, *gross, output_format),

        Commands::Complete { slip_number, tare } => {
            cmd_complete(&config, slip_number, *tare, output_format)
        }

        Commands::List {
            pending,
            completed,
            search,
        } => cmd_list(&config, *pending, *completed, search.as_deref(), output_format),

        Commands::Print {
            slip_number,
            output,
        } => cmd_print(&config, slip_number, output.clone()),

        Commands::Status => cmd_status(&config),

        Commands::Export { output } => cmd_export(&cli, &config, output.clone()),

        Commands::Settings {
            show,
            set_company,
            set_address,
        } => cmd_settings(
            &config,
            *show,
            set_company.clone(),
            set_address.clone(),
            output_format,
        ),

        Commands::Config {
            show,
            set_output,
            set_data_dir,
            reset,
        } => cmd_config(*show, *set_output, set_data_dir.clone(), *reset),
    }
}

fn cmd_new(
    cli: &Cli,
    config: &Config,
    vehicle: &str,
    material: &str,
    gross: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_slip_store(config)?;

    if cli.verbose {
        eprintln!("Allocating slip number {}", store.next_number());
    }

    let slip = store.create(vehicle, material, gross)?;
    output_slip(output_format, &Slip::Pending(slip))
}

fn cmd_complete(
    config: &Config,
    slip_number: &str,
    tare: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_slip_store(config)?;
    let slip = resolve_slip(&store, slip_number)?;

    let completed = store.complete(slip.id(), tare)?;
    output_slip(output_format, &Slip::Complete(completed))
}

fn cmd_list(
    config: &Config,
    pending: bool,
    completed: bool,
    search: Option<&str>,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_slip_store(config)?;

    let slips = if pending && !completed {
        store.list_pending()
    } else if completed && !pending {
        store.list_complete()
    } else {
        store.list()
    };

    let slips: Vec<Slip> = match search {
        Some(term) => slips
            .into_iter()
            .filter(|s| matches_search(s, term))
            .collect(),
        None => slips,
    };

    output_slips(output_format, &slips)
}

fn cmd_print(config: &Config, slip_number: &str, output: Option<PathBuf>) -> Result<()> {
    let store = open_slip_store(config)?;
    let slip = resolve_slip(&store, slip_number)?;

    let complete = slip.as_complete().ok_or_else(|| {
        Error::InvalidState(format!(
            "slip {slip_number} is still pending; add the tare weighing before printing"
        ))
    })?;

    let settings = open_settings_store(config)?.get();
    let rendered = render_print_view(complete, &settings);

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Slip {} written to {}", slip_number, path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn cmd_status(config: &Config) -> Result<()> {
    let store = open_slip_store(config)?;

    println!("\nWeighbridge Register");
    println!("====================");
    println!("Total slips:     {}", store.count());
    println!("Pending:         {}", store.list_pending().len());
    println!("Completed:       {}", store.list_complete().len());
    println!("Next slip no.:   {}", store.next_number());

    Ok(())
}

fn cmd_export(cli: &Cli, config: &Config, output: PathBuf) -> Result<()> {
    let store = open_slip_store(config)?;
    let slips = store.list();

    if cli.verbose {
        eprintln!("Exporting {} slips", slips.len());
    }

    export_register(&slips, &output)?;
    println!("Register exported to {}", output.display());

    Ok(())
}

fn cmd_settings(
    config: &Config,
    show: bool,
    set_company: Option<String>,
    set_address: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let store = open_settings_store(config)?;

    if show || (set_company.is_none() && set_address.is_none()) {
        return output_settings(output_format, &store.get());
    }

    let mut settings = store.get();
    if let Some(company_name) = set_company {
        settings.company_name = company_name;
    }
    if let Some(address) = set_address {
        settings.address = address;
    }

    let saved = store.save(settings)?;
    println!("Settings saved");
    output_settings(output_format, &saved)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    if show || (set_output.is_none() && set_data_dir.is_none()) {
        let config = Config::load()?;
        println!("{config}");
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(format) = set_output {
        config.output_format = format;
    }
    if set_data_dir.is_some() {
        config.data_dir = set_data_dir;
    }
    config.save()?;
    println!("Configuration saved");

    Ok(())
}

/// Resolve an operator-typed slip number to its record
fn resolve_slip(store: &SlipStore, slip_number: &str) -> Result<Slip> {
    store
        .find_by_number(slip_number)
        .ok_or_else(|| Error::NotFound(slip_number.to_string()))
}

/// Case-insensitive match over the fields shown in the register table
fn matches_search(slip: &Slip, term: &str) -> bool {
    let term = term.to_lowercase();
    slip.slip_number().to_lowercase().contains(&term)
        || slip.vehicle_number().to_lowercase().contains(&term)
        || slip.material().to_lowercase().contains(&term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanta_domain::model::PendingSlip;

    fn slip() -> Slip {
        Slip::Pending(PendingSlip::new("00001".to_string(), "MH12AB1234", "Sand", 12.5).unwrap())
    }

    #[test]
    fn test_matches_search_by_vehicle() {
        assert!(matches_search(&slip(), "mh12"));
        assert!(matches_search(&slip(), "AB1234"));
    }

    #[test]
    fn test_matches_search_by_number_and_material() {
        assert!(matches_search(&slip(), "00001"));
        assert!(matches_search(&slip(), "sand"));
        assert!(!matches_search(&slip(), "gravel"));
    }
}
