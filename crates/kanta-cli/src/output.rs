//! Output formatting module

use kanta_app::print::format_slip_time;
use kanta_domain::model::{Settings, Slip, SlipStatus};
use kanta_domain::service::weight::format_weight;
use kanta_types::{OutputFormat, Result};

/// Print a single slip
pub fn output_slip(output_format: OutputFormat, slip: &Slip) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(slip)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nSlip {}", slip.slip_number());
        println!("==========");
        println!("Status:          {}", slip.status());
        println!("Vehicle No.:     {}", slip.vehicle_number());
        println!("Material:        {}", slip.material());
        println!("Gross weight:    {}", format_weight(slip.gross_weight()));
        println!("Gross time:      {}", format_slip_time(slip.gross_weight_time()));

        if let Some(complete) = slip.as_complete() {
            println!("Tare weight:     {}", format_weight(complete.tare_weight));
            println!("Tare time:       {}", format_slip_time(complete.tare_weight_time));
            println!("Net weight:      {}", format_weight(complete.net_weight));
        }
    }

    Ok(())
}

/// Print the register listing
pub fn output_slips(output_format: OutputFormat, slips: &[Slip]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(slips)?;
        println!("{}", content);
        return Ok(());
    }

    if slips.is_empty() {
        println!("No slips found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:<14} {:<16} {:>12} {:>12}",
        "Slip No.", "Status", "Vehicle No.", "Material", "Gross (ton)", "Net (ton)"
    );
    for slip in slips {
        let net = match slip.as_complete() {
            Some(complete) => format!("{:.3}", complete.net_weight),
            None => "-".to_string(),
        };
        println!(
            "{:<10} {:<10} {:<14} {:<16} {:>12.3} {:>12}",
            slip.slip_number(),
            slip.status().to_string(),
            slip.vehicle_number(),
            slip.material(),
            slip.gross_weight(),
            net
        );
    }
    println!(
        "\n{} slips ({} pending, {} completed)",
        slips.len(),
        slips.iter().filter(|s| s.status() == SlipStatus::Pending).count(),
        slips.iter().filter(|s| s.status() == SlipStatus::Complete).count()
    );

    Ok(())
}

/// Print the issuer settings
pub fn output_settings(output_format: OutputFormat, settings: &Settings) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(settings)?;
        println!("{}", content);
    } else {
        println!("\nIssuer Settings");
        println!("===============");
        println!("Company name:    {}", settings.company_name);
        println!("Address:         {}", settings.address);
    }

    Ok(())
}
