//! Printed weighment slip rendering
//!
//! Renders one completed slip plus the issuer settings as the paper
//! artifact: two copies (customer and office), issuer header, detail rows,
//! emphasized net weight, signatory footer. The weight format
//! (`"<value to 3 decimals> ton"`) matches existing printed paperwork.

use chrono::{DateTime, Utc};

use kanta_domain::model::{CompleteSlip, Settings};
use kanta_domain::service::weight::format_weight;

const SLIP_WIDTH: usize = 48;
const LABEL_WIDTH: usize = 20;

/// Timestamp format used on the printed slip
pub fn format_slip_time(time: DateTime<Utc>) -> String {
    time.format("%d %B %Y, %I:%M %p").to_string()
}

/// Render both copies of the weighment slip
pub fn render_print_view(slip: &CompleteSlip, settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(&render_copy(slip, settings, "Customer Copy"));
    out.push('\n');
    out.push_str(&render_copy(slip, settings, "Office Copy"));
    out
}

fn render_copy(slip: &CompleteSlip, settings: &Settings, copy_title: &str) -> String {
    let rule = "=".repeat(SLIP_WIDTH);
    let thin_rule = "-".repeat(SLIP_WIDTH);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&centered(&settings.company_name));
    out.push_str(&centered(&settings.address));
    out.push_str(&thin_rule);
    out.push('\n');
    out.push_str(&centered(&format!("Weighment Slip ({copy_title})")));
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&row("Slip No.", &slip.slip_number));
    out.push_str(&row("Vehicle No.", &slip.vehicle_number));
    out.push_str(&row("Material", &slip.material));
    out.push_str(&row("Gross Weight", &format_weight(slip.gross_weight)));
    out.push_str(&row(
        "Gross Weight Time",
        &format_slip_time(slip.gross_weight_time),
    ));
    out.push_str(&row("Tare Weight", &format_weight(slip.tare_weight)));
    out.push_str(&row(
        "Tare Weight Time",
        &format_slip_time(slip.tare_weight_time),
    ));
    // Emphasized, as on the paper slip
    out.push_str(&row("NET WEIGHT", &format_weight(slip.net_weight)));

    out.push_str(&thin_rule);
    out.push('\n');
    out.push_str(&centered("_________________________"));
    out.push_str(&centered("Authorised Signatory"));
    out
}

fn centered(text: &str) -> String {
    format!("{text:^width$}\n", width = SLIP_WIDTH)
}

fn row(label: &str, value: &str) -> String {
    format!("{label:<width$}{value}\n", width = LABEL_WIDTH)
}
