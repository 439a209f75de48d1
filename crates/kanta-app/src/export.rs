//! Excel export of the slip register

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use kanta_domain::model::Slip;
use kanta_domain::service::slip_number::next_slip_number;
use kanta_types::{Error, Result};

use crate::print::format_slip_time;

/// Export the register to an Excel file
pub fn export_register(slips: &[Slip], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, slips)?;

    // Add register sheet
    let register_sheet = workbook.add_worksheet();
    write_register_sheet(register_sheet, slips)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, slips: &[Slip]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Weighbridge Register", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let pending = slips.iter().filter(|s| s.is_pending()).count();
    let completed = slips.iter().filter(|s| s.is_complete()).count();

    sheet
        .write_string(2, 0, "Total slips:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, slips.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Pending:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, pending as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Completed:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, completed as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Next slip no.:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(5, 1, &next_slip_number(slips))
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_register_sheet(sheet: &mut Worksheet, slips: &[Slip]) -> Result<()> {
    sheet
        .set_name("Register")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Slip No.",
        "Status",
        "Vehicle No.",
        "Material",
        "Gross (ton)",
        "Gross Time",
        "Tare (ton)",
        "Tare Time",
        "Net (ton)",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, slip) in slips.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet
            .write_string(row, 0, slip.slip_number())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, slip.status().to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, slip.vehicle_number())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, slip.material())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, slip.gross_weight())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, format_slip_time(slip.gross_weight_time()))
            .map_err(|e| Error::Excel(e.to_string()))?;

        // Tare columns stay empty while the slip is pending
        if let Some(complete) = slip.as_complete() {
            sheet
                .write_number(row, 6, complete.tare_weight)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_string(row, 7, format_slip_time(complete.tare_weight_time))
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 8, complete.net_weight)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanta_domain::model::PendingSlip;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_workbook() {
        let slips = vec![
            Slip::Pending(
                PendingSlip::new("00001".to_string(), "MH12AB1234", "Sand", 12.5).unwrap(),
            ),
            Slip::Complete(
                PendingSlip::new("00002".to_string(), "KA05CD6789", "Gravel", 9.0)
                    .unwrap()
                    .complete(3.1)
                    .unwrap(),
            ),
        ];

        let dir = tempdir().unwrap();
        let path = dir.path().join("register.xlsx");
        export_register(&slips, &path).unwrap();
        assert!(path.exists());
    }
}
