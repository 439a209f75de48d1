//! Slip number allocation
//!
//! Numbers are sequential zero-padded decimals starting at "00001". The next
//! number is one past the highest numeric value in use, so the scheme is
//! gap-tolerant and never reuses a number. Callers must serialize allocation
//! with the append of the new slip; the store does this under its mutex.

use crate::model::Slip;

/// Digits in a formatted slip number
pub const SLIP_NUMBER_WIDTH: usize = 5;

/// Format a numeric value as a slip number
pub fn format_slip_number(n: u64) -> String {
    format!("{n:0width$}", width = SLIP_NUMBER_WIDTH)
}

/// Allocate the next slip number for the given register.
///
/// Slip numbers that do not parse as decimals are ignored by the scan.
pub fn next_slip_number(slips: &[Slip]) -> String {
    let max = slips
        .iter()
        .filter_map(|s| s.slip_number().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format_slip_number(max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PendingSlip;

    fn slip(number: &str) -> Slip {
        let mut pending =
            PendingSlip::new("00000".to_string(), "MH12AB1234", "Sand", 10.0).unwrap();
        pending.slip_number = number.to_string();
        Slip::Pending(pending)
    }

    #[test]
    fn test_empty_register_starts_at_one() {
        assert_eq!(next_slip_number(&[]), "00001");
    }

    #[test]
    fn test_increments_highest_number() {
        let slips = vec![slip("00001"), slip("00002")];
        assert_eq!(next_slip_number(&slips), "00003");
    }

    #[test]
    fn test_gap_tolerant() {
        let slips = vec![slip("00001"), slip("00041")];
        assert_eq!(next_slip_number(&slips), "00042");
    }

    #[test]
    fn test_ignores_non_numeric_numbers() {
        let slips = vec![slip("S-17"), slip("00004")];
        assert_eq!(next_slip_number(&slips), "00005");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_slip_number(7), "00007");
        assert_eq!(format_slip_number(12345), "12345");
    }
}
